//! First-non-null merging of match groups.

use std::collections::{BTreeMap, BTreeSet};

use contact_model::{MatchGroup, MergedRecord, Record};

/// Union of all prefixed source columns in first-appearance order.
pub fn output_columns(records: &[Record]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut columns = Vec::new();
    for record in records {
        for name in record.column_names() {
            if seen.insert(name) {
                columns.push(name.to_string());
            }
        }
    }
    columns
}

/// Flattens one group: each column takes the first present value in member order.
///
/// Member order is the anchor followed by matched records in scan order.
/// Standardized identity fields and the source tag are not output columns.
pub fn merge_group(records: &[Record], group: &MatchGroup) -> MergedRecord {
    let mut values = BTreeMap::new();
    for &index in &group.members {
        for (name, value) in records[index].present_values() {
            values
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
    }
    MergedRecord {
        status: group.status,
        member_count: group.len(),
        values,
    }
}

pub fn merge_groups(records: &[Record], groups: &[MatchGroup]) -> Vec<MergedRecord> {
    groups
        .iter()
        .map(|group| merge_group(records, group))
        .collect()
}
