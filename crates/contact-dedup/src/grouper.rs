//! Anchor-based equivalence grouping.

use contact_model::{MatchGroup, Record};
use tracing::{debug, trace};

use crate::matcher::match_criterion;

/// Partitions record indices into match groups.
///
/// Records are visited in input order. Each record not yet assigned becomes
/// the anchor of a new group, and every other unassigned record that matches
/// the anchor directly joins it in scan order. Members are never compared
/// with each other, so matches do not chain beyond the anchor.
pub fn group_records(records: &[Record]) -> Vec<MatchGroup> {
    let mut assigned = vec![false; records.len()];
    let mut groups = Vec::new();

    for anchor in 0..records.len() {
        if assigned[anchor] {
            continue;
        }
        let mut group = MatchGroup::new(anchor);
        for candidate in 0..records.len() {
            if candidate == anchor || assigned[candidate] {
                continue;
            }
            if let Some(criterion) = match_criterion(&records[anchor], &records[candidate]) {
                trace!(anchor, candidate, %criterion, "candidate matched anchor");
                group.push(candidate, criterion);
            }
        }
        for &member in &group.members {
            assigned[member] = true;
        }
        if group.len() > 1 {
            debug!(
                anchor,
                members = group.len(),
                status = %group.status,
                "formed match group"
            );
        }
        groups.push(group);
    }

    groups
}
