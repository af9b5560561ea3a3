//! Contact record linkage.
//!
//! Records are grouped with a tiered identity rule (email, then LinkedIn URL,
//! then first + last name) and each group is flattened into one output row.
//!
//! Grouping is one hop from an anchor: a record joins a group only when it
//! matches the group's anchor directly. A chain `A ~ B ~ C` where `A` and `C`
//! share nothing leaves `C` outside `A`'s group. Every unassigned record is
//! compared with every other unassigned record, so the cost is quadratic in
//! the number of records.

pub mod grouper;
pub mod matcher;
pub mod merge;

pub use grouper::group_records;
pub use matcher::{match_criterion, strip_www};
pub use merge::{merge_group, merge_groups, output_columns};

use contact_model::{MergedTable, Record};
use tracing::info;

/// Groups the unified table and merges each group into one output row.
///
/// Output rows follow group order, which is anchor order in the input.
pub fn group_and_merge(records: &[Record]) -> MergedTable {
    let groups = group_records(records);
    let rows = merge_groups(records, &groups);
    info!(
        records = records.len(),
        groups = groups.len(),
        "grouped and merged records"
    );
    MergedTable {
        columns: output_columns(records),
        rows,
    }
}
