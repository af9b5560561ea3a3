//! Match groups and their flattened output rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::status::MatchStatus;

/// Name of the first output column.
pub const MATCH_STATUS_COLUMN: &str = "MATCH_STATUS";

/// Record indices judged to denote one contact.
///
/// `members[0]` is the anchor; the remaining indices follow in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub members: Vec<usize>,
    pub status: MatchStatus,
}

impl MatchGroup {
    #[must_use]
    pub fn new(anchor: usize) -> Self {
        Self {
            members: vec![anchor],
            status: MatchStatus::Unmatched,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> usize {
        self.members[0]
    }

    /// Adds a matched member and raises the status if the criterion is stronger.
    pub fn push(&mut self, index: usize, criterion: MatchStatus) {
        self.members.push(index);
        self.status = self.status.max(criterion);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One output row: the status plus the first present value per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub status: MatchStatus,
    /// Number of unified-table records folded into this row.
    pub member_count: usize,
    /// Present values only; columns missing here are written blank.
    pub values: BTreeMap<String, String>,
}

impl MergedRecord {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

/// Final output table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedTable {
    /// Prefixed source columns in first-appearance order, without `MATCH_STATUS`.
    pub columns: Vec<String>,
    pub rows: Vec<MergedRecord>,
}

impl MergedTable {
    /// Header row as written: `MATCH_STATUS` followed by the source columns.
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(MATCH_STATUS_COLUMN)
            .chain(self.columns.iter().map(String::as_str))
            .collect()
    }

    /// Cells of one row aligned with [`MergedTable::header`]; absent values are empty.
    pub fn row_cells<'a>(&'a self, row: &'a MergedRecord) -> Vec<&'a str> {
        std::iter::once(row.status.as_str())
            .chain(
                self.columns
                    .iter()
                    .map(|column| row.get(column).unwrap_or("")),
            )
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
