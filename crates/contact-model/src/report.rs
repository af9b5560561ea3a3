//! Run summary shared by the CLI tables and the JSON report.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::merged::MergedRecord;
use crate::status::MatchStatus;

/// What happened to one configured source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SourceOutcome {
    Included,
    /// The mapping lacks a required identity column.
    Skipped { reason: String },
    /// The table could not be read or a configured column is missing.
    Failed { error: String },
}

impl SourceOutcome {
    #[must_use]
    pub fn is_included(&self) -> bool {
        matches!(self, Self::Included)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Included => "included",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub source_id: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: SourceOutcome,
    /// Records contributed to the unified table.
    pub records: usize,
}

/// Group and record counts per match status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total_records: usize,
    pub total_groups: usize,
    pub groups_by_status: BTreeMap<MatchStatus, usize>,
    pub records_by_status: BTreeMap<MatchStatus, usize>,
}

impl MatchSummary {
    pub fn from_rows(rows: &[MergedRecord]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            summary.total_groups += 1;
            summary.total_records += row.member_count;
            *summary.groups_by_status.entry(row.status).or_insert(0) += 1;
            *summary.records_by_status.entry(row.status).or_insert(0) += row.member_count;
        }
        summary
    }

    #[must_use]
    pub fn groups_with(&self, status: MatchStatus) -> usize {
        self.groups_by_status.get(&status).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn records_with(&self, status: MatchStatus) -> usize {
        self.records_by_status.get(&status).copied().unwrap_or(0)
    }

    /// Records removed by merging.
    #[must_use]
    pub fn duplicates_removed(&self) -> usize {
        self.total_records.saturating_sub(self.total_groups)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub sources: Vec<SourceSummary>,
    pub matches: MatchSummary,
    pub output: Option<PathBuf>,
}

impl RunReport {
    #[must_use]
    pub fn excluded_sources(&self) -> usize {
        self.sources
            .iter()
            .filter(|source| !source.outcome.is_included())
            .count()
    }
}
