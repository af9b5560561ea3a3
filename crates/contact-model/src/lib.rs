//! Data model for contact deduplication.
//!
//! Types flow one way through the workspace: a [`SourceMapping`] describes
//! how one input table maps onto the identity fields, the normalizer turns
//! rows into [`Record`]s, and the grouper partitions those records into
//! [`MatchGroup`]s that are flattened into a [`MergedTable`].

pub mod error;
pub mod mapping;
pub mod merged;
pub mod record;
pub mod report;
pub mod status;

pub use error::{ModelError, Result};
pub use mapping::{NameColumns, SourceMapping};
pub use merged::{MATCH_STATUS_COLUMN, MatchGroup, MergedRecord, MergedTable};
pub use record::{IdentityFields, Record};
pub use report::{MatchSummary, RunReport, SourceOutcome, SourceSummary};
pub use status::MatchStatus;
