//! CLI library components for contact deduplication.

pub mod logging;
pub mod pipeline;
