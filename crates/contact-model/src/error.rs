use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("source id must not be empty")]
    EmptySourceId,
    #[error(
        "source '{source_id}' configures a full name column together with first/last name columns"
    )]
    ConflictingNameColumns { source_id: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
