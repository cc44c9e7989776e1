//! Error types

/// A row that has no sort value for the requested column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Row '{row_id}' has no sort value for column '{column}'")]
pub struct MissingSortValue {
    /// Id of the offending row.
    pub row_id: String,
    /// The column key that was requested.
    pub column: String,
}

impl MissingSortValue {
    /// Creates a new missing sort value report.
    pub fn new(row_id: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            row_id: row_id.into(),
            column: column.into(),
        }
    }
}

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The column key was empty.
    #[error("Column key must not be empty")]
    EmptyColumnKey,

    /// The column key does not name a sortable header of the table.
    #[error("Column '{column}' is not a sortable header")]
    UnknownColumn { column: String },

    /// A row lacked the sort value and the policy is to abort.
    #[error(transparent)]
    MissingSortValue(#[from] MissingSortValue),
}

impl SortError {
    /// Creates a new unknown column error.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }
}

/// Error type for loading a [`SortConfig`](crate::config::SortConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
