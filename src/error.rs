use thiserror::Error;

/// Statement generation errors.
///
/// Every variant is a caller-input defect: nothing here is transient, retried
/// or logged by the generator itself. A failed call produces no statement
/// text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The table declares no name
    #[error("missing table name")]
    MissingTableName,

    /// The table declares no columns
    #[error("missing table columns")]
    MissingTableColumns,

    /// A column or constraint declares a partial foreign key target
    #[error("invalid foreign key reference: schema '{schema}', table '{table}', columns {columns:?}")]
    InvalidReference {
        /// Referenced schema as declared (empty when unset)
        schema: String,
        /// Referenced table as declared (empty when unset)
        table: String,
        /// Referenced columns as declared
        columns: Vec<String>,
    },
}

impl Error {
    pub(crate) fn invalid_reference<S: AsRef<str>>(
        schema: Option<&str>,
        table: Option<&str>,
        columns: &[S],
    ) -> Self {
        Self::InvalidReference {
            schema: schema.unwrap_or_default().to_owned(),
            table: table.unwrap_or_default().to_owned(),
            columns: columns.iter().map(|c| c.as_ref().to_owned()).collect(),
        }
    }
}

/// Result type for statement generation.
pub type Result<T> = std::result::Result<T, Error>;
