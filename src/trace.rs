//! Tracing utilities for statement generation observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate. The
//! macro no-ops when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at the call site.

/// Emit a debug-level tracing event with the table name and statement size.
///
/// ```ignore
/// tablegen_trace_statement!(table.name, sql);
/// ```
#[macro_export]
macro_rules! tablegen_trace_statement {
    ($table:expr, $sql:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(table = %$table, bytes = $sql.len(), "tablegen.create_table");
    };
}
