//! # tablegen
//!
//! A deterministic `CREATE TABLE` statement generator for PostgreSQL.
//!
//! `tablegen` turns a declarative, in-memory table description into canonical
//! DDL text for schema and code generators that need diff-stable output:
//! generating the same [`Table`] value twice yields byte-identical SQL, and
//! derived constraints are emitted in a stable order under a canonical naming
//! scheme (`<schema>.<table>[_<column>...]_<suffix>`).
//!
//! ## Quick Start
//!
//! ```
//! use tablegen::{Column, PostgresType, Table, create_table};
//!
//! let table = Table::new("user")
//!     .schema("auth")
//!     .temporary()
//!     .column(Column::new("username", PostgresType::Text).not_null())
//!     .column(Column::new("password", PostgresType::Text))
//!     .column(Column::new("created_at", PostgresType::Timestamptz));
//!
//! let sql = create_table(&table)?;
//! assert!(sql.starts_with("CREATE TEMPORARY TABLE auth.user (\n"));
//! # Ok::<(), tablegen::Error>(())
//! ```
//!
//! Column flags (`unique`, `primary_key`, foreign key targets, `check`) and
//! table-level [`Constraint`]s all become named `CONSTRAINT` lines in the
//! statement body; see [`create_table`] for the full derivation rules.
//!
//! The generator is purely functional over immutable inputs: no I/O, no
//! shared state, and every operation is safe to call concurrently on distinct
//! `Table` values.
//!
//! ## Features
//!
//! - `tracing` - Emit a `tracing` debug event per generated statement

pub mod columns;
pub mod error;
pub mod statements;
mod trace;

pub use columns::Columns;
pub use error::{Error, Result};
pub use statements::create_table;

// Re-export the entity model so callers depend on one crate.
pub use tablegen_types as types;
pub use tablegen_types::{
    Column, Constraint, NOW, PostgresType, ReferentialAction, Table, naming, rust_type, varchar,
};
