//! Shared entity model and dialect vocabulary for `tablegen`
//!
//! This crate provides the value types consumed by the statement generator:
//!
//! - [`Table`], [`Column`], [`Constraint`] — DDL entities in the [`ddl`] module
//! - [`naming`] — the canonical constraint-naming convention
//! - [`PostgresType`] — the closed set of supported column type tokens, plus
//!   the host-type mapper used by data-access-object generators
//!
//! Entities are plain immutable values with `Cow<'static, str>` fields: they
//! can be built from string literals without allocating, or from owned strings
//! at runtime (e.g. when deserialized from a schema snapshot). Nothing in this
//! crate performs I/O and every function is deterministic.

pub mod ddl;
pub mod naming;
pub mod sql_type;

pub use ddl::{Column, Constraint, ReferentialAction, Table};
pub use sql_type::{NOW, PostgresType, rust_type, varchar};
