//! PostgreSQL DDL entity types
//!
//! One value type per schema object kind: [`Table`] owns its [`Column`]s and
//! table-level [`Constraint`]s by inclusion, never by pointer. All three are
//! built wholesale by the caller (struct literals or the consuming builder
//! methods) and treated as read-only by the generator.
//!
//! Entities serialize with camelCase field names so a table definition can be
//! stored as a schema snapshot and reloaded later.

mod column;
mod constraint;
mod table;

pub use column::Column;
pub use constraint::{Constraint, ReferentialAction};
pub use table::Table;
