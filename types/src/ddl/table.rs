//! PostgreSQL table entity

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{Column, Constraint};

/// A single table definition.
///
/// A `Table` must carry a non-empty name and at least one column before it can
/// be rendered; both are validated by the generator, not at construction time.
/// `collate` and `tablespace` are stored but not rendered.
///
/// # Examples
///
/// ```
/// use tablegen_types::{Column, PostgresType, Table};
///
/// let table = Table::new("user")
///     .schema("auth")
///     .temporary()
///     .column(Column::new("username", PostgresType::Text).not_null())
///     .column(Column::new("created_at", PostgresType::Timestamptz));
///
/// assert_eq!(table.columns.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table name
    pub name: Cow<'static, str>,

    /// Schema name; rendered as a `schema.` prefix when present
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub schema: Option<Cow<'static, str>>,

    /// Table collation (stored, not rendered)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub collate: Option<Cow<'static, str>>,

    /// Tablespace name (stored, not rendered)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tablespace: Option<Cow<'static, str>>,

    /// Emit `IF NOT EXISTS`
    pub if_not_exists: bool,

    /// Emit `TEMPORARY`
    pub temporary: bool,

    /// Columns, in declaration order
    pub columns: Vec<Column>,

    /// Table-level constraints, in declaration order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub constraints: Vec<Constraint>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            name: Cow::Borrowed(""),
            schema: None,
            collate: None,
            tablespace: None,
            if_not_exists: false,
            temporary: false,
            columns: Vec::new(),
            constraints: Vec::new(),
        }
    }
}

impl Table {
    /// Create a new table definition with the given name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the schema name.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<Cow<'static, str>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Set the table collation.
    #[must_use]
    pub fn collate(mut self, collate: impl Into<Cow<'static, str>>) -> Self {
        self.collate = Some(collate.into());
        self
    }

    /// Set the tablespace.
    #[must_use]
    pub fn tablespace(mut self, tablespace: impl Into<Cow<'static, str>>) -> Self {
        self.tablespace = Some(tablespace.into());
        self
    }

    /// Emit `IF NOT EXISTS` in the statement header.
    #[must_use]
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Emit `TEMPORARY` in the statement header.
    #[must_use]
    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    /// Append a column.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Append a table-level constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PostgresType;

    #[test]
    fn test_builder_accumulates_columns_in_order() {
        let table = Table::new("accounts")
            .column(Column::new("id", PostgresType::Serial))
            .column(Column::new("owner", PostgresType::Text));

        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_ref()).collect();
        assert_eq!(names, ["id", "owner"]);
    }

    #[test]
    fn test_flags_default_off() {
        let table = Table::new("accounts");
        assert!(!table.temporary);
        assert!(!table.if_not_exists);
        assert!(table.schema.is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let table = Table::new("event")
            .schema("app")
            .if_not_exists()
            .column(Column::new("id", PostgresType::BigSerial).primary_key());

        let json = serde_json::to_string(&table).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_serde_omits_unset_optionals() {
        let json = serde_json::to_value(Table::new("event")).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("schema"));
        assert!(!object.contains_key("collate"));
        assert!(!object.contains_key("constraints"));
    }
}
