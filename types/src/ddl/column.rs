//! PostgreSQL column entity

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::sql_type;

/// A single column definition.
///
/// Column flags are independent of each other: one column may be unique, a
/// primary key, a foreign key and carry a check expression all at once, and
/// the generator derives a separate constraint fragment for each.
///
/// A column references another table through the `schema_to` / `table_to` /
/// `column_to` fields. Setting any of the three marks the column as a
/// reference; the reference is only complete once both `table_to` and
/// `column_to` are present (`schema_to` falls back to the search path).
/// An incomplete reference is an error surfaced at generation time, not an
/// ignored one.
///
/// # Examples
///
/// ```
/// use tablegen_types::{Column, PostgresType};
///
/// let column = Column::new("rel_id", PostgresType::Integer).references("related_table", "id");
/// assert!(column.is_reference());
/// assert!(column.is_valid_reference());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name
    pub name: Cow<'static, str>,

    /// SQL type token text, e.g. `TEXT` or `VARCHAR(255)`
    #[serde(rename = "type")]
    pub sql_type: Cow<'static, str>,

    /// Column collation
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub collate: Option<Cow<'static, str>>,

    /// `DEFAULT` expression, inserted verbatim
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<Cow<'static, str>>,

    /// `CHECK` expression, inserted verbatim
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub check: Option<Cow<'static, str>>,

    /// `NOT NULL` flag
    pub not_null: bool,

    /// Derive a single-column UNIQUE constraint
    pub unique: bool,

    /// Derive a single-column PRIMARY KEY constraint
    pub primary_key: bool,

    /// Referenced schema name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub schema_to: Option<Cow<'static, str>>,

    /// Referenced table name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub table_to: Option<Cow<'static, str>>,

    /// Referenced column name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub column_to: Option<Cow<'static, str>>,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            name: Cow::Borrowed(""),
            sql_type: Cow::Borrowed(""),
            collate: None,
            default: None,
            check: None,
            not_null: false,
            unique: false,
            primary_key: false,
            schema_to: None,
            table_to: None,
            column_to: None,
        }
    }
}

impl Column {
    /// Create a new column with the given name and SQL type.
    ///
    /// The type accepts both [`PostgresType`](crate::PostgresType) tokens and
    /// free-form strings such as `VARCHAR(255)`.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, sql_type: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            ..Self::default()
        }
    }

    /// Set the column collation.
    #[must_use]
    pub fn collate(mut self, collate: impl Into<Cow<'static, str>>) -> Self {
        self.collate = Some(collate.into());
        self
    }

    /// Set the `DEFAULT` expression.
    #[must_use]
    pub fn default_sql(mut self, default: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the `CHECK` expression.
    #[must_use]
    pub fn check(mut self, check: impl Into<Cow<'static, str>>) -> Self {
        self.check = Some(check.into());
        self
    }

    /// Mark the column `NOT NULL`.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark the column unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark the column as the primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Point the column at `table_to (column_to)`.
    #[must_use]
    pub fn references(
        mut self,
        table_to: impl Into<Cow<'static, str>>,
        column_to: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.table_to = Some(table_to.into());
        self.column_to = Some(column_to.into());
        self
    }

    /// Set the referenced schema name.
    #[must_use]
    pub fn schema_to(mut self, schema_to: impl Into<Cow<'static, str>>) -> Self {
        self.schema_to = Some(schema_to.into());
        self
    }

    /// Whether any part of a reference target is set.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.column_to.is_some() || self.table_to.is_some() || self.schema_to.is_some()
    }

    /// Whether the reference target is complete enough to render.
    #[must_use]
    pub fn is_valid_reference(&self) -> bool {
        self.column_to.is_some() && self.table_to.is_some()
    }

    /// The Rust value type backing this column, if the type token is mapped.
    ///
    /// See [`sql_type::rust_type`]; nullability is
    /// `not_null || primary_key`.
    #[must_use]
    pub fn rust_type(&self) -> Option<&'static str> {
        sql_type::rust_type(&self.sql_type, self.not_null || self.primary_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PostgresType;

    #[test]
    fn test_reference_predicates() {
        let none = Column::new("id", PostgresType::Serial);
        assert!(!none.is_reference());
        assert!(!none.is_valid_reference());

        let complete = Column::new("rel_id", PostgresType::Integer).references("related", "id");
        assert!(complete.is_reference());
        assert!(complete.is_valid_reference());

        // Schema alone marks a reference without completing it.
        let partial = Column::new("rel_id", PostgresType::Integer).schema_to("other");
        assert!(partial.is_reference());
        assert!(!partial.is_valid_reference());

        let table_only = Column {
            table_to: Some(Cow::Borrowed("related")),
            ..Column::new("rel_id", PostgresType::Integer)
        };
        assert!(table_only.is_reference());
        assert!(!table_only.is_valid_reference());
    }

    #[test]
    fn test_rust_type_tracks_nullability_flags() {
        let plain = Column::new("title", PostgresType::Text);
        assert_eq!(plain.rust_type(), Some("Option<String>"));

        let not_null = Column::new("title", PostgresType::Text).not_null();
        assert_eq!(not_null.rust_type(), Some("String"));

        // A primary key is implicitly required even without NOT NULL.
        let id = Column::new("id", PostgresType::Serial).primary_key();
        assert_eq!(id.rust_type(), Some("u32"));
    }

    #[test]
    fn test_serde_renames_sql_type_to_type() {
        let column = Column::new("title", PostgresType::Text).not_null();
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["type"], "TEXT");
        assert_eq!(json["notNull"], true);
    }
}
