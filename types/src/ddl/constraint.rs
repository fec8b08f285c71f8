//! PostgreSQL table-level constraint entity

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::naming;

/// Foreign key referential action.
///
/// Carried on [`Constraint`] for completeness but not yet rendered into the
/// statement text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialAction {
    /// No action (default)
    #[default]
    NoAction,
    /// Restrict deletion
    Restrict,
    /// Cascade changes
    Cascade,
    /// Set to NULL
    SetNull,
    /// Set to default value
    SetDefault,
}

impl ReferentialAction {
    /// Get the SQL representation.
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }

    /// Parse from SQL text.
    pub fn from_sql(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NO ACTION" => Some(Self::NoAction),
            "RESTRICT" => Some(Self::Restrict),
            "CASCADE" => Some(Self::Cascade),
            "SET NULL" => Some(Self::SetNull),
            "SET DEFAULT" => Some(Self::SetDefault),
            _ => None,
        }
    }
}

/// A table-level, possibly multi-column constraint.
///
/// Used for composite uniqueness, composite primary keys, composite foreign
/// keys and named check constraints. The same derivation rules apply as for
/// single columns, with `columns` in place of one column name.
///
/// `name` is carried for callers that track constraints by identifier (and is
/// filled in by [`Constraint::check`]), but rendering always recomputes the
/// canonical name from the naming convention. `default`, `on_delete`,
/// `on_update`, `not_null` and `null` are stored but not rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    /// Constraint name override (not consulted by rendering)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<Cow<'static, str>>,

    /// `CHECK` expression, inserted verbatim
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub check: Option<Cow<'static, str>>,

    /// Default expression (stored, not rendered)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<Cow<'static, str>>,

    /// `ON DELETE` action (stored, not rendered)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub on_delete: Option<ReferentialAction>,

    /// `ON UPDATE` action (stored, not rendered)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub on_update: Option<ReferentialAction>,

    /// NOT NULL flag (stored, not rendered)
    pub not_null: bool,

    /// NULL flag (stored, not rendered)
    pub null: bool,

    /// Derive a UNIQUE constraint over `columns`
    pub unique: bool,

    /// Derive a PRIMARY KEY constraint over `columns`
    pub primary_key: bool,

    /// Participating column names, in order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub columns: Vec<Cow<'static, str>>,

    /// Referenced schema name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub schema_to: Option<Cow<'static, str>>,

    /// Referenced table name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub table_to: Option<Cow<'static, str>>,

    /// Referenced column names, in order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub columns_to: Vec<Cow<'static, str>>,
}

impl Default for Constraint {
    fn default() -> Self {
        Self {
            name: None,
            check: None,
            default: None,
            on_delete: None,
            on_update: None,
            not_null: false,
            null: false,
            unique: false,
            primary_key: false,
            columns: Vec::new(),
            schema_to: None,
            table_to: None,
            columns_to: Vec::new(),
        }
    }
}

impl Constraint {
    /// Create a UNIQUE constraint over the given columns.
    #[must_use]
    pub fn unique<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        Self {
            unique: true,
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a PRIMARY KEY constraint over the given columns.
    #[must_use]
    pub fn primary_key<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        Self {
            primary_key: true,
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a FOREIGN KEY constraint from `columns` to `table_to (columns_to)`.
    #[must_use]
    pub fn foreign_key<I, J>(columns: I, table_to: impl Into<Cow<'static, str>>, columns_to: J) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
        J: IntoIterator,
        J::Item: Into<Cow<'static, str>>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            table_to: Some(table_to.into()),
            columns_to: columns_to.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a pre-named CHECK constraint over the given columns.
    ///
    /// The canonical name is computed immediately from the naming convention:
    ///
    /// ```
    /// use tablegen_types::Constraint;
    ///
    /// let check = Constraint::check(
    ///     None,
    ///     "event",
    ///     "start_at < end_at",
    ///     ["start_at", "end_at"],
    /// );
    /// assert_eq!(check.name.as_deref(), Some("public.event_start_at_end_at_check"));
    /// ```
    #[must_use]
    pub fn check<I>(
        schema: Option<&str>,
        table: &str,
        expression: impl Into<Cow<'static, str>>,
        columns: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        let columns: Vec<Cow<'static, str>> = columns.into_iter().map(Into::into).collect();
        Self {
            name: Some(Cow::Owned(naming::check(schema, table, &columns))),
            check: Some(expression.into()),
            columns,
            ..Self::default()
        }
    }

    /// Set the referenced schema name.
    #[must_use]
    pub fn schema_to(mut self, schema_to: impl Into<Cow<'static, str>>) -> Self {
        self.schema_to = Some(schema_to.into());
        self
    }

    /// Set the `ON DELETE` action.
    #[must_use]
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    /// Set the `ON UPDATE` action.
    #[must_use]
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }

    /// Whether any part of a reference target is set.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        !self.columns_to.is_empty() || self.table_to.is_some() || self.schema_to.is_some()
    }

    /// Whether the reference target is complete enough to render.
    #[must_use]
    pub fn is_valid_reference(&self) -> bool {
        !self.columns_to.is_empty() && self.table_to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_computes_canonical_name() {
        let check = Constraint::check(Some("app"), "event", "start_at < end_at", ["start_at"]);
        assert_eq!(check.name.as_deref(), Some("app.event_start_at_check"));
        assert_eq!(check.check.as_deref(), Some("start_at < end_at"));
    }

    #[test]
    fn test_reference_predicates() {
        let fk = Constraint::foreign_key(["a", "b"], "other", ["x", "y"]);
        assert!(fk.is_reference());
        assert!(fk.is_valid_reference());

        // A referenced table without referenced columns is an incomplete target.
        let partial = Constraint {
            table_to: Some(Cow::Borrowed("other")),
            ..Constraint::default()
        };
        assert!(partial.is_reference());
        assert!(!partial.is_valid_reference());

        let unique = Constraint::unique(["a"]);
        assert!(!unique.is_reference());
    }

    #[test]
    fn test_referential_action_sql() {
        assert_eq!(ReferentialAction::Cascade.as_sql(), "CASCADE");
        assert_eq!(ReferentialAction::SetNull.as_sql(), "SET NULL");
        assert_eq!(
            ReferentialAction::from_sql("set default"),
            Some(ReferentialAction::SetDefault)
        );
        assert_eq!(ReferentialAction::from_sql("bogus"), None);
    }
}
