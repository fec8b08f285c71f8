//! Canonical constraint naming
//!
//! Generated constraints are named `<schema>.<table>[_<column>...]_<suffix>`,
//! matching the identifiers PostgreSQL itself assigns to implicit constraints
//! (with the schema qualifier folded into the name). The four constructors
//! here are the only naming entry points the generator uses, so swapping the
//! convention means swapping this module; the generator relies on nothing
//! beyond the names being deterministic and totally ordered.
//!
//! Primary key names carry no column component (`<table>_pkey`); all other
//! kinds join the participating column names with `_` in the order given.

/// Schema used in constraint names when the table declares none.
pub const DEFAULT_SCHEMA: &str = "public";

/// The four derivable constraint kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    PrimaryKey,
    ForeignKey,
    Unique,
    Check,
}

impl ConstraintKind {
    /// Name suffix for this kind.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::PrimaryKey => "pkey",
            Self::ForeignKey => "fkey",
            Self::Unique => "key",
            Self::Check => "check",
        }
    }
}

/// Name for a UNIQUE constraint over `columns`.
#[must_use]
pub fn unique<S: AsRef<str>>(schema: Option<&str>, table: &str, columns: &[S]) -> String {
    compose(schema, table, columns, ConstraintKind::Unique)
}

/// Name for the PRIMARY KEY constraint of `table`.
#[must_use]
pub fn primary_key(schema: Option<&str>, table: &str) -> String {
    compose::<&str>(schema, table, &[], ConstraintKind::PrimaryKey)
}

/// Name for a FOREIGN KEY constraint over the source `columns`.
#[must_use]
pub fn foreign_key<S: AsRef<str>>(schema: Option<&str>, table: &str, columns: &[S]) -> String {
    compose(schema, table, columns, ConstraintKind::ForeignKey)
}

/// Name for a CHECK constraint over `columns`.
#[must_use]
pub fn check<S: AsRef<str>>(schema: Option<&str>, table: &str, columns: &[S]) -> String {
    compose(schema, table, columns, ConstraintKind::Check)
}

fn compose<S: AsRef<str>>(
    schema: Option<&str>,
    table: &str,
    columns: &[S],
    kind: ConstraintKind,
) -> String {
    let schema = schema.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SCHEMA);

    let mut name = String::with_capacity(schema.len() + table.len() + 16);
    name.push_str(schema);
    name.push('.');
    name.push_str(table);
    for column in columns {
        name.push('_');
        name.push_str(column.as_ref());
    }
    name.push('_');
    name.push_str(kind.suffix());
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_single_and_composite() {
        assert_eq!(unique(Some("app"), "user", &["email"]), "app.user_email_key");
        assert_eq!(
            unique(None, "user", &["email", "tenant_id"]),
            "public.user_email_tenant_id_key"
        );
    }

    #[test]
    fn test_primary_key_has_no_column_component() {
        assert_eq!(primary_key(Some("app"), "user"), "app.user_pkey");
        assert_eq!(primary_key(None, "user"), "public.user_pkey");
    }

    #[test]
    fn test_foreign_key_and_check() {
        assert_eq!(
            foreign_key(None, "post", &["author_id"]),
            "public.post_author_id_fkey"
        );
        assert_eq!(
            check(None, "event", &["start_at", "end_at"]),
            "public.event_start_at_end_at_check"
        );
    }

    #[test]
    fn test_empty_schema_falls_back_to_public() {
        assert_eq!(unique(Some(""), "user", &["email"]), "public.user_email_key");
    }

    #[test]
    fn test_names_are_deterministic() {
        let a = foreign_key(Some("app"), "post", &["author_id", "blog_id"]);
        let b = foreign_key(Some("app"), "post", &["author_id", "blog_id"]);
        assert_eq!(a, b);
    }
}
