//! Column name list helpers for downstream query builders

use std::ops::Deref;

/// An ordered list of column names.
///
/// Duplicates are allowed and order is preserved. Every combinator returns a
/// new list and leaves the receiver untouched, so a shared base list can be
/// specialized repeatedly:
///
/// ```
/// use tablegen::Columns;
///
/// let columns = Columns::new(["id", "username", "password"]);
/// let public = columns.exclude(&["password"]);
///
/// assert_eq!(public.join(", "), "id, username");
/// assert_eq!(columns.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns(Vec<String>);

impl Columns {
    /// Create a list from any iterable of names.
    #[must_use]
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Copy without the provided names.
    #[must_use]
    pub fn exclude(&self, names: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|column| !names.contains(&column.as_str()))
                .cloned()
                .collect(),
        )
    }

    /// Copy containing only the provided names.
    #[must_use]
    pub fn keep(&self, names: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|column| names.contains(&column.as_str()))
                .cloned()
                .collect(),
        )
    }

    /// Copy with every name qualified as `prefix.name`.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self(
            self.0
                .iter()
                .map(|column| format!("{prefix}.{column}"))
                .collect(),
        )
    }

    /// Join the names with a separator.
    #[must_use]
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl Deref for Columns {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Columns {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl<S: Into<String>> FromIterator<S> for Columns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for Columns {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude() {
        let columns = Columns::new(["1", "2", "3"]);
        assert_eq!(columns.exclude(&["1", "2"]), Columns::new(["3"]));

        let columns = Columns::new(["id", "username", "password", "first_name", "last_name"]);
        assert_eq!(
            columns.exclude(&["password"]),
            Columns::new(["id", "username", "first_name", "last_name"])
        );

        let columns = Columns::new(["a", "b", "c"]);
        assert_eq!(columns.exclude(&["d", "e"]), columns);
    }

    #[test]
    fn test_keep() {
        let columns = Columns::new(["1", "2", "3"]);
        assert_eq!(columns.keep(&["1", "2"]), Columns::new(["1", "2"]));

        let columns = Columns::new(["id", "username", "password", "first_name", "last_name"]);
        assert_eq!(columns.keep(&["password"]), Columns::new(["password"]));
    }

    #[test]
    fn test_keep_without_matches_is_empty_not_ambiguous() {
        let columns = Columns::new(["a", "b", "c"]);
        let kept = columns.keep(&["d", "e"]);
        assert!(kept.is_empty());
        assert_eq!(kept, Columns::default());
    }

    #[test]
    fn test_with_prefix() {
        let columns = Columns::new(["1", "2", "3"]);
        assert_eq!(
            columns.with_prefix("longprefix"),
            Columns::new(["longprefix.1", "longprefix.2", "longprefix.3"])
        );

        let columns = Columns::new(["id", "username"]);
        assert_eq!(
            columns.with_prefix("a"),
            Columns::new(["a.id", "a.username"])
        );
    }

    #[test]
    fn test_combinators_never_mutate_receiver() {
        let columns = Columns::new(["id", "username", "password"]);
        let snapshot = columns.clone();

        let _ = columns.exclude(&["password"]);
        let _ = columns.keep(&["id"]);
        let _ = columns.with_prefix("u");
        let _ = columns.join(", ");

        assert_eq!(columns, snapshot);
    }

    #[test]
    fn test_join() {
        assert_eq!(Columns::new(["a", "b"]).join(", "), "a, b");
        assert_eq!(Columns::default().join(", "), "");
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let columns = Columns::new(["b", "a", "b"]);
        assert_eq!(columns.join(","), "b,a,b");
        assert_eq!(columns.exclude(&["a"]), Columns::new(["b", "b"]));
    }
}
