//! PostgreSQL column type tokens and the host-type mapper
//!
//! The generator treats type text as opaque, so [`PostgresType`] exists for
//! callers that want a closed vocabulary instead of raw strings. The mapper
//! at the bottom is a separate concern entirely: it serves data-access-object
//! generators that need to know which Rust type backs a column, and has no
//! bearing on the rendered DDL.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The `NOW()` default-expression token.
pub const NOW: &str = "NOW()";

/// Supported PostgreSQL column types.
///
/// See: <https://www.postgresql.org/docs/current/datatype.html>
///
/// # Examples
///
/// ```
/// use tablegen_types::PostgresType;
///
/// assert_eq!(PostgresType::Timestamptz.as_sql(), "TIMESTAMPTZ");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostgresType {
    /// Auto-incrementing 32-bit integer
    Serial,
    /// Auto-incrementing 64-bit integer
    #[serde(rename = "BIGSERIAL")]
    BigSerial,
    /// True/false
    Bool,
    /// Exact numeric with selectable precision
    Decimal,
    /// 32-bit signed integer
    Integer,
    /// 16-bit signed integer
    #[serde(rename = "SMALLINT")]
    SmallInt,
    /// 64-bit signed integer
    #[serde(rename = "BIGINT")]
    BigInt,
    /// Variable-length character string
    #[default]
    Text,
    /// Variable-length character string with limit
    Varchar,
    /// Date and time without time zone
    Timestamp,
    /// Date and time with time zone
    Timestamptz,
    /// Currency amount
    Money,
}

impl PostgresType {
    /// The SQL token text.
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Serial => "SERIAL",
            Self::BigSerial => "BIGSERIAL",
            Self::Bool => "BOOL",
            Self::Decimal => "DECIMAL",
            Self::Integer => "INTEGER",
            Self::SmallInt => "SMALLINT",
            Self::BigInt => "BIGINT",
            Self::Text => "TEXT",
            Self::Varchar => "VARCHAR",
            Self::Timestamp => "TIMESTAMP",
            Self::Timestamptz => "TIMESTAMPTZ",
            Self::Money => "MONEY",
        }
    }
}

impl fmt::Display for PostgresType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl From<PostgresType> for Cow<'static, str> {
    fn from(sql_type: PostgresType) -> Self {
        Cow::Borrowed(sql_type.as_sql())
    }
}

/// A length-limited `VARCHAR(n)` type token.
#[must_use]
pub fn varchar(len: u32) -> String {
    format!("VARCHAR({len})")
}

/// Map a column's SQL type to the Rust value type backing it, if any.
///
/// `required` is the column's `not_null || primary_key`; columns that may be
/// NULL map to `Option<T>`. Returns `None` for tokens with no host mapping —
/// notably SERIAL and BIGSERIAL when the column is nullable, since a nullable
/// auto-increment has no sensible host representation. Any `VARCHAR`-prefixed
/// token maps, so length-limited declarations like `VARCHAR(255)` work.
///
/// SMALLINT and INTEGER intentionally never wrap in `Option`.
#[must_use]
pub fn rust_type(sql_type: &str, required: bool) -> Option<&'static str> {
    let mapped = match sql_type {
        "TEXT" => {
            if required {
                "String"
            } else {
                "Option<String>"
            }
        }
        "BOOL" => {
            if required {
                "bool"
            } else {
                "Option<bool>"
            }
        }
        "SMALLINT" => "i16",
        "INTEGER" => "i32",
        "BIGINT" => {
            if required {
                "i64"
            } else {
                "Option<i64>"
            }
        }
        "SERIAL" if required => "u32",
        "BIGSERIAL" if required => "u64",
        "TIMESTAMP" => {
            if required {
                "chrono::NaiveDateTime"
            } else {
                "Option<chrono::NaiveDateTime>"
            }
        }
        "TIMESTAMPTZ" => {
            if required {
                "chrono::DateTime<chrono::Utc>"
            } else {
                "Option<chrono::DateTime<chrono::Utc>>"
            }
        }
        s if s.starts_with(PostgresType::Varchar.as_sql()) => "String",
        _ => return None,
    };
    Some(mapped)
}
