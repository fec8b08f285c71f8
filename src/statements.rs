//! CREATE TABLE statement generation
//!
//! [`create_table`] turns a [`Table`] value into canonical statement text.
//! Constraints are never written inline on column definitions: every UNIQUE,
//! PRIMARY KEY, FOREIGN KEY and CHECK — whether derived from column flags or
//! declared at table level — becomes a named `CONSTRAINT` line in the
//! statement body, and those lines are sorted by their rendered text so the
//! output is stable under reordering of the input declarations.

use smallvec::SmallVec;
use tablegen_types::{Column, Table, naming};

use crate::error::{Error, Result};

/// Render the `CREATE TABLE` statement for `table`.
///
/// The statement is assembled fully in memory and returned as one unit; on
/// error no partial text is produced. Fails when the table name or column
/// list is empty, or when a column or constraint declares an incomplete
/// foreign key target.
///
/// # Examples
///
/// ```
/// use tablegen::{Column, PostgresType, Table, create_table};
///
/// let table = Table::new("session")
///     .column(Column::new("token", PostgresType::Text).not_null());
///
/// let sql = create_table(&table)?;
/// assert_eq!(sql, "CREATE TABLE session (\n\ttoken TEXT NOT NULL\n);");
/// # Ok::<(), tablegen::Error>(())
/// ```
pub fn create_table(table: &Table) -> Result<String> {
    if table.name.is_empty() {
        return Err(Error::MissingTableName);
    }
    if table.columns.is_empty() {
        return Err(Error::MissingTableColumns);
    }
    let constraints = table_constraints(table)?;

    let mut sql = String::from("CREATE ");
    if table.temporary {
        sql.push_str("TEMPORARY ");
    }
    sql.push_str("TABLE ");
    if table.if_not_exists {
        sql.push_str("IF NOT EXISTS ");
    }
    if let Some(schema) = table.schema.as_deref().filter(|s| !s.is_empty()) {
        sql.push_str(schema);
        sql.push('.');
    }
    sql.push_str(&table.name);
    sql.push_str(" (\n");

    let last = table.columns.len() - 1;
    for (i, column) in table.columns.iter().enumerate() {
        sql.push('\t');
        push_column_line(&mut sql, column);
        if i < last || !constraints.is_empty() {
            sql.push(',');
        }
        sql.push('\n');
    }

    if !constraints.is_empty() {
        sql.push('\n');
    }
    for (i, fragment) in constraints.iter().enumerate() {
        sql.push('\t');
        sql.push_str(fragment);
        if i < constraints.len() - 1 {
            sql.push(',');
        }
        sql.push('\n');
    }

    sql.push_str(");");

    crate::tablegen_trace_statement!(table.name, sql);
    Ok(sql)
}

/// One column definition line, without indentation or terminator.
fn push_column_line(sql: &mut String, column: &Column) {
    sql.push_str(&column.name);
    sql.push(' ');
    sql.push_str(&column.sql_type);
    if let Some(collate) = column.collate.as_deref().filter(|c| !c.is_empty()) {
        sql.push(' ');
        sql.push_str(collate);
    }
    if let Some(default) = column.default.as_deref().filter(|d| !d.is_empty()) {
        sql.push_str(" DEFAULT ");
        sql.push_str(default);
    }
    if column.not_null {
        sql.push_str(" NOT NULL");
    }
}

/// Derive the full, ordered set of constraint fragments for `table`.
///
/// Columns are walked first, then the explicit table-level constraints, and
/// the collected fragments are sorted by rendered text. A column flagged both
/// `unique` and `primary_key` yields neither fragment; the two flags suppress
/// each other (the same holds for table-level constraints).
fn table_constraints(table: &Table) -> Result<SmallVec<[String; 8]>> {
    let schema = table.schema.as_deref();
    let name = table.name.as_ref();
    let mut fragments: SmallVec<[String; 8]> =
        SmallVec::with_capacity(table.columns.len() + table.constraints.len());

    for column in &table.columns {
        let columns = [column.name.as_ref()];
        if column.unique && !column.primary_key {
            fragments.push(unique_fragment(schema, name, &columns));
        }
        if column.primary_key && !column.unique {
            fragments.push(primary_key_fragment(schema, name, &columns));
        }
        if column.is_reference() {
            if !column.is_valid_reference() {
                return Err(Error::invalid_reference(
                    column.schema_to.as_deref(),
                    column.table_to.as_deref(),
                    &[column.column_to.as_deref().unwrap_or_default()],
                ));
            }
            let columns_to = [column.column_to.as_deref().unwrap_or_default()];
            fragments.push(foreign_key_fragment(
                schema,
                name,
                &columns,
                column.schema_to.as_deref(),
                column.table_to.as_deref().unwrap_or_default(),
                &columns_to,
            ));
        }
        if let Some(check) = column.check.as_deref() {
            fragments.push(check_fragment(schema, name, check, &columns));
        }
    }

    for constraint in &table.constraints {
        let columns: Vec<&str> = constraint.columns.iter().map(|c| c.as_ref()).collect();
        if constraint.unique && !constraint.primary_key {
            fragments.push(unique_fragment(schema, name, &columns));
        }
        if constraint.primary_key && !constraint.unique {
            fragments.push(primary_key_fragment(schema, name, &columns));
        }
        if constraint.is_reference() {
            if !constraint.is_valid_reference() {
                return Err(Error::invalid_reference(
                    constraint.schema_to.as_deref(),
                    constraint.table_to.as_deref(),
                    &constraint.columns_to,
                ));
            }
            let columns_to: Vec<&str> = constraint.columns_to.iter().map(|c| c.as_ref()).collect();
            fragments.push(foreign_key_fragment(
                schema,
                name,
                &columns,
                constraint.schema_to.as_deref(),
                constraint.table_to.as_deref().unwrap_or_default(),
                &columns_to,
            ));
        }
        if let Some(check) = constraint.check.as_deref() {
            fragments.push(check_fragment(schema, name, check, &columns));
        }
    }

    // The rendered text doubles as the sort key: emission order is coupled to
    // the naming convention.
    fragments.sort_unstable();
    Ok(fragments)
}

fn unique_fragment(schema: Option<&str>, table: &str, columns: &[&str]) -> String {
    format!(
        r#"CONSTRAINT "{}" UNIQUE ({})"#,
        naming::unique(schema, table, columns),
        columns.join(", ")
    )
}

fn primary_key_fragment(schema: Option<&str>, table: &str, columns: &[&str]) -> String {
    format!(
        r#"CONSTRAINT "{}" PRIMARY KEY ({})"#,
        naming::primary_key(schema, table),
        columns.join(", ")
    )
}

fn foreign_key_fragment(
    schema: Option<&str>,
    table: &str,
    columns: &[&str],
    schema_to: Option<&str>,
    table_to: &str,
    columns_to: &[&str],
) -> String {
    // Unlike constraint names, the REFERENCES target never defaults its
    // schema; an unqualified table stays unqualified.
    let target = match schema_to.filter(|s| !s.is_empty()) {
        Some(schema_to) => format!("{schema_to}.{table_to}"),
        None => table_to.to_owned(),
    };

    format!(
        r#"CONSTRAINT "{}" FOREIGN KEY ({}) REFERENCES {} ({})"#,
        naming::foreign_key(schema, table, columns),
        columns.join(", "),
        target,
        columns_to.join(", ")
    )
}

fn check_fragment(schema: Option<&str>, table: &str, expression: &str, columns: &[&str]) -> String {
    format!(
        r#"CONSTRAINT "{}" CHECK ({})"#,
        naming::check(schema, table, columns),
        expression
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_fragment() {
        assert_eq!(
            unique_fragment(Some("app"), "user", &["email"]),
            r#"CONSTRAINT "app.user_email_key" UNIQUE (email)"#
        );
        assert_eq!(
            unique_fragment(None, "user", &["email", "tenant_id"]),
            r#"CONSTRAINT "public.user_email_tenant_id_key" UNIQUE (email, tenant_id)"#
        );
    }

    #[test]
    fn test_primary_key_fragment_names_table_only() {
        assert_eq!(
            primary_key_fragment(None, "user", &["id", "tenant_id"]),
            r#"CONSTRAINT "public.user_pkey" PRIMARY KEY (id, tenant_id)"#
        );
    }

    #[test]
    fn test_foreign_key_fragment_schema_qualification() {
        assert_eq!(
            foreign_key_fragment(None, "post", &["author_id"], None, "user", &["id"]),
            r#"CONSTRAINT "public.post_author_id_fkey" FOREIGN KEY (author_id) REFERENCES user (id)"#
        );
        assert_eq!(
            foreign_key_fragment(None, "post", &["author_id"], Some("auth"), "user", &["id"]),
            r#"CONSTRAINT "public.post_author_id_fkey" FOREIGN KEY (author_id) REFERENCES auth.user (id)"#
        );
    }

    #[test]
    fn test_check_fragment_expression_verbatim() {
        assert_eq!(
            check_fragment(None, "event", "start_at < end_at", &["start_at", "end_at"]),
            r#"CONSTRAINT "public.event_start_at_end_at_check" CHECK (start_at < end_at)"#
        );
    }
}
