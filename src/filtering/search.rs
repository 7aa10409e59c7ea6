//! Free-text search compilation over the searchable-column list.

use serde_json::Value;

use super::conditions::Predicate;
use super::parser::FilterValue;
use crate::errors::Diagnostic;

/// Build the OR-joined `col LIKE ?` chain for a free-text search term.
///
/// `columns` is JSON text listing the searchable column names. Each column
/// contributes one fragment whose bound parameter is the term wrapped in
/// wildcard markers. An empty term or column list produces an empty
/// predicate; column entries that are not text are skipped.
#[must_use]
pub fn build_search_condition(columns: &str, term: &str) -> (Predicate, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    if columns.is_empty() || term.is_empty() {
        return (Predicate::default(), diagnostics);
    }
    let decoded: Value = match serde_json::from_str(columns) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "invalid JSON in searchable-column list");
            diagnostics.push(Diagnostic::ParseError {
                context: "searchable-column list",
                message: err.to_string(),
            });
            return (Predicate::default(), diagnostics);
        }
    };
    let Value::Array(entries) = decoded else {
        return (Predicate::default(), diagnostics);
    };

    let mut fragments = Vec::new();
    let mut params = Vec::new();
    for (position, entry) in entries.iter().enumerate() {
        let Some(column) = entry.as_str() else {
            diagnostics.push(Diagnostic::IgnoredElement { position });
            continue;
        };
        fragments.push(format!("{column} LIKE ?"));
        params.push(FilterValue::Text(format!("%{term}%")));
    }

    (
        Predicate {
            sql: fragments.join(" OR "),
            params,
        },
        diagnostics,
    )
}
