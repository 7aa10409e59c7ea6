//! Predicate compilation and query assembly.
//!
//! [`build_condition`] turns one parsed filter into a placeholder-bearing
//! fragment plus bound parameters; [`compile_filters`] assembles a whole
//! expression; [`compile_list_query`] produces the three independent predicate
//! groups (server-controlled filter, user filter, search) and the order-by
//! clause that the relational executor combines with `AND`. User-supplied
//! values are never interpolated into predicate text; they always travel
//! through the parameter list.

use super::parser::{FilterItem, FilterKind, FilterValue, ParsedFilters, QueryFilter, parse_filters};
use super::search::build_search_condition;
use super::sort::parse_sorting;
use crate::errors::Diagnostic;
use crate::models::ListParams;

/// A placeholder-bearing predicate fragment and its ordered bound parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predicate {
    /// Fragment text with `?` positional placeholders.
    pub sql: String,
    /// Values to bind, in placeholder order.
    pub params: Vec<FilterValue>,
}

impl Predicate {
    /// True when no condition was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// The compiled output of one listing request.
///
/// The executor applies the three predicate groups independently, combined
/// with logical `AND`, and performs its own value binding and escaping.
#[derive(Debug, Default)]
pub struct ListQuery {
    /// Server-controlled filter predicate.
    pub custom: Predicate,
    /// User filter predicate.
    pub filter: Predicate,
    /// Search predicate.
    pub search: Predicate,
    /// `column direction` order-by clause.
    pub order_by: String,
    /// Non-fatal degradations recorded across all groups.
    pub diagnostics: Vec<Diagnostic>,
}

/// Append one filter's predicate fragment and bound parameters.
///
/// Per-operator behavior:
/// - `IS` / `IS NOT` against an unset value emit `(field IS[ NOT] NULL)` and
///   bind nothing.
/// - `LIKE` / `NOT LIKE` bind the value as text wrapped in wildcard markers,
///   with internal spaces turned into wildcards.
/// - `IN` / `NOT IN` bind the whole list as one parameter for the executor to
///   expand; text entries are lower-cased, other scalars rendered as text.
/// - `BETWEEN` binds two parameters from a 2-element list. A list of any
///   other length still emits the placeholders but binds nothing, recording
///   an [`Diagnostic::ArityMismatch`].
/// - Any other operator binds the value in its typed form.
///
/// A value that does not fit its operator leaves the parameter out and
/// records a [`Diagnostic::TypeMismatch`]; the fragment is still appended.
pub fn build_condition(
    filter: &QueryFilter,
    fragments: &mut Vec<String>,
    params: &mut Vec<FilterValue>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let item = &filter.item;
    let field = item.field.as_str();
    let operator = item.operator.as_str();

    match operator {
        "IS" | "IS NOT" if item.value.is_none() => {
            fragments.push(format!("({field} {operator} NULL)"));
        }
        "LIKE" | "NOT LIKE" => {
            fragments.push(format!("{field} {operator} ?"));
            match like_pattern(item.value.as_ref()) {
                Some(pattern) => params.push(FilterValue::Text(pattern)),
                None => diagnostics.push(type_mismatch(item)),
            }
        }
        "IN" | "NOT IN" => {
            fragments.push(format!("{field} {operator} (?)"));
            match list_entries(item.value.as_ref(), item, diagnostics) {
                Some(entries) => params.push(FilterValue::List(entries)),
                None => diagnostics.push(type_mismatch(item)),
            }
        }
        "BETWEEN" => {
            fragments.push(format!("{field} BETWEEN ? AND ?"));
            match list_entries(item.value.as_ref(), item, diagnostics) {
                Some(entries) => {
                    if entries.len() == 2 {
                        params.extend(entries);
                    } else {
                        diagnostics.push(Diagnostic::ArityMismatch {
                            field: item.field.clone(),
                            operator: item.operator.clone(),
                            expected: 2,
                            got: entries.len(),
                        });
                    }
                }
                None => diagnostics.push(type_mismatch(item)),
            }
        }
        _ => {
            fragments.push(format!("{field} {operator} ?"));
            match &item.value {
                Some(value) => params.push(value.clone()),
                None => diagnostics.push(type_mismatch(item)),
            }
        }
    }
}

/// Render a scalar as a wildcarded LIKE pattern. Booleans and lists carry no
/// pattern text.
fn like_pattern(value: Option<&FilterValue>) -> Option<String> {
    let text = match value? {
        FilterValue::Text(text) => text.clone(),
        FilterValue::SmallInt(int) => int.to_string(),
        FilterValue::Int(int) => int.to_string(),
        FilterValue::Float(float) => float.to_string(),
        FilterValue::Bool(_) | FilterValue::List(_) => return None,
    };
    Some(format!("%{text}%").replace(' ', "%"))
}

/// Format the entries of an `IN`/`BETWEEN` list: text entries lower-cased,
/// other scalars rendered as text. Returns `None` when the value is not a
/// list; nested lists are skipped with a diagnostic.
fn list_entries(
    value: Option<&FilterValue>,
    item: &FilterItem,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Vec<FilterValue>> {
    let Some(FilterValue::List(entries)) = value else {
        return None;
    };
    let mut formatted = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            FilterValue::Text(text) => formatted.push(FilterValue::Text(text.to_lowercase())),
            FilterValue::Bool(flag) => formatted.push(FilterValue::Text(flag.to_string())),
            FilterValue::SmallInt(int) => formatted.push(FilterValue::Text(int.to_string())),
            FilterValue::Int(int) => formatted.push(FilterValue::Text(int.to_string())),
            FilterValue::Float(float) => formatted.push(FilterValue::Text(float.to_string())),
            FilterValue::List(_) => diagnostics.push(type_mismatch(item)),
        }
    }
    Some(formatted)
}

fn type_mismatch(item: &FilterItem) -> Diagnostic {
    Diagnostic::TypeMismatch {
        field: item.field.clone(),
        operator: item.operator.clone(),
    }
}

/// Compile one filter expression into a predicate.
///
/// A lone flat triple compiles directly. A list of triples compiles in
/// order, inserting an implicit `OR` between two consecutive non-connective
/// entries that gave no explicit connective. Identifier quotes only serve to
/// disambiguate field tokens during assembly and are stripped from the
/// finished text.
#[must_use]
pub fn compile_filters(expression: &str) -> (Predicate, Vec<Diagnostic>) {
    if expression.is_empty() {
        return (Predicate::default(), Vec::new());
    }
    let ParsedFilters {
        filters,
        mut diagnostics,
    } = parse_filters(expression);

    let mut fragments = Vec::new();
    let mut params = Vec::new();
    if let [only] = filters.as_slice()
        && only.kind == FilterKind::Single
    {
        build_condition(only, &mut fragments, &mut params, &mut diagnostics);
    } else {
        for (index, filter) in filters.iter().enumerate() {
            if filter.kind == FilterKind::Operator {
                fragments.push(filter.item.operator.clone());
            } else {
                if index > 0 && filters[index - 1].kind != FilterKind::Operator {
                    fragments.push("OR".to_string());
                }
                build_condition(filter, &mut fragments, &mut params, &mut diagnostics);
            }
        }
    }

    let sql = fragments.join(" ").replace('"', "");
    (Predicate { sql, params }, diagnostics)
}

/// Compile a listing request into its predicate groups and order-by clause.
///
/// The server-controlled `custom_filter` expression and the user expression
/// in `params.filter` compile through the same path but stay separate, so the
/// executor can apply them as independent `AND`-combined groups alongside the
/// search predicate.
#[must_use]
pub fn compile_list_query(custom_filter: Option<&str>, params: &ListParams) -> ListQuery {
    let mut query = ListQuery::default();

    let (custom, diagnostics) = compile_filters(custom_filter.unwrap_or_default());
    query.custom = custom;
    query.diagnostics.extend(diagnostics);

    let (filter, diagnostics) = compile_filters(params.filter.as_deref().unwrap_or_default());
    query.filter = filter;
    query.diagnostics.extend(diagnostics);

    let (search, diagnostics) = build_search_condition(
        params.search_columns.as_deref().unwrap_or_default(),
        params.search.as_deref().unwrap_or_default(),
    );
    query.search = search;
    query.diagnostics.extend(diagnostics);

    query.order_by = parse_sorting(params.sort.as_deref()).to_order_by();
    query
}
