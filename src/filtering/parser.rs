//! Filter-expression parsing.
//!
//! The filter mini-language arrives as JSON text: either one flat
//! `[field, operator?, value]` triple, or a list of nested triples with bare
//! `["AND"]` / `["OR"]` connective entries between them. Parsing is tolerant:
//! malformed input degrades to an empty result with the reason recorded, never
//! a failure that aborts the request.

use serde::Serialize;
use serde_json::Value;

use super::field::normalize_field_name;
use crate::errors::Diagnostic;

/// A typed filter value decoded from the expression JSON.
///
/// The variant determines the formatting rules each operator applies
/// downstream. JSON numbers classify to `Int` or `Float`; `SmallInt` exists
/// for programmatic construction of 8-bit values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A text value.
    Text(String),
    /// A boolean value.
    Bool(bool),
    /// An 8-bit integer value.
    SmallInt(i8),
    /// A 64-bit integer value.
    Int(i64),
    /// A 64-bit float value.
    Float(f64),
    /// An ordered list of values, used by `IN` and `BETWEEN`.
    List(Vec<FilterValue>),
}

impl FilterValue {
    /// Classify a decoded JSON value.
    ///
    /// Returns `None` for shapes with no tag (null, objects); those stay
    /// unset on the filter item and degrade at compile time.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Bool(flag) => Some(Self::Bool(*flag)),
            Value::Number(number) => number
                .as_i64()
                .map_or_else(|| number.as_f64().map(Self::Float), |int| Some(Self::Int(int))),
            Value::Array(items) => Some(Self::List(
                items.iter().filter_map(Self::from_json).collect(),
            )),
            Value::Null | Value::Object(_) => None,
        }
    }
}

/// One parsed `field / operator / value` filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterItem {
    /// Normalized column reference, wrapped in identifier quotes until the
    /// final predicate cleanup strips them.
    pub field: String,
    /// Canonical uppercase operator token.
    pub operator: String,
    /// Typed value; unset when the expression carried null or an
    /// unclassifiable shape.
    pub value: Option<FilterValue>,
}

/// How a parsed entry participates in predicate assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// The whole expression was one flat triple.
    Single,
    /// One triple inside a nested list of triples.
    Multiple,
    /// A bare boolean-connective token occupying its own slot.
    Operator,
}

/// A filter entry together with its assembly role.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    /// The parsed filter content.
    pub item: FilterItem,
    /// The entry's role during assembly.
    pub kind: FilterKind,
}

/// Parse output: the filters plus any non-fatal degradations.
#[derive(Debug, Default)]
pub struct ParsedFilters {
    /// Parsed entries in expression order.
    pub filters: Vec<QueryFilter>,
    /// Degradations recorded while parsing.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a filter expression into its typed entries.
///
/// Malformed JSON is non-fatal: a warning is logged, a
/// [`Diagnostic::ParseError`] is recorded, and the result is empty so the
/// caller proceeds as if no filter were supplied. A top-level value that is
/// not a list parses to no filters.
///
/// The expression's mode is fixed before parsing by the shape of the first
/// top-level element: a nested list selects multiple-triple mode, anything
/// else means the top level itself is one flat triple. Elements that do not
/// fit the detected mode are skipped with an [`Diagnostic::IgnoredElement`].
#[must_use]
pub fn parse_filters(expression: &str) -> ParsedFilters {
    let mut parsed = ParsedFilters::default();
    let decoded: Value = match serde_json::from_str(expression) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "invalid JSON in filter expression");
            parsed.diagnostics.push(Diagnostic::ParseError {
                context: "filter expression",
                message: err.to_string(),
            });
            return parsed;
        }
    };
    let Value::Array(elements) = decoded else {
        return parsed;
    };
    let Some(first) = elements.first() else {
        return parsed;
    };

    if first.is_array() {
        parse_multiple(&elements, &mut parsed);
    } else {
        parse_single(&elements, &mut parsed);
    }
    parsed
}

/// Parse the top-level list as one flat triple. Positions past the value slot
/// have no meaning and are skipped.
fn parse_single(elements: &[Value], parsed: &mut ParsedFilters) {
    for position in 3..elements.len() {
        parsed.diagnostics.push(Diagnostic::IgnoredElement { position });
    }
    let triple = &elements[..elements.len().min(3)];
    if let Some(item) = parse_triple(triple, 0, parsed) {
        parsed.filters.push(QueryFilter {
            item,
            kind: FilterKind::Single,
        });
    }
}

/// Parse each top-level element as a nested triple or a bare connective.
fn parse_multiple(elements: &[Value], parsed: &mut ParsedFilters) {
    for (position, element) in elements.iter().enumerate() {
        let Value::Array(entry) = element else {
            // A scalar between nested triples has no slot in this mode.
            parsed.diagnostics.push(Diagnostic::IgnoredElement { position });
            continue;
        };
        match entry.as_slice() {
            [] => parsed.diagnostics.push(Diagnostic::IgnoredElement { position }),
            [token] => match token.as_str() {
                Some(connective) => parsed.filters.push(QueryFilter {
                    item: FilterItem {
                        field: String::new(),
                        operator: connective.to_uppercase(),
                        value: None,
                    },
                    kind: FilterKind::Operator,
                }),
                None => parsed.diagnostics.push(Diagnostic::IgnoredElement { position }),
            },
            _ => {
                let triple = &entry[..entry.len().min(3)];
                if let Some(item) = parse_triple(triple, position, parsed) {
                    parsed.filters.push(QueryFilter {
                        item,
                        kind: FilterKind::Multiple,
                    });
                }
            }
        }
    }
}

/// Parse one `[field, operator?, value]` triple. A 2-element triple defaults
/// the operator to `=`. Returns `None`, recording the skip, when the field or
/// operator slot is not text.
fn parse_triple(elements: &[Value], position: usize, parsed: &mut ParsedFilters) -> Option<FilterItem> {
    let Some(field) = elements.first().and_then(Value::as_str) else {
        parsed.diagnostics.push(Diagnostic::IgnoredElement { position });
        return None;
    };
    let (operator, value) = match elements {
        [_, value] => ("=".to_string(), FilterValue::from_json(value)),
        [_, operator, value] => {
            let Some(operator) = operator.as_str() else {
                parsed.diagnostics.push(Diagnostic::IgnoredElement { position });
                return None;
            };
            (operator.to_string(), FilterValue::from_json(value))
        }
        _ => {
            parsed.diagnostics.push(Diagnostic::IgnoredElement { position });
            return None;
        }
    };
    Some(FilterItem {
        field: format!("\"{}\"", normalize_field_name(field)),
        operator: operator.to_uppercase(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_element_triple_defaults_to_equality() {
        let parsed = parse_filters(r#"["age", 30]"#);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.filters.len(), 1);
        let filter = &parsed.filters[0];
        assert_eq!(filter.kind, FilterKind::Single);
        assert_eq!(filter.item.field, "\"age\"");
        assert_eq!(filter.item.operator, "=");
        assert_eq!(filter.item.value, Some(FilterValue::Int(30)));
    }

    #[test]
    fn test_three_element_triple_carries_explicit_operator() {
        let parsed = parse_filters(r#"["name", "like", "bob"]"#);
        let filter = &parsed.filters[0];
        assert_eq!(filter.item.operator, "LIKE");
        assert_eq!(filter.item.value, Some(FilterValue::Text("bob".to_string())));
    }

    #[test]
    fn test_nested_triples_with_connective() {
        let parsed = parse_filters(r#"[["age", ">", 18], ["AND"], ["status", "=", "active"]]"#);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.filters.len(), 3);
        assert_eq!(parsed.filters[0].kind, FilterKind::Multiple);
        assert_eq!(parsed.filters[1].kind, FilterKind::Operator);
        assert_eq!(parsed.filters[1].item.operator, "AND");
        assert_eq!(parsed.filters[2].kind, FilterKind::Multiple);
        assert_eq!(
            parsed.filters[2].item.value,
            Some(FilterValue::Text("active".to_string()))
        );
    }

    #[test]
    fn test_connective_token_upper_cased() {
        let parsed = parse_filters(r#"[["a", 1], ["or"], ["b", 2]]"#);
        assert_eq!(parsed.filters[1].item.operator, "OR");
    }

    #[test]
    fn test_malformed_json_yields_empty_result() {
        let parsed = parse_filters(r#"[["age", ">", 18"#);
        assert!(parsed.filters.is_empty());
        assert!(matches!(
            parsed.diagnostics.as_slice(),
            [Diagnostic::ParseError { context: "filter expression", .. }]
        ));
    }

    #[test]
    fn test_non_list_top_level_yields_no_filters() {
        let parsed = parse_filters(r#"{"age": 30}"#);
        assert!(parsed.filters.is_empty());
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_list_yields_no_filters() {
        let parsed = parse_filters("[]");
        assert!(parsed.filters.is_empty());
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_field_normalized_and_quoted() {
        let parsed = parse_filters(r#"["first_name,related.status", "x"]"#);
        assert_eq!(parsed.filters[0].item.field, "\"firstName__related.status\"");
    }

    #[test]
    fn test_scalar_inside_multiple_mode_is_skipped() {
        let parsed = parse_filters(r#"[["age", ">", 18], "stray", ["b", 2]]"#);
        assert_eq!(parsed.filters.len(), 2);
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::IgnoredElement { position: 1 }]
        );
    }

    #[test]
    fn test_single_mode_trailing_elements_are_skipped() {
        let parsed = parse_filters(r#"["age", ">", 18, "extra"]"#);
        assert_eq!(parsed.filters.len(), 1);
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::IgnoredElement { position: 3 }]
        );
    }

    #[test]
    fn test_non_text_field_is_skipped() {
        let parsed = parse_filters(r#"[42, "=", 1]"#);
        assert!(parsed.filters.is_empty());
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::IgnoredElement { position: 0 }]
        );
    }

    #[test]
    fn test_null_value_stays_unset() {
        let parsed = parse_filters(r#"["deleted_at", "is", null]"#);
        let filter = &parsed.filters[0];
        assert_eq!(filter.item.operator, "IS");
        assert_eq!(filter.item.value, None);
    }

    #[test]
    fn test_value_classification() {
        assert_eq!(
            FilterValue::from_json(&serde_json::json!("a")),
            Some(FilterValue::Text("a".to_string()))
        );
        assert_eq!(
            FilterValue::from_json(&serde_json::json!(true)),
            Some(FilterValue::Bool(true))
        );
        assert_eq!(
            FilterValue::from_json(&serde_json::json!(7)),
            Some(FilterValue::Int(7))
        );
        assert_eq!(
            FilterValue::from_json(&serde_json::json!(1.5)),
            Some(FilterValue::Float(1.5))
        );
        assert_eq!(
            FilterValue::from_json(&serde_json::json!(["a", 1])),
            Some(FilterValue::List(vec![
                FilterValue::Text("a".to_string()),
                FilterValue::Int(1),
            ]))
        );
        assert_eq!(FilterValue::from_json(&serde_json::json!(null)), None);
        assert_eq!(FilterValue::from_json(&serde_json::json!({"k": 1})), None);
    }
}
