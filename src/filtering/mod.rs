//! # Filter, Search & Sort Compilation
//!
//! Translates the JSON-encoded filter mini-language, free-text search term,
//! and sort token of a listing request into parameterized SQL fragments. The
//! output is placeholder text plus an ordered parameter list; the relational
//! executor performs all binding, escaping, and execution.
//!
//! ## Filter expression grammar
//!
//! ```rust,ignore
//! // One flat triple; the operator defaults to `=` when omitted
//! ["age", 30]
//! ["age", ">", 18]
//!
//! // A list of triples with bare connective tokens between them
//! [["age", ">", 18], ["AND"], ["status", "=", "active"]]
//!
//! // Operators with list values
//! ["status", "in", ["active", "pending"]]
//! ["age", "between", [18, 65]]
//!
//! // Null checks
//! ["deleted_at", "is", null]
//! ```
//!
//! Two consecutive triples with no connective between them are joined with an
//! implicit `OR`. Field references may carry a comma-separated relation path
//! (`"first_name,related.status"`), normalized to `firstName__related.status`.
//!
//! ## Main entry points
//!
//! - [`compile_list_query`]: the whole request in one call
//! - [`compile_filters`]: one filter expression
//! - [`build_search_condition`]: the search term over its column list
//! - [`parse_sorting`]: the sort token
//!
//! All of them degrade instead of failing: malformed input compiles to an
//! empty predicate and the reason lands in the returned [`Diagnostic`] list.
//!
//! [`Diagnostic`]: crate::errors::Diagnostic

pub mod conditions;
pub mod field;
pub mod parser;
pub mod search;
pub mod sort;

// Re-export commonly used items
pub use conditions::{ListQuery, Predicate, build_condition, compile_filters, compile_list_query};
pub use field::normalize_field_name;
pub use parser::{FilterItem, FilterKind, FilterValue, ParsedFilters, QueryFilter, parse_filters};
pub use search::build_search_condition;
pub use sort::{SortDirection, SortSpec, parse_sorting};
