//! # listquery
//!
//! Translate the filter, search, sort, and pagination parameters of an HTTP
//! listing endpoint into parameterized SQL predicates and a pagination
//! summary.
//!
//! The crate is a request-to-query compiler, not a database engine: it never
//! opens a connection or executes SQL. Compiled predicates are placeholder
//! text plus an ordered parameter list, handed unmodified to a
//! parameterized-query executor that performs its own binding and escaping.
//! User-supplied values are never interpolated into predicate text.
//!
//! ## Compiling a listing request
//!
//! ```
//! use listquery::{ListParams, compile_list_query};
//!
//! let params = ListParams {
//!     filter: Some(r#"[["age", ">", 18], ["AND"], ["status", "=", "active"]]"#.into()),
//!     search: Some("report".into()),
//!     search_columns: Some(r#"["title", "description"]"#.into()),
//!     sort: Some("-created_at".into()),
//!     ..ListParams::default()
//! };
//!
//! let query = compile_list_query(None, &params);
//! assert_eq!(query.filter.sql, "age > ? AND status = ?");
//! assert_eq!(query.search.sql, "title LIKE ? OR description LIKE ?");
//! assert_eq!(query.order_by, "created_at desc");
//! ```
//!
//! The three predicate groups (`custom`, `filter`, `search`) stay independent
//! so the executor can combine them with `AND`.
//!
//! ## Building the pagination summary
//!
//! After the executor reports the filtered record count:
//!
//! ```
//! use listquery::paginate;
//!
//! let page = paginate(2, 10, 35, "page=2&status=active", vec!["row"]);
//! assert_eq!(page.page_numbers, vec![1, 2, 3, 4]);
//! assert_eq!(page.current_param, "&status=active");
//! assert!(page.has_pages);
//! ```
//!
//! ## Degradation instead of failure
//!
//! Malformed input never aborts a request: invalid JSON, values that do not
//! fit their operator, and wrong-length operator lists all compile to an
//! empty or partial predicate, with the reason recorded in the returned
//! [`Diagnostic`] list.

pub mod errors;
pub mod filtering;
pub mod models;
pub mod pagination;

pub use errors::Diagnostic;
pub use filtering::{
    FilterItem, FilterKind, FilterValue, ListQuery, ParsedFilters, Predicate, QueryFilter,
    SortDirection, SortSpec, build_condition, build_search_condition, compile_filters,
    compile_list_query, normalize_field_name, parse_filters, parse_sorting,
};
pub use models::{ListParams, parse_pagination};
pub use pagination::{PageModel, normalize_current_param, paginate};
