//! Pagination summary for listing responses.
//!
//! [`paginate`] runs after the relational executor reports the filtered
//! record count: it derives the page-link sequence, the boundary flags, and
//! the query-string remainder used to rebuild navigation links.

use serde::Serialize;
use utoipa::ToSchema;

/// The pagination summary for one result page.
///
/// Serializes with camelCase field names; `additional` and `summary` are
/// omitted when unset.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageModel<T> {
    /// The records on this page, passed through untouched.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: i64,
    /// The page before the current one.
    pub prev_page: i64,
    /// The page after the current one.
    pub next_page: i64,
    /// Records per page.
    pub page_size: i64,
    /// Current query string with its `page=` assignment removed and a
    /// leading `&` guaranteed, ready to append after a rebuilt `page=`
    /// parameter.
    pub current_param: String,
    /// True on the first page.
    pub first: bool,
    /// True once the current window reaches the last record.
    pub last: bool,
    /// True when there is more than one page.
    pub has_pages: bool,
    /// The full `1..totalPages` page-link sequence.
    pub page_numbers: Vec<i64>,
    /// Total page count; collapses to 0 when the page size makes the
    /// division undefined.
    pub total_pages: f64,
    /// Total record count after filtering, as reported by the executor.
    pub total_visible: i64,
    /// Number of records in the supplied payload.
    pub total_records_filtered: i64,
    /// Opaque extra payload for the response envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<serde_json::Value>,
    /// Opaque summary payload for the response envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<serde_json::Value>,
}

impl<T> PageModel<T> {
    /// Attach an opaque extra payload.
    #[must_use]
    pub fn with_additional(mut self, additional: serde_json::Value) -> Self {
        self.additional = Some(additional);
        self
    }

    /// Attach an opaque summary payload.
    #[must_use]
    pub fn with_summary(mut self, summary: serde_json::Value) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// Build the pagination summary for one result page.
///
/// `page` is 1-based. `total_visible` is the filtered record count reported
/// by the executor; `current_param` is the already-URL-decoded query string
/// of the current request.
#[must_use]
pub fn paginate<T>(
    page: i64,
    page_size: i64,
    total_visible: i64,
    current_param: &str,
    items: Vec<T>,
) -> PageModel<T> {
    let total_pages = total_page_count(page_size, total_visible);

    PageModel {
        total_records_filtered: items.len() as i64,
        items,
        page,
        prev_page: page - 1,
        next_page: page + 1,
        page_size,
        current_param: normalize_current_param(current_param),
        first: page == 1,
        last: page * page_size >= total_visible,
        has_pages: total_pages > 1.0,
        page_numbers: page_numbers(total_pages),
        total_pages,
        total_visible,
        additional: None,
        summary: None,
    }
}

/// `ceil(total_visible / page_size)`, collapsed to 0 when the division is
/// undefined or the count is negative.
fn total_page_count(page_size: i64, total_visible: i64) -> f64 {
    let pages = (total_visible as f64 / page_size as f64).ceil();
    if pages.is_finite() { pages.max(0.0) } else { 0.0 }
}

/// The `1..total_pages` page-link sequence; empty when there are no pages.
fn page_numbers(total_pages: f64) -> Vec<i64> {
    if total_pages <= 0.0 {
        return Vec::new();
    }
    (1..=total_pages as i64).collect()
}

/// Strip every `page=<value>` assignment from the query string and guarantee
/// a leading `&`, so callers can rebuild pagination links by appending the
/// result directly after their own `page=` parameter.
#[must_use]
pub fn normalize_current_param(raw: &str) -> String {
    let rest: Vec<&str> = raw
        .split('&')
        .filter(|segment| !segment.is_empty() && !segment.starts_with("page="))
        .collect();
    format!("&{}", rest.join("&"))
}
