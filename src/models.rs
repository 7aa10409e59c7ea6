use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query parameters accepted by listing endpoints.
///
/// # Filtering
/// The `filter` parameter carries the JSON filter expression:
/// - **Flat triple:** `["age", ">", 18]`, or `["age", 30]` with the operator
///   defaulting to `=`
/// - **Nested triples with connectives:**
///   ```json
///   [["age", ">", 18], ["AND"], ["status", "=", "active"]]
///   ```
/// - **List operators:** `["status", "in", ["active", "pending"]]`,
///   `["age", "between", [18, 65]]`
///
/// # Search
/// `search` is the free-text term matched against `search_columns`, a JSON
/// list of column names, for example `["title", "description"]`.
///
/// # Sorting
/// `sort` is a single column token; a leading `-` sorts descending:
/// - Ascending: `sort=column_name`
/// - Descending: `sort=-column_name`
///
/// # Pagination
/// Standard 1-based `page` and `per_page` parameters.
#[derive(Debug, Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// JSON-encoded filter expression.
    #[param(example = r#"[["age", ">", 18], ["AND"], ["status", "=", "active"]]"#)]
    pub filter: Option<String>,
    /// Free-text search term matched against the searchable columns.
    #[param(example = "urgent")]
    pub search: Option<String>,
    /// JSON list of searchable column names.
    #[param(example = r#"["title", "description"]"#)]
    pub search_columns: Option<String>,
    /// Sort token; a leading `-` selects descending order.
    #[param(example = "-created_at")]
    pub sort: Option<String>,
    /// Page number (1-based).
    #[param(example = 1)]
    pub page: Option<u64>,
    /// Number of items per page.
    #[param(example = 10)]
    pub per_page: Option<u64>,
}

/// Derive the SQL offset and limit from the pagination parameters.
///
/// Pages are 1-based; when either parameter is absent the first ten records
/// are selected.
#[must_use]
pub fn parse_pagination(params: &ListParams) -> (u64, u64) {
    if let (Some(page), Some(per_page)) = (params.page, params.per_page) {
        (page.saturating_sub(1) * per_page, per_page)
    } else {
        (0, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit_from_page_parameters() {
        let params = ListParams {
            page: Some(3),
            per_page: Some(20),
            ..ListParams::default()
        };
        assert_eq!(parse_pagination(&params), (40, 20));
    }

    #[test]
    fn test_first_page_has_zero_offset() {
        let params = ListParams {
            page: Some(1),
            per_page: Some(25),
            ..ListParams::default()
        };
        assert_eq!(parse_pagination(&params), (0, 25));
    }

    #[test]
    fn test_page_zero_saturates() {
        let params = ListParams {
            page: Some(0),
            per_page: Some(25),
            ..ListParams::default()
        };
        assert_eq!(parse_pagination(&params), (0, 25));
    }

    #[test]
    fn test_absent_parameters_fall_back_to_default_window() {
        assert_eq!(parse_pagination(&ListParams::default()), (0, 10));

        let params = ListParams {
            page: Some(2),
            ..ListParams::default()
        };
        assert_eq!(parse_pagination(&params), (0, 10));
    }
}
