//! Sort-token parsing.

use super::field::normalize_field_name;

// Shared default applied when no sort token is supplied.
const DEFAULT_SORT_COLUMN: &str = "id";

/// Sort direction, rendered lowercase in the order-by clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A parsed sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Normalized column name.
    pub column: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Render the `column direction` order-by clause.
    #[must_use]
    pub fn to_order_by(&self) -> String {
        format!("{} {}", self.column, self.direction.as_str())
    }
}

/// Parse a sort token: a leading `-` selects descending order, no prefix
/// ascending. The column passes through the field normalizer. An empty or
/// missing token falls back to `id desc`.
#[must_use]
pub fn parse_sorting(sort: Option<&str>) -> SortSpec {
    match sort {
        None | Some("") => SortSpec {
            column: DEFAULT_SORT_COLUMN.to_string(),
            direction: SortDirection::Desc,
        },
        Some(token) => {
            let (column, direction) = match token.strip_prefix('-') {
                Some(rest) => (rest, SortDirection::Desc),
                None => (token, SortDirection::Asc),
            };
            SortSpec {
                column: normalize_field_name(column),
                direction,
            }
        }
    }
}
