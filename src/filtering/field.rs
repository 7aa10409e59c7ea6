use heck::ToLowerCamelCase;

/// Canonicalize a column reference that may carry a comma-separated relation
/// path.
///
/// The primary segment converts to lowerCamelCase and every later segment is
/// kept verbatim, joined with the `__` relation-traversal separator:
/// `"first_name,related.status"` becomes `"firstName__related.status"`. A
/// reference without a comma is returned unchanged.
#[must_use]
pub fn normalize_field_name(field: &str) -> String {
    match field.split_once(',') {
        None => field.to_string(),
        Some((primary, rest)) => {
            let mut segments = vec![primary.to_lower_camel_case()];
            segments.extend(rest.split(',').map(str::to_string));
            segments.join("__")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field_unchanged() {
        assert_eq!(normalize_field_name("status"), "status");
        assert_eq!(normalize_field_name("created_at"), "created_at");
    }

    #[test]
    fn test_relation_path_camel_cases_primary_segment() {
        assert_eq!(
            normalize_field_name("first_name,related.status"),
            "firstName__related.status"
        );
    }

    #[test]
    fn test_later_segments_kept_verbatim() {
        assert_eq!(
            normalize_field_name("order_id,customers.last_name,vehicles.year"),
            "orderId__customers.last_name__vehicles.year"
        );
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(normalize_field_name(""), "");
    }
}
