use listquery::paginate;
use serde_json::json;

#[test]
fn test_summary_for_middle_page() {
    let items = vec![json!({"id": 11}), json!({"id": 12})];
    let page = paginate(2, 10, 35, "page=2&status=active", items);

    assert_eq!(page.page, 2);
    assert_eq!(page.prev_page, 1);
    assert_eq!(page.next_page, 3);
    assert!((page.total_pages - 4.0).abs() < f64::EPSILON);
    assert_eq!(page.page_numbers, vec![1, 2, 3, 4]);
    assert!(page.has_pages);
    assert!(!page.first);
    assert!(!page.last);
    assert_eq!(page.current_param, "&status=active");
    assert_eq!(page.total_visible, 35);
    assert_eq!(page.total_records_filtered, 2);
}

#[test]
fn test_serialized_field_names() {
    let page = paginate(1, 10, 3, "", vec![json!({"id": 1})]);
    let encoded = serde_json::to_value(&page).unwrap();

    assert_eq!(encoded["page"], 1);
    assert_eq!(encoded["prevPage"], 0);
    assert_eq!(encoded["nextPage"], 2);
    assert_eq!(encoded["pageSize"], 10);
    assert_eq!(encoded["currentParam"], "&");
    assert_eq!(encoded["first"], true);
    assert_eq!(encoded["last"], true);
    assert_eq!(encoded["hasPages"], false);
    assert_eq!(encoded["pageNumbers"], json!([1]));
    assert_eq!(encoded["totalPages"], 1.0);
    assert_eq!(encoded["totalVisible"], 3);
    assert_eq!(encoded["totalRecordsFiltered"], 1);
    assert!(encoded.get("additional").is_none());
    assert!(encoded.get("summary").is_none());
}

#[test]
fn test_optional_payloads_serialize_when_set() {
    let page = paginate(1, 10, 1, "", vec![json!({"id": 1})])
        .with_additional(json!({"scope": "all"}))
        .with_summary(json!({"total_amount": 120}));
    let encoded = serde_json::to_value(&page).unwrap();

    assert_eq!(encoded["additional"], json!({"scope": "all"}));
    assert_eq!(encoded["summary"], json!({"total_amount": 120}));
}

#[test]
fn test_zero_page_size_collapses_to_no_pages() {
    let page = paginate::<serde_json::Value>(1, 0, 50, "", Vec::new());

    assert!((page.total_pages - 0.0).abs() < f64::EPSILON);
    assert!(page.page_numbers.is_empty());
    assert!(!page.has_pages);
    // A zero-size window never reaches the last record.
    assert!(!page.last);
}

#[test]
fn test_single_page_result() {
    let page = paginate(1, 25, 8, "", vec![json!({}), json!({})]);

    assert!((page.total_pages - 1.0).abs() < f64::EPSILON);
    assert_eq!(page.page_numbers, vec![1]);
    assert!(!page.has_pages);
    assert!(page.first);
    assert!(page.last);
}
