use elserve::http::headers::HeaderMap;

#[test]
fn test_header_map_insert_and_get() {
    let mut headers = HeaderMap::new();
    headers.insert("Host", "example.com");
    headers.insert("Accept", "*/*");

    assert_eq!(headers.get("Host"), Some("example.com"));
    assert_eq!(headers.get("Accept"), Some("*/*"));
    assert_eq!(headers.get("Missing"), None);
    assert_eq!(headers.len(), 2);
}

#[test]
fn test_header_map_last_write_wins() {
    let mut headers = HeaderMap::new();
    headers.insert("X-Tag", "first");
    headers.insert("X-Tag", "second");

    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("X-Tag"), Some("second"));
}

#[test]
fn test_header_map_lookup_is_case_sensitive() {
    let mut headers = HeaderMap::new();
    headers.insert("Content-Type", "text/html");

    assert_eq!(headers.get("Content-Type"), Some("text/html"));
    assert_eq!(headers.get("content-type"), None);
}

#[test]
fn test_header_map_empty() {
    let headers = HeaderMap::new();

    assert!(headers.is_empty());
    assert_eq!(headers.len(), 0);
    assert_eq!(headers.iter().count(), 0);
}

#[test]
fn test_header_map_iteration_covers_all_entries() {
    let mut headers = HeaderMap::new();
    headers.insert("A", "1");
    headers.insert("B", "2");
    headers.insert("C", "3");

    let mut seen: Vec<(&str, &str)> = headers.iter().collect();
    seen.sort();

    assert_eq!(seen, vec![("A", "1"), ("B", "2"), ("C", "3")]);
}
