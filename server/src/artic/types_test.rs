use super::*;

#[test]
fn list_response_parses_data_and_total() {
    let body = r#"{
        "pagination": {"total": 129884, "limit": 12, "offset": 0, "total_pages": 10824, "current_page": 1},
        "data": [
            {"id": 1, "title": "Priest and Boy", "place_of_origin": "United States", "artist_display": "Lawrence Carmichael Earle", "inscriptions": null, "date_start": 1880, "date_end": 1880},
            {"id": 2, "title": "Untitled"}
        ],
        "info": {"license_text": "..."}
    }"#;
    let parsed: ArtworkListResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.data.len(), 2);
    assert_eq!(parsed.total(), Some(129_884));
    assert_eq!(parsed.data[0].place_of_origin.as_deref(), Some("United States"));
    assert_eq!(parsed.data[1].artist_display, None);
}

#[test]
fn list_response_tolerates_missing_pagination() {
    let parsed: ArtworkListResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
    assert!(parsed.data.is_empty());
    assert_eq!(parsed.total(), None);
}

#[test]
fn artic_error_messages_include_detail() {
    let err = ArticError::Status { status: 503, body: String::new() };
    assert_eq!(err.to_string(), "API response error: status 503");
    let err = ArticError::Parse("expected value".into());
    assert_eq!(err.to_string(), "API response parse failed: expected value");
}
