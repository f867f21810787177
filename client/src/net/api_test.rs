use super::*;

#[test]
fn artworks_endpoint_formats_page_and_limit() {
    assert_eq!(artworks_endpoint(3, 12), "/api/artworks?page=3&limit=12");
}

#[test]
fn artworks_request_failed_message_formats_status() {
    assert_eq!(artworks_request_failed_message(502), "artworks request failed: 502");
}

#[test]
fn fetch_failed_log_line_prefixes_error() {
    assert_eq!(fetch_failed_log_line("timeout"), "Error fetching artworks data: timeout");
}
