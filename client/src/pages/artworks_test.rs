use super::*;

fn art(id: u64) -> Artwork {
    Artwork {
        id,
        title: format!("Artwork {id}"),
        place_of_origin: "Unknown".to_owned(),
        artist_display: "Not Available".to_owned(),
        inscriptions: "None".to_owned(),
        date_start: "N/A".to_owned(),
        date_end: "N/A".to_owned(),
    }
}

#[test]
fn apply_loaded_page_stores_rows_and_total() {
    let mut state = TableState { current_page: 2, loading: true, ..TableState::default() };
    assert!(apply_loaded_page(&mut state, 2, vec![art(13), art(14)], Some(129_000)));
    assert_eq!(state.rows.len(), 2);
    assert_eq!(state.total_records, 129_000);
    assert!(!state.loading);
}

#[test]
fn apply_loaded_page_drops_stale_results() {
    let mut state = TableState { current_page: 3, loading: true, ..TableState::default() };
    assert!(!apply_loaded_page(&mut state, 2, vec![art(13)], Some(10)));
    assert!(state.rows.is_empty());
    assert!(state.loading);
    assert_eq!(state.total_records, 0);
}

#[test]
fn apply_loaded_page_failure_clears_rows_but_keeps_total() {
    let mut state = TableState { rows: vec![art(1)], total_records: 500, ..TableState::default() };
    assert!(apply_loaded_page(&mut state, 1, Vec::new(), None));
    assert!(state.rows.is_empty());
    assert_eq!(state.total_records, 500);
}

#[test]
fn apply_total_replaces_zero_with_fallback() {
    let mut state = TableState::default();
    apply_total(&mut state, Some(0));
    assert_eq!(state.total_records, crate::net::types::FALLBACK_TOTAL_RECORDS);
}

#[test]
fn finish_selection_sets_rows_and_closes_overlay() {
    let mut state = TableState { overlay_open: true, ..TableState::default() };
    assert!(state.begin_selection());
    finish_selection(&mut state, vec![art(1), art(2)]);
    assert_eq!(state.selected.len(), 2);
    assert!(!state.overlay_open);
    assert!(!state.selecting);
    assert!(state.begin_selection());
}

#[test]
fn finish_selection_leaves_page_load_flag_alone() {
    let mut state = TableState { loading: true, selecting: true, ..TableState::default() };
    finish_selection(&mut state, vec![art(1)]);
    assert!(state.loading);
}
