//! Artworks page: loads table pages and handles row-count selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the data flow around `TableState`: one fetch per `current_page`
//! change, paginator events, and the "select N rows" submission that may pull
//! further pages before settling the selection.

#[cfg(test)]
#[path = "artworks_test.rs"]
mod artworks_test;

use leptos::prelude::*;

use crate::components::artworks_table::ArtworksTable;
use crate::components::paginator::Paginator;
use crate::components::row_count_overlay::RowCountOverlay;
use crate::net::types::{Artwork, effective_total};
use crate::state::table::{TableState, page_from_event, parse_row_count};
use crate::util::alert::alert;

/// Store a loaded page unless the user has already moved to another page.
///
/// Returns `false` when the result is stale and was dropped.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn apply_loaded_page(state: &mut TableState, page: u32, rows: Vec<Artwork>, total: Option<u64>) -> bool {
    if state.current_page != page {
        return false;
    }
    state.rows = rows;
    state.loading = false;
    apply_total(state, total);
    true
}

/// Record the total reported by a fetch; failed fetches keep the previous one.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn apply_total(state: &mut TableState, total: Option<u64>) {
    if let Some(total) = total {
        state.total_records = effective_total(Some(total));
    }
}

/// Commit an accumulated selection, release the loop and close the overlay.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn finish_selection(state: &mut TableState, selected: Vec<Artwork>) {
    state.selected = selected;
    state.selecting = false;
    state.overlay_open = false;
}

/// Artworks table page.
#[component]
pub fn ArtworksPage() -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::load_page;
        use crate::state::table::PAGE_SIZE;

        let current_page = Memo::new(move |_| table.with(|t| t.current_page));
        Effect::new(move || {
            let page = current_page.get();
            table.update(|t| t.loading = true);
            leptos::task::spawn_local(async move {
                let (rows, total) = load_page(page, PAGE_SIZE).await;
                table.update(|t| {
                    apply_loaded_page(t, page, rows, total);
                });
            });
        });
    }

    let on_page = Callback::new(move |index: u32| {
        let page = page_from_event(index);
        table.update(|t| t.current_page = page);
    });

    let on_toggle_overlay = Callback::new(move |()| {
        table.update(|t| t.overlay_open = !t.overlay_open);
    });

    let on_submit = Callback::new(move |()| {
        let input = table.with_untracked(|t| t.row_count_input.clone());
        let count = match parse_row_count(&input) {
            Ok(count) => count,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::load_page;
            use crate::state::table::{PAGE_SIZE, select_rows};

            if !table.try_update(TableState::begin_selection).unwrap_or(false) {
                return;
            }
            let (selected, rows, page) =
                table.with_untracked(|t| (t.selected.clone(), t.rows.clone(), t.current_page));
            leptos::task::spawn_local(async move {
                let result = select_rows(selected, rows, page, count, move |next| async move {
                    let (rows, total) = load_page(next, PAGE_SIZE).await;
                    table.update(|t| apply_total(t, total));
                    rows
                })
                .await;
                table.update(|t| finish_selection(t, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = count;
        }
    });

    view! {
        <div class="artworks-page">
            <div class="artworks-page__overlay-anchor">
                <RowCountOverlay on_submit=on_submit/>
            </div>
            <ArtworksTable on_toggle_overlay=on_toggle_overlay/>
            <Paginator on_page=on_page/>
        </div>
    }
}
