//! Selectable artworks table with a loading mask.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `TableState::rows` from context. Checkbox changes write straight
//! back to the shared selection; the Title header carries the toggle for the
//! row-count overlay owned by the page.

#[cfg(test)]
#[path = "artworks_table_test.rs"]
mod artworks_table_test;

use leptos::prelude::*;

use crate::net::types::Artwork;
use crate::state::table::TableState;

/// Plain text columns rendered after Title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    PlaceOfOrigin,
    Artist,
    Inscriptions,
    StartDate,
    EndDate,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::PlaceOfOrigin,
        Column::Artist,
        Column::Inscriptions,
        Column::StartDate,
        Column::EndDate,
    ];

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Column::PlaceOfOrigin => "Place of Origin",
            Column::Artist => "Artist",
            Column::Inscriptions => "Inscriptions",
            Column::StartDate => "Start Date",
            Column::EndDate => "End Date",
        }
    }

    #[must_use]
    pub fn value(self, artwork: &Artwork) -> &str {
        match self {
            Column::PlaceOfOrigin => &artwork.place_of_origin,
            Column::Artist => &artwork.artist_display,
            Column::Inscriptions => &artwork.inscriptions,
            Column::StartDate => &artwork.date_start,
            Column::EndDate => &artwork.date_end,
        }
    }
}

/// Stable identity of a rendered row.
#[must_use]
pub fn row_key(artwork: &Artwork) -> u64 {
    artwork.id
}

/// The artworks data table.
#[component]
pub fn ArtworksTable(on_toggle_overlay: Callback<()>) -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();

    // Only row changes re-run the keyed list, not input or flag updates.
    let rows = Memo::new(move |_| table.with(|t| t.rows.clone()));
    let loading = move || table.get().loading;
    let is_empty = move || {
        let state = table.get();
        !state.loading && state.rows.is_empty()
    };

    view! {
        <div class="artworks-table" class:artworks-table--loading=loading>
            <table class="artworks-table__grid">
                <thead>
                    <tr>
                        <th class="artworks-table__check">
                            <input
                                type="checkbox"
                                aria-label="Select all rows on this page"
                                prop:checked=move || table.get().all_page_selected()
                                on:change=move |_| table.update(TableState::toggle_page)
                            />
                        </th>
                        <th>
                            <div class="artworks-table__title-header">
                                <button
                                    class="btn btn--outlined artworks-table__overlay-toggle"
                                    title="Select rows"
                                    aria-label="Select rows"
                                    on:click=move |_| on_toggle_overlay.run(())
                                >
                                    "▾"
                                </button>
                                <span>"Title"</span>
                            </div>
                        </th>
                        {Column::ALL.iter().map(|c| view! { <th>{c.header()}</th> }).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=row_key
                        children=move |artwork: Artwork| view! { <ArtworkRow artwork=artwork/> }
                    />
                </tbody>
            </table>
            <Show when=is_empty>
                <p class="artworks-table__empty">"No records found."</p>
            </Show>
            <Show when=loading>
                <div class="artworks-table__mask" aria-busy="true">
                    <span class="artworks-table__spinner">"Loading..."</span>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ArtworkRow(artwork: Artwork) -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();
    let id = artwork.id;
    let checked = move || table.get().is_selected(id);
    let cells = Column::ALL
        .iter()
        .map(|c| view! { <td>{c.value(&artwork).to_owned()}</td> })
        .collect::<Vec<_>>();
    let title = artwork.title.clone();

    view! {
        <tr class="artworks-table__row" class:artworks-table__row--selected=checked>
            <td class="artworks-table__check">
                <input
                    type="checkbox"
                    aria-label="Select row"
                    prop:checked=checked
                    on:change=move |_| table.update(|t| t.toggle_row(&artwork))
                />
            </td>
            <td class="artworks-table__title">{title}</td>
            {cells}
        </tr>
    }
}
