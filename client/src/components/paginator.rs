//! Page navigation under the table.

use leptos::prelude::*;

use crate::state::table::{PAGE_SIZE, TableState, page_count};
use crate::util::pagination::{PAGE_LINK_COUNT, can_go_next, can_go_prev, page_links, report};

/// First/prev/links/next/last controls. Emits the zero-based page index.
#[component]
pub fn Paginator(on_page: Callback<u32>) -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();

    let current = move || table.get().current_page;
    let total_pages = move || page_count(table.get().total_records, PAGE_SIZE);
    let go = move |page: u32| {
        if page != current() {
            on_page.run(page.saturating_sub(1));
        }
    };
    let summary = move || {
        let state = table.get();
        report(state.first_row_index(), state.rows.len(), state.total_records)
    };

    view! {
        <nav class="paginator" aria-label="Pagination">
            <button
                class="btn paginator__nav"
                aria-label="First page"
                disabled=move || !can_go_prev(current())
                on:click=move |_| go(1)
            >
                "«"
            </button>
            <button
                class="btn paginator__nav"
                aria-label="Previous page"
                disabled=move || !can_go_prev(current())
                on:click=move |_| go(current().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                page_links(current(), total_pages(), PAGE_LINK_COUNT)
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="btn paginator__page"
                                class:paginator__page--active=move || current() == page
                                on:click=move |_| go(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn paginator__nav"
                aria-label="Next page"
                disabled=move || !can_go_next(current(), total_pages())
                on:click=move |_| go(current() + 1)
            >
                "›"
            </button>
            <button
                class="btn paginator__nav"
                aria-label="Last page"
                disabled=move || !can_go_next(current(), total_pages())
                on:click=move |_| go(total_pages())
            >
                "»"
            </button>
            <span class="paginator__report">{summary}</span>
        </nav>
    }
}
