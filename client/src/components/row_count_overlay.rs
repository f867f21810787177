//! Popover for "select the first N rows".

use leptos::prelude::*;

use crate::state::table::TableState;

/// Number input plus Submit button, visible while `overlay_open` is set.
#[component]
pub fn RowCountOverlay(on_submit: Callback<()>) -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();

    view! {
        <Show when=move || table.get().overlay_open>
            <div class="row-count-overlay" role="dialog" aria-label="Select rows">
                <input
                    class="row-count-overlay__input"
                    type="number"
                    placeholder="Enter No. of rows"
                    prop:value=move || table.get().row_count_input
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        table.update(|t| t.row_count_input = value);
                    }
                />
                <button
                    class="btn btn--primary"
                    disabled=move || table.get().selecting
                    on:click=move |_| on_submit.run(())
                >
                    "✓ Submit"
                </button>
            </div>
        </Show>
    }
}
