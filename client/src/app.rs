//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::artworks::ArtworksPage;
use crate::state::table::TableState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared table state and mounts the artworks page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let table = RwSignal::new(TableState::default());
    provide_context(table);

    view! {
        <Stylesheet id="leptos" href="/pkg/artworks.css"/>
        <Title text="Artworks Table"/>

        <div class="app">
            <h1 class="heading">"Artworks Table"</h1>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ArtworksPage/>
                </Routes>
            </Router>
        </div>
    }
}
