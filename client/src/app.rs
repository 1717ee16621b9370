//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use diagram::selection::Selection;

use crate::pages::{
    editor::EditorPage, error::ErrorPage, home::HomePage, login::LoginPage, signup::SignUpPage,
    yjstest::YjsTestPage,
};
use crate::state::doc::{DocHandle, starter_document};

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
/// Provides the shared document handle and the selection store, then routes
/// paths to pages. Fixed paths are declared before the `:doc_id` wildcard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(DocHandle::new(starter_document()));
    provide_context(RwSignal::new(Selection::new()));

    view! {
        <Stylesheet id="leptos" href="/pkg/flowboard.css"/>
        <Title text="Flowboard"/>

        <Router>
            // Same order as `diagram::route::RouteTable::patterns`; keep the two in step.
            <Routes fallback=|| view! { <ErrorPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("app") view=EditorPage/>
                <Route path=StaticSegment("error") view=ErrorPage/>
                <Route path=StaticSegment("yjstest") view=YjsTestPage/>
                <Route path=ParamSegment("doc_id") view=EditorPage/>
                <Route path=(ParamSegment("doc_id"), WildcardSegment("rest")) view=EditorPage/>
            </Routes>
        </Router>
    }
}
