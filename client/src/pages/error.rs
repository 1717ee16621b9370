//! Generic error page, also used as the router fallback.

use leptos::prelude::*;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"Something went wrong"</h1>
            <p>"The page you asked for could not be shown."</p>
            <a href="/" class="btn">"Back to home"</a>
        </div>
    }
}
