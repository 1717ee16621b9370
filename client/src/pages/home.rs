//! Landing page with entry points into the app.

use leptos::prelude::*;

use diagram::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Flowboard"</h1>
            <p class="home-page__tagline">"Draw diagrams together, in real time."</p>
            <nav class="home-page__actions">
                <a href=Route::App.path() class="btn btn--primary">"Open editor"</a>
                <a href=Route::Login.path() class="btn">"Log in"</a>
                <a href=Route::SignUp.path() class="btn">"Sign up"</a>
            </nav>
        </div>
    }
}
