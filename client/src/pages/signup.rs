//! Sign-up page. Account creation is handled elsewhere; this page checks the
//! form locally and forwards to the editor.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use diagram::route::Route;

use super::login::{MIN_PASSWORD_LEN, looks_like_email};

/// Validated sign-up form.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<SignUpInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignUpInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_signup_input(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(_) => {
                info.set(String::new());
                navigate(&Route::App.path(), Default::default());
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    let field = move |kind: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign up"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("text", "Name", name)}
                    {field("email", "you@example.com", email)}
                    {field("password", "Password", password)}
                    {field("password", "Confirm password", confirm)}
                    <button class="login-button" type="submit">
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=Route::Login.path()>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
