//! Login page view with username/password form.

use api::session;
use api::{Notice, Notify};
use dioxus::prelude::*;
use ui::{use_auth, use_backend, use_lead_cache, use_notices, LoadingSpinner};

use crate::Route;

/// Centered card shared by the login and registration pages.
#[component]
pub(super) fn AuthCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card auth-card",
                div {
                    class: "auth-head",
                    div { class: "auth-logo" }
                    h1 { "{title}" }
                    p { class: "muted", "{subtitle}" }
                }
                {children}
            }
        }
    }
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut notices = use_notices();
    let backend = use_backend();
    let cache = use_lead_cache();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let cache = cache.clone();
        spawn(async move {
            loading.set(true);
            match session::login(&backend, &cache, &username(), &password()).await {
                Ok(state) => {
                    if state.user.is_some() {
                        notices.notify(Notice::success("Welcome back!", "You have been logged in successfully"));
                    } else {
                        notices.notify(Notice::error("Login failed", "Could not verify your session"));
                    }
                    // The public-route guard redirects once the state is authenticated.
                    auth.set(state);
                }
                Err(e) if e.is_validation() => {
                    notices.notify(Notice::error("Error", e.to_string()));
                }
                Err(e) => {
                    tracing::error!("Login failed: {e}");
                    notices.notify(Notice::error("Login failed", "Invalid username or password"));
                }
            }
            loading.set(false);
        });
    };

    if loading() {
        return rsx! { LoadingSpinner { message: "Signing you in..." } };
    }

    rsx! {
        AuthCard {
            title: "Welcome Back",
            subtitle: "Sign in to your MarkAssist account",
            form {
                class: "auth-form",
                onsubmit: handle_login,
                label {
                    class: "field",
                    span { "Username" }
                    input {
                        r#type: "text",
                        placeholder: "Enter your username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                label {
                    class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button { class: "btn btn-primary btn-block", r#type: "submit", "Sign In" }
            }
            p {
                class: "small muted center",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
