//! Registration page view with username/email/password form.

use api::session;
use api::{Notice, Notify};
use dioxus::prelude::*;
use ui::{use_backend, use_lead_cache, use_notices, LoadingSpinner};

use super::login::AuthCard;
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut notices = use_notices();
    let backend = use_backend();
    let cache = use_lead_cache();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let cache = cache.clone();
        spawn(async move {
            loading.set(true);
            let result = session::register(
                &backend,
                &cache,
                username().trim(),
                &password(),
                email().trim(),
            )
            .await;
            loading.set(false);
            match result {
                Ok(response) => {
                    notices.notify(Notice::success(
                        "Account created!",
                        format!("You received {} free credits. Please sign in.", response.credits),
                    ));
                    nav.push(Route::Login {});
                }
                Err(e) if e.is_validation() => {
                    notices.notify(Notice::error("Error", e.to_string()));
                }
                Err(e) => {
                    tracing::error!("Registration failed: {e}");
                    notices.notify(Notice::error("Registration failed", "Could not create your account"));
                }
            }
        });
    };

    if loading() {
        return rsx! { LoadingSpinner { message: "Creating your account..." } };
    }

    rsx! {
        AuthCard {
            title: "Create Account",
            subtitle: "Start generating leads with MarkAssist",
            form {
                class: "auth-form",
                onsubmit: handle_register,
                label {
                    class: "field",
                    span { "Username" }
                    input {
                        r#type: "text",
                        placeholder: "Choose a username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                label {
                    class: "field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@company.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label {
                    class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "Create a password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button { class: "btn btn-primary btn-block", r#type: "submit", "Create Account" }
            }
            p {
                class: "small muted center",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
