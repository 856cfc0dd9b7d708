//! Login page

use dioxus::prelude::*;
use newsroom_api::services::auth::LoginCredentials;

use crate::routes::Route;
use crate::session::use_session;

/// Email + password sign-in. Auth errors render inline; the session stays
/// unauthenticated until the backend hands back both a user and a token.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Already signed in — nothing to do here.
    if session.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Dashboard {} }
        };
    }

    let handle_submit = move |_| {
        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            let ok = session
                .login(LoginCredentials {
                    email: email_value,
                    password: password_value,
                })
                .await;

            if ok {
                navigator.push(Route::Dashboard {});
            } else {
                error.set(session.error());
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Sign In" }
                    p { class: "text-gray-600 text-sm", "Newsroom Admin" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Email"
                        }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "you@newsroom.example",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-sky-700 text-white py-2 px-4 rounded-md hover:bg-sky-800 focus:outline-none focus:ring-2 focus:ring-sky-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
