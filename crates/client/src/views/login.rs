//! Login view.

use dioxus::prelude::*;
use mafia_shared::{try_response_message, ApiError, LoginRequest};

use crate::session::SessionContext;
use crate::stores::{hide_loading, notify, show_loading};
use crate::time::sleep_ms;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_context::<SessionContext>();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        // A second submit while the first request is in flight is dropped.
        if *is_loading.peek() {
            return;
        }

        let user = username.read().trim().to_string();
        let pass = password.read().to_string();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Username and password are required".to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);
        show_loading("Signing in...");

        spawn(async move {
            let client = session.client();
            let result = client
                .login(&LoginRequest {
                    username: user,
                    password: pass,
                })
                .await;

            // The overlay comes down before any branching so no outcome
            // can leave it stuck on screen.
            hide_loading();
            is_loading.set(false);

            match result {
                Ok(resp) if resp.success => {
                    let user = match client.fetch_me().await {
                        Ok(me) if me.success => me.user,
                        _ => None,
                    };
                    let Some(user) = user else {
                        error.set(Some("Signed in, but loading your profile failed".to_string()));
                        return;
                    };
                    session.login(user);
                    notify("Welcome back!", mafia_shared::Severity::Success);
                    // Let the toast land before the page swaps out.
                    sleep_ms(1000).await;
                    nav.push(Route::Dashboard {});
                }
                Ok(resp) => {
                    error.set(Some(
                        resp.message.unwrap_or_else(|| "Login failed".to_string()),
                    ));
                }
                Err(ApiError::Http { body, .. }) => {
                    error.set(Some(
                        try_response_message(&body).unwrap_or_else(|| "Login failed".to_string()),
                    ));
                }
                Err(err) => {
                    crate::log_error!("Login request failed: {}", err);
                    error.set(Some("Cannot reach the server. Check your connection.".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "min-h-screen bg-[#1e1f22] flex items-center justify-center p-4",
            div { class: "bg-[#313338] rounded-lg shadow-2xl w-full max-w-md",
                div { class: "px-8 pt-8 pb-4 text-center",
                    h1 { class: "text-3xl font-bold text-white", "🕵️ Mafia" }
                    p { class: "text-gray-400 mt-2", "Sign in to play" }
                }
                form { onsubmit: handle_submit,
                    div { class: "px-8 py-4 space-y-4",
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2",
                                "Username"
                            }
                            input {
                                class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white placeholder-[#949ba4] focus:ring-0",
                                r#type: "text",
                                placeholder: "your username",
                                value: "{username}",
                                oninput: move |e: FormEvent| {
                                    username.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2",
                                "Password"
                            }
                            input {
                                class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white placeholder-[#949ba4] focus:ring-0",
                                r#type: "password",
                                value: "{password}",
                                oninput: move |e: FormEvent| {
                                    password.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        if let Some(err) = error.read().as_ref() {
                            div { class: "p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                                "{err}"
                            }
                        }
                    }
                    div { class: "px-8 pb-8 pt-2",
                        button {
                            r#type: "submit",
                            class: "w-full px-4 py-3 bg-indigo-500 hover:bg-indigo-600 text-white font-medium rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: *is_loading.read(),
                            if *is_loading.read() {
                                "Signing in..."
                            } else {
                                "Sign In"
                            }
                        }
                        p { class: "text-center text-gray-400 text-sm mt-4",
                            "No account yet? "
                            Link {
                                to: Route::Register {},
                                class: "text-indigo-400 hover:text-indigo-300",
                                "Create one"
                            }
                        }
                    }
                }
            }
        }
    }
}
