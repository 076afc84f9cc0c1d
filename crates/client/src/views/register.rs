//! Registration view.

use dioxus::prelude::*;
use mafia_shared::{try_response_message, ApiError, RegisterRequest, Severity};

use crate::session::SessionContext;
use crate::stores::{hide_loading, notify, show_loading};
use crate::time::sleep_ms;
use crate::Route;

/// Check the form fields and assemble the request.
///
/// Kept separate from the component so the rules are testable: no request
/// is ever sent when this returns an error.
pub fn validate_registration(
    username: &str,
    display_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, String> {
    let username = username.trim();
    let display_name = display_name.trim();
    let email = email.trim();

    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    if username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if display_name.is_empty() {
        return Err("Display name is required".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }

    Ok(RegisterRequest {
        username: username.to_string(),
        display_name: display_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[component]
pub fn Register() -> Element {
    let session = use_context::<SessionContext>();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        if *is_loading.peek() {
            return;
        }

        let req = match validate_registration(
            &username.read(),
            &display_name.read(),
            &email.read(),
            &password.read(),
            &confirm.read(),
        ) {
            Ok(req) => req,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        is_loading.set(true);
        error.set(None);
        show_loading("Creating your account...");

        spawn(async move {
            let result = session.client().register(&req).await;

            hide_loading();
            is_loading.set(false);

            match result {
                Ok(resp) if resp.success => {
                    notify("Account created! You can sign in now.", Severity::Success);
                    sleep_ms(1000).await;
                    nav.push(Route::Login {});
                }
                Ok(resp) => {
                    error.set(Some(
                        resp.message
                            .unwrap_or_else(|| "Registration failed".to_string()),
                    ));
                }
                Err(ApiError::Http { body, .. }) => {
                    error.set(Some(
                        try_response_message(&body)
                            .unwrap_or_else(|| "Registration failed".to_string()),
                    ));
                }
                Err(err) => {
                    crate::log_error!("Register request failed: {}", err);
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
                    p { class: "text-gray-400 mt-2", "Create an account" }
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
                                placeholder: "lowercase, no spaces",
                                value: "{username}",
                                oninput: move |e: FormEvent| {
                                    username.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2",
                                "Display Name"
                            }
                            input {
                                class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white placeholder-[#949ba4] focus:ring-0",
                                r#type: "text",
                                placeholder: "shown to other players",
                                value: "{display_name}",
                                oninput: move |e: FormEvent| {
                                    display_name.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2",
                                "Email (optional)"
                            }
                            input {
                                class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white placeholder-[#949ba4] focus:ring-0",
                                r#type: "email",
                                value: "{email}",
                                oninput: move |e: FormEvent| email.set(e.value()),
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
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2",
                                "Confirm Password"
                            }
                            input {
                                class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white placeholder-[#949ba4] focus:ring-0",
                                r#type: "password",
                                value: "{confirm}",
                                oninput: move |e: FormEvent| {
                                    confirm.set(e.value());
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
                                "Creating..."
                            } else {
                                "Create Account"
                            }
                        }
                        p { class: "text-center text-gray-400 text-sm mt-4",
                            "Already have an account? "
                            Link {
                                to: Route::Login {},
                                class: "text-indigo-400 hover:text-indigo-300",
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_never_produce_a_request() {
        let err = validate_registration("alice", "Alice", "", "secret1", "secret2");
        assert_eq!(err.unwrap_err(), "Passwords do not match");
    }

    #[test]
    fn short_password_is_rejected() {
        let err = validate_registration("alice", "Alice", "", "abc", "abc");
        assert_eq!(err.unwrap_err(), "Password must be at least 6 characters");
    }

    #[test]
    fn valid_form_builds_trimmed_request() {
        let req =
            validate_registration(" alice ", " Alice ", "a@b.c", "secret1", "secret1").unwrap();
        assert_eq!(req.username, "alice");
        assert_eq!(req.display_name, "Alice");
        assert_eq!(req.email, "a@b.c");
    }

    #[test]
    fn empty_username_is_rejected() {
        let err = validate_registration("  ", "Alice", "", "secret1", "secret1");
        assert_eq!(err.unwrap_err(), "Username is required");
    }
}
