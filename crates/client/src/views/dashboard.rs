//! Lobby dashboard: create or join a room.

use dioxus::prelude::*;
use mafia_shared::{
    try_response_message, ApiError, CreateRoomRequest, JoinRoomRequest, Severity,
};

use crate::session::SessionContext;
use crate::stores::{hide_loading, notify, show_loading};
use crate::time::sleep_ms;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut session = use_context::<SessionContext>();
    let nav = use_navigator();

    let mut show_create = use_signal(|| false);
    let mut show_join = use_signal(|| false);

    // Only reachable when logged in
    use_effect(move || {
        if !session.is_authenticated() {
            nav.push(Route::Login {});
        }
    });

    let display_name = session.display_name().unwrap_or_default();

    rsx! {
        div { class: "min-h-screen bg-[#1e1f22] text-white",
            // Top bar
            div { class: "flex items-center justify-between px-6 py-4 bg-[#313338] shadow",
                h1 { class: "text-xl font-bold", "🕵️ Mafia" }
                div { class: "flex items-center gap-4",
                    span { class: "text-gray-300", "{display_name}" }
                    button {
                        class: "px-3 py-1.5 text-sm text-gray-300 hover:text-white transition-colors",
                        onclick: move |_| {
                            session.logout();
                            nav.push(Route::Login {});
                        },
                        "Log out"
                    }
                }
            }

            // Lobby actions
            div { class: "max-w-2xl mx-auto mt-16 px-4",
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    button {
                        class: "bg-[#313338] hover:bg-[#383a40] rounded-lg p-8 text-left transition-colors",
                        onclick: move |_| show_create.set(true),
                        div { class: "text-4xl mb-3", "🏠" }
                        h2 { class: "text-lg font-bold mb-1", "Create a Room" }
                        p { class: "text-sm text-gray-400",
                            "Start a new game and invite friends with the room code."
                        }
                    }
                    button {
                        class: "bg-[#313338] hover:bg-[#383a40] rounded-lg p-8 text-left transition-colors",
                        onclick: move |_| show_join.set(true),
                        div { class: "text-4xl mb-3", "🎟️" }
                        h2 { class: "text-lg font-bold mb-1", "Join a Room" }
                        p { class: "text-sm text-gray-400",
                            "Enter a room code you got from another player."
                        }
                    }
                }
            }

            if *show_create.read() {
                CreateRoomModal { on_close: move |_| show_create.set(false) }
            }
            if *show_join.read() {
                JoinRoomModal { on_close: move |_| show_join.set(false) }
            }
        }
    }
}

/// Modal for creating a new game room
#[component]
pub fn CreateRoomModal(on_close: EventHandler<()>) -> Element {
    let session = use_context::<SessionContext>();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut max_players = use_signal(|| "10".to_string());
    let mut min_players = use_signal(|| "4".to_string());
    let mut allow_voice_chat = use_signal(|| false);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        if *is_loading.peek() {
            return;
        }

        let room_name = name.read().trim().to_string();
        if room_name.is_empty() {
            error.set(Some("Room name is required".to_string()));
            return;
        }
        let Ok(max) = max_players.read().trim().parse::<u32>() else {
            error.set(Some("Max players must be a number".to_string()));
            return;
        };
        let Ok(min) = min_players.read().trim().parse::<u32>() else {
            error.set(Some("Min players must be a number".to_string()));
            return;
        };
        if min < 4 || max < min {
            error.set(Some("Need at least 4 players, and max must not be below min".to_string()));
            return;
        }

        let pass = password.read().trim().to_string();
        let req = CreateRoomRequest {
            name: room_name,
            max_players: max,
            min_players: min,
            allow_voice_chat: *allow_voice_chat.read(),
            password: if pass.is_empty() { None } else { Some(pass) },
        };

        is_loading.set(true);
        error.set(None);
        show_loading("Creating room...");

        spawn(async move {
            let result = session.client().create_room(&req).await;

            hide_loading();
            is_loading.set(false);

            match result {
                Ok(resp) if resp.success => {
                    let Some(room) = resp.room else {
                        error.set(Some("Server did not return a room code".to_string()));
                        return;
                    };
                    notify(format!("Room {} created!", room.room_code), Severity::Success);
                    sleep_ms(1000).await;
                    nav.push(Route::Game {
                        room_code: room.room_code,
                    });
                }
                Ok(resp) => {
                    error.set(Some(
                        resp.message
                            .unwrap_or_else(|| "Could not create the room".to_string()),
                    ));
                }
                Err(ApiError::Http { body, .. }) => {
                    error.set(Some(
                        try_response_message(&body)
                            .unwrap_or_else(|| "Could not create the room".to_string()),
                    ));
                }
                Err(err) => {
                    crate::log_error!("Create room failed: {}", err);
                    error.set(Some("Cannot reach the server. Check your connection.".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/70 flex items-center justify-center z-50",
            div { class: "bg-[#313338] rounded-lg shadow-2xl w-full max-w-md mx-4",
                // Header
                div { class: "px-6 py-4 border-b border-[#3f4147]",
                    h3 { class: "text-xl font-bold text-white", "Create a Room" }
                    p { class: "text-sm text-gray-400 mt-1",
                        "You'll get a code other players can use to join"
                    }
                }
                // Form
                form { onsubmit: handle_submit,
                    div { class: "p-6 space-y-4",
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2",
                                "Room Name"
                            }
                            input {
                                class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white placeholder-[#949ba4] focus:ring-0",
                                r#type: "text",
                                placeholder: "Friday night game",
                                value: "{name}",
                                oninput: move |e: FormEvent| {
                                    name.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        div { class: "grid grid-cols-2 gap-4",
                            div {
                                label { class: "block text-sm font-medium text-gray-300 mb-2",
                                    "Min Players"
                                }
                                input {
                                    class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white focus:ring-0",
                                    r#type: "number",
                                    min: "4",
                                    value: "{min_players}",
                                    oninput: move |e: FormEvent| min_players.set(e.value()),
                                }
                            }
                            div {
                                label { class: "block text-sm font-medium text-gray-300 mb-2",
                                    "Max Players"
                                }
                                input {
                                    class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white focus:ring-0",
                                    r#type: "number",
                                    min: "4",
                                    value: "{max_players}",
                                    oninput: move |e: FormEvent| max_players.set(e.value()),
                                }
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2",
                                "Password (optional)"
                            }
                            input {
                                class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white placeholder-[#949ba4] focus:ring-0",
                                r#type: "password",
                                placeholder: "leave empty for a public room",
                                value: "{password}",
                                oninput: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        label { class: "flex items-center gap-3 cursor-pointer",
                            input {
                                r#type: "checkbox",
                                checked: *allow_voice_chat.read(),
                                onchange: move |e: FormEvent| allow_voice_chat.set(e.checked()),
                                class: "text-indigo-500 focus:ring-indigo-500 bg-[#1e1f22] border-none rounded",
                            }
                            span { class: "text-sm text-gray-300", "Allow voice chat" }
                        }
                        if let Some(err) = error.read().as_ref() {
                            div { class: "p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                                "{err}"
                            }
                        }
                    }
                    // Footer
                    div { class: "px-6 py-4 border-t border-[#3f4147] flex justify-end gap-3",
                        button {
                            r#type: "button",
                            class: "px-4 py-2 text-gray-300 hover:text-white transition-colors",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: *is_loading.read(),
                            if *is_loading.read() {
                                "Creating..."
                            } else {
                                "Create Room"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Modal for joining an existing room by code
#[component]
pub fn JoinRoomModal(on_close: EventHandler<()>) -> Element {
    let session = use_context::<SessionContext>();
    let nav = use_navigator();

    let mut room_code = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        if *is_loading.peek() {
            return;
        }

        let code = room_code.read().trim().to_uppercase();
        if code.is_empty() {
            error.set(Some("Room code is required".to_string()));
            return;
        }

        let pass = password.read().trim().to_string();
        let req = JoinRoomRequest {
            room_code: code.clone(),
            password: if pass.is_empty() { None } else { Some(pass) },
        };

        is_loading.set(true);
        error.set(None);
        show_loading("Joining room...");

        spawn(async move {
            let result = session.client().join_room(&req).await;

            hide_loading();
            is_loading.set(false);

            match result {
                Ok(resp) if resp.success => {
                    notify(format!("Joining room {}...", code), Severity::Success);
                    sleep_ms(1000).await;
                    nav.push(Route::Game { room_code: code });
                }
                Ok(resp) => {
                    error.set(Some(
                        resp.message
                            .unwrap_or_else(|| "Could not join the room".to_string()),
                    ));
                }
                Err(ApiError::Http { body, .. }) => {
                    error.set(Some(
                        try_response_message(&body)
                            .unwrap_or_else(|| "Could not join the room".to_string()),
                    ));
                }
                Err(err) => {
                    crate::log_error!("Join room failed: {}", err);
                    error.set(Some("Cannot reach the server. Check your connection.".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/70 flex items-center justify-center z-50",
            div { class: "bg-[#313338] rounded-lg shadow-2xl w-full max-w-md mx-4",
                // Header
                div { class: "px-6 py-4 border-b border-[#3f4147]",
                    h3 { class: "text-xl font-bold text-white", "Join a Room" }
                    p { class: "text-sm text-gray-400 mt-1", "Enter the code you were given" }
                }
                // Form
                form { onsubmit: handle_submit,
                    div { class: "p-6 space-y-4",
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2",
                                "Room Code"
                            }
                            input {
                                class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white uppercase tracking-widest placeholder-[#949ba4] focus:ring-0",
                                r#type: "text",
                                placeholder: "ABCD",
                                value: "{room_code}",
                                oninput: move |e: FormEvent| {
                                    room_code.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2",
                                "Password (if required)"
                            }
                            input {
                                class: "w-full bg-[#1e1f22] border-none rounded p-2.5 text-white placeholder-[#949ba4] focus:ring-0",
                                r#type: "password",
                                value: "{password}",
                                oninput: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        if let Some(err) = error.read().as_ref() {
                            div { class: "p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                                "{err}"
                            }
                        }
                    }
                    // Footer
                    div { class: "px-6 py-4 border-t border-[#3f4147] flex justify-end gap-3",
                        button {
                            r#type: "button",
                            class: "px-4 py-2 text-gray-300 hover:text-white transition-colors",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: *is_loading.read(),
                            if *is_loading.read() {
                                "Joining..."
                            } else {
                                "Join Room"
                            }
                        }
                    }
                }
            }
        }
    }
}
