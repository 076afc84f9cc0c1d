//! In-room view: lobby controls, phase banner, chat and votes.

use dioxus::prelude::*;
use mafia_shared::{try_response_message, ApiError, Severity};

use crate::components::game::{
    ChatFeed, GameSummaryModal, PhaseBanner, PlayerList, RoleCard, VotePanel,
};
use crate::session::SessionContext;
use crate::stores::{hide_loading, notify, show_loading, SESSION};
use crate::{ws, Route};

fn copy_to_clipboard(text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        crate::log_info!("room code: {}", text);
    }
}

#[component]
pub fn Game(room_code: String) -> Element {
    let session = use_context::<SessionContext>();
    let nav = use_navigator();

    let mut draft = use_signal(String::new);
    let mut is_starting = use_signal(|| false);

    use_effect(move || {
        if !session.is_authenticated() {
            nav.push(Route::Login {});
        }
    });

    let state = SESSION.read();
    let room_name = state
        .room
        .as_ref()
        .map(|r| r.name.clone())
        .unwrap_or_else(|| "Waiting for room...".to_string());
    let in_game = state.game.is_some();
    let my_ready = state
        .room
        .as_ref()
        .zip(session.user_id())
        .and_then(|(room, uid)| room.players.iter().find(|p| p.user_id == uid))
        .map(|p| p.is_ready)
        .unwrap_or(false);
    drop(state);

    let connection = ws::WS_STATE.read().clone();
    let connection_label = connection.label();
    let code_for_copy = room_code.clone();

    let mut send_message = move |_| {
        let content = draft.read().trim().to_string();
        if content.is_empty() {
            return;
        }
        let Some(handle) = ws::handle() else {
            notify("Not connected to the server", Severity::Danger);
            return;
        };
        if let Err(e) = handle.send_chat(&content) {
            crate::log_error!("Chat send failed: {}", e);
            notify("Message could not be sent", Severity::Danger);
            return;
        }
        draft.set(String::new());
    };

    let toggle_ready = move |_| {
        let Some(handle) = ws::handle() else {
            notify("Not connected to the server", Severity::Danger);
            return;
        };
        if let Err(e) = handle.toggle_ready() {
            crate::log_error!("Ready toggle failed: {}", e);
        }
    };

    let start_game = move |_| {
        if *is_starting.peek() {
            return;
        }
        is_starting.set(true);
        show_loading("Starting the game...");

        spawn(async move {
            let result = session.client().start_game().await;

            hide_loading();
            is_starting.set(false);

            match result {
                Ok(resp) if resp.success => {
                    // The game_started event will flip the view.
                    notify("Here we go!", Severity::Success);
                }
                Ok(resp) => {
                    notify(
                        resp.message
                            .unwrap_or_else(|| "The game could not be started".to_string()),
                        Severity::Warning,
                    );
                }
                Err(ApiError::Http { body, .. }) => {
                    notify(
                        try_response_message(&body)
                            .unwrap_or_else(|| "The game could not be started".to_string()),
                        Severity::Danger,
                    );
                }
                Err(err) => {
                    crate::log_error!("Start game failed: {}", err);
                    notify(
                        "Cannot reach the server. Check your connection.",
                        Severity::Danger,
                    );
                }
            }
        });
    };

    rsx! {
        div { class: "min-h-screen bg-[#1e1f22] text-white flex flex-col",
            // Top bar
            div { class: "flex items-center justify-between px-6 py-3 bg-[#313338] shadow",
                div { class: "flex items-center gap-4",
                    button {
                        class: "text-gray-400 hover:text-white transition-colors",
                        onclick: move |_| {
                            nav.push(Route::Dashboard {});
                        },
                        "←"
                    }
                    div {
                        h1 { class: "font-bold", "{room_name}" }
                        button {
                            class: "text-xs text-gray-400 hover:text-indigo-300 transition-colors font-mono tracking-widest",
                            onclick: move |_| {
                                copy_to_clipboard(&code_for_copy);
                                notify("Room code copied", Severity::Info);
                            },
                            "{room_code} 📋"
                        }
                    }
                }
                div { class: "flex items-center gap-2 text-xs",
                    span {
                        class: if connection.is_connected() {
                            "w-2 h-2 rounded-full bg-green-500"
                        } else {
                            "w-2 h-2 rounded-full bg-amber-500"
                        },
                    }
                    span { class: "text-gray-400", "{connection_label}" }
                }
            }

            // Body
            div { class: "flex-1 flex gap-4 p-4 max-w-6xl w-full mx-auto min-h-0",
                // Sidebar
                div { class: "w-64 shrink-0 space-y-4",
                    PlayerList {}
                    RoleCard {}
                    VotePanel {}
                    if !in_game {
                        div { class: "space-y-2",
                            button {
                                class: if my_ready {
                                    "w-full px-4 py-2 bg-green-600 hover:bg-green-700 text-white rounded-lg transition-colors"
                                } else {
                                    "w-full px-4 py-2 bg-[#404249] hover:bg-[#4e5058] text-white rounded-lg transition-colors"
                                },
                                onclick: toggle_ready,
                                if my_ready {
                                    "✓ Ready"
                                } else {
                                    "I'm ready"
                                }
                            }
                            button {
                                class: "w-full px-4 py-2 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: *is_starting.read(),
                                onclick: start_game,
                                if *is_starting.read() {
                                    "Starting..."
                                } else {
                                    "Start Game"
                                }
                            }
                        }
                    }
                }

                // Main column
                div { class: "flex-1 flex flex-col gap-4 min-w-0",
                    PhaseBanner {}
                    div { class: "flex-1 flex flex-col bg-[#313338] rounded-lg min-h-0",
                        ChatFeed {}
                        // Input
                        form {
                            class: "flex gap-2 p-3 border-t border-[#3f4147]",
                            onsubmit: move |e: FormEvent| {
                                e.prevent_default();
                                send_message(());
                            },
                            input {
                                class: "flex-1 bg-[#1e1f22] border-none rounded p-2.5 text-white placeholder-[#949ba4] focus:ring-0",
                                r#type: "text",
                                placeholder: "Type a message...",
                                value: "{draft}",
                                oninput: move |e: FormEvent| draft.set(e.value()),
                            }
                            button {
                                r#type: "submit",
                                class: "px-4 py-2 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg transition-colors",
                                "Send"
                            }
                        }
                    }
                }
            }

            GameSummaryModal {}
        }
    }
}
