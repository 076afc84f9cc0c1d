//! Room roster.

use dioxus::prelude::*;
use mafia_shared::Player;

use crate::stores::SESSION;

#[component]
pub fn PlayerList() -> Element {
    let state = SESSION.read();
    let players: Vec<Player> = state
        .room
        .as_ref()
        .map(|r| r.players.clone())
        .unwrap_or_default();
    let in_game = state.game.is_some();

    rsx! {
        div { class: "bg-[#313338] rounded-lg p-4",
            h3 { class: "text-sm font-bold text-gray-300 uppercase mb-3",
                "Players ({players.len()})"
            }
            div { class: "space-y-2",
                for player in players.iter() {
                    div {
                        key: "{player.id}",
                        class: if player.is_alive {
                            "flex items-center gap-3 p-2 rounded bg-[#2b2d31]"
                        } else {
                            "flex items-center gap-3 p-2 rounded bg-[#2b2d31] opacity-50"
                        },
                        // Avatar: image if set, first letter otherwise
                        if let Some(url) = player.avatar_url.as_ref() {
                            img {
                                class: "w-8 h-8 rounded-full object-cover",
                                src: "{url}",
                            }
                        } else {
                            div { class: "w-8 h-8 rounded-full bg-indigo-500 flex items-center justify-center text-white text-sm font-bold",
                                {player.display_name.chars().next().unwrap_or('?').to_uppercase().to_string()}
                            }
                        }
                        div { class: "flex-1 min-w-0",
                            div { class: "text-sm text-white truncate", "{player.display_name}" }
                            div { class: "text-xs text-gray-400",
                                if !player.is_alive {
                                    "💀 Eliminated"
                                } else if in_game {
                                    "Alive"
                                } else if player.is_ready {
                                    "✓ Ready"
                                } else {
                                    "Not ready"
                                }
                            }
                        }
                        span {
                            class: if player.is_online {
                                "w-2.5 h-2.5 rounded-full bg-green-500"
                            } else {
                                "w-2.5 h-2.5 rounded-full bg-gray-600"
                            },
                        }
                    }
                }
                if players.is_empty() {
                    div { class: "text-xs text-gray-500 italic", "Nobody here yet" }
                }
            }
        }
    }
}
