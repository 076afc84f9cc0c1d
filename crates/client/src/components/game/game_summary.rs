//! End-of-game summary modal.

use dioxus::prelude::*;

use crate::stores::SESSION;

/// Shown once a `game_ended` event has delivered a result. Dismissing it
/// clears the stored result so the lobby view comes back.
#[component]
pub fn GameSummaryModal() -> Element {
    let result = SESSION.read().last_result.clone();
    let Some(result) = result else {
        return rsx! {};
    };

    let banner = result.winner.banner_text();

    rsx! {
        div { class: "fixed inset-0 bg-black/70 flex items-center justify-center z-50",
            div { class: "bg-[#313338] rounded-lg shadow-2xl w-full max-w-lg mx-4",
                div { class: "px-6 py-5 border-b border-[#3f4147] text-center",
                    h2 { class: "text-2xl font-bold text-white", "{banner}" }
                    p { class: "text-sm text-gray-400 mt-2",
                        "{result.rounds} rounds · {result.duration} minutes"
                    }
                }
                div { class: "p-6 space-y-4",
                    if !result.survivors.is_empty() {
                        div {
                            h3 { class: "text-sm font-bold text-gray-300 uppercase mb-2",
                                "Survivors"
                            }
                            p { class: "text-sm text-gray-100",
                                {result.survivors.join(", ")}
                            }
                        }
                    }
                    if !result.players.is_empty() {
                        div {
                            h3 { class: "text-sm font-bold text-gray-300 uppercase mb-2",
                                "Roles revealed"
                            }
                            div { class: "space-y-1.5",
                                for outcome in result.players.iter() {
                                    div {
                                        key: "{outcome.display_name}",
                                        class: "flex items-center justify-between text-sm bg-[#2b2d31] rounded px-3 py-1.5",
                                        span { class: "text-gray-200", "{outcome.display_name}" }
                                        div { class: "flex items-center gap-2",
                                            span { class: "text-gray-400",
                                                {outcome.role.display_name()}
                                            }
                                            if outcome.is_winner {
                                                span { "🏆" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "px-6 py-4 border-t border-[#3f4147] flex justify-end",
                    button {
                        class: "px-4 py-2 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg transition-colors",
                        onclick: move |_| {
                            SESSION.write().last_result = None;
                        },
                        "Back to lobby"
                    }
                }
            }
        }
    }
}
