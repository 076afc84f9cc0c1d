//! Phase banner with the countdown.

use dioxus::prelude::*;

use crate::stores::SESSION;

/// Shows the current phase, round and remaining time.
///
/// The countdown itself is driven by the store's timer task; this
/// component only renders whatever `time_left` currently is.
#[component]
pub fn PhaseBanner() -> Element {
    let state = SESSION.read();
    let Some(game) = state.game.as_ref() else {
        return rsx! {
            div { class: "rounded-lg px-6 py-4 bg-[#313338] text-gray-400 text-center",
                "Waiting for the game to start..."
            }
        };
    };

    let phase = game.phase.phase;
    let icon = phase.icon();
    let banner = phase.banner_text();

    rsx! {
        div {
            class: format!(
                "rounded-lg px-6 py-4 text-white flex items-center justify-between {}",
                phase.css_class(),
            ),
            div { class: "flex items-center gap-3",
                span { class: "text-2xl", "{icon}" }
                div {
                    div { class: "font-bold", "{banner}" }
                    div { class: "text-xs opacity-80", "Round {game.round}" }
                }
            }
            div { class: "text-right",
                div { class: "text-2xl font-mono font-bold", "{game.phase.time_left}s" }
                div { class: "text-xs opacity-80", "Time left" }
            }
        }
    }
}
