//! Live vote tally for the voting phase.
//!
//! Votes are cast server-side (the server interprets chat during the
//! vote phase); the client only mirrors the running tally it is sent.

use dioxus::prelude::*;
use mafia_shared::GamePhase;

use crate::stores::SESSION;

#[component]
pub fn VotePanel() -> Element {
    let state = SESSION.read();
    let in_vote_phase = state
        .game
        .as_ref()
        .is_some_and(|g| g.phase.phase == GamePhase::Vote);

    if !in_vote_phase && state.votes.is_empty() && state.last_vote_message.is_none() {
        return rsx! {};
    }

    rsx! {
        div { class: "bg-[#313338] rounded-lg p-4",
            h3 { class: "text-sm font-bold text-gray-300 uppercase mb-3", "🗳️ Votes" }
            div { class: "space-y-1.5",
                for vote in state.votes.iter() {
                    div {
                        key: "{vote.voter_name}",
                        class: "flex items-center justify-between text-sm bg-[#2b2d31] rounded px-3 py-1.5",
                        span { class: "text-gray-200", "{vote.voter_name}" }
                        if let Some(target) = vote.target_name.as_ref() {
                            span { class: "text-red-300", "→ {target}" }
                        } else {
                            span { class: "text-gray-500 italic", "abstained" }
                        }
                    }
                }
                if state.votes.is_empty() {
                    div { class: "text-xs text-gray-500 italic", "No votes cast yet" }
                }
            }
            if let Some(msg) = state.last_vote_message.as_ref() {
                div { class: "mt-3 text-sm text-amber-300", "{msg}" }
            }
        }
    }
}
