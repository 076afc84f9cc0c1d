//! The player's secret role card.

use dioxus::prelude::*;

use crate::stores::SESSION;

/// Shown only to the local player once the server assigns a role.
#[component]
pub fn RoleCard() -> Element {
    let state = SESSION.read();
    let Some(role) = state.role else {
        return rsx! {};
    };

    let name = role.display_name();
    let description = role.description();

    rsx! {
        div {
            class: format!("rounded-lg p-4 text-white {}", role.css_class()),
            div { class: "text-xs uppercase opacity-80 mb-1", "Your role" }
            div { class: "text-xl font-bold mb-2", "{name}" }
            p { class: "text-sm opacity-90", "{description}" }
        }
    }
}
