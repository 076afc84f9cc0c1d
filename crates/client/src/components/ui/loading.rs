//! Modal loading overlay.

use dioxus::prelude::*;

use crate::stores::notifications::LOADING;

/// Fullscreen spinner shown while a gateway request is in flight.
#[component]
pub fn LoadingOverlay() -> Element {
    let message = LOADING.read().clone();

    rsx! {
        if let Some(msg) = message {
            div { class: "fixed inset-0 bg-black/60 flex flex-col items-center justify-center z-[70]",
                div { class: "w-10 h-10 border-4 border-indigo-500 border-t-transparent rounded-full animate-spin" }
                p { class: "mt-4 text-white text-sm", "{msg}" }
            }
        }
    }
}
