//! Toast stack rendered in the top-right corner.

use dioxus::prelude::*;

use crate::stores::notifications::{advance_toasts, dismiss, TOASTS};

const TICK_MS: u32 = 500;

/// Renders active toasts and ages them out on a fixed tick.
#[component]
pub fn ToastHost() -> Element {
    // One pruning loop for the whole stack; individual toasts carry
    // their own remaining ttl.
    use_future(move || async move {
        loop {
            crate::time::sleep_ms(TICK_MS).await;
            if !TOASTS.read().is_empty() {
                advance_toasts(TICK_MS as i32);
            }
        }
    });

    rsx! {
        div { class: "fixed top-4 right-4 z-[60] flex flex-col gap-2 w-80",
            for toast in TOASTS.read().iter() {
                div {
                    key: "{toast.id}",
                    class: format!(
                        "flex items-start justify-between gap-3 px-4 py-3 rounded-lg shadow-lg text-white text-sm {}",
                        toast.severity.css_class(),
                    ),
                    span { "{toast.message}" }
                    button {
                        class: "opacity-70 hover:opacity-100 font-bold",
                        onclick: {
                            let id = toast.id.clone();
                            move |_| dismiss(&id)
                        },
                        "✕"
                    }
                }
            }
        }
    }
}
