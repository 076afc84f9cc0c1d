//! Landing page.

use dioxus::prelude::*;

use crate::session::SessionContext;
use crate::Route;

/// Home component that redirects based on auth state
#[component]
pub fn Home() -> Element {
    let session = use_context::<SessionContext>();
    let nav = use_navigator();

    use_effect(move || {
        if session.is_authenticated() {
            nav.push(Route::Dashboard {});
        } else {
            nav.push(Route::Login {});
        }
    });

    rsx! {
        div { class: "flex items-center justify-center min-h-screen bg-[#1e1f22] text-white",
            "Redirecting..."
        }
    }
}
