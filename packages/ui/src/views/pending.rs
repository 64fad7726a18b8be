use dioxus::prelude::*;

/// Neutral placeholder shown while the session is still loading.
#[component]
pub fn PendingView() -> Element {
    rsx! {
        div {
            class: "pending-view",
            p { "Loading..." }
        }
    }
}
