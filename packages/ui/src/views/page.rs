use dioxus::prelude::*;

use crate::provider::use_auth;

/// Heading and summary shared by the protected pages.
#[component]
pub fn PageView(title: String, summary: String) -> Element {
    let auth = use_auth();
    let greeting = auth()
        .identity
        .map(|identity| format!("Signed in as {}", identity.display_name()));

    rsx! {
        section {
            class: "page-view",
            h2 { class: "page-title", "{title}" }
            p { class: "page-summary", "{summary}" }
            if let Some(greeting) = greeting {
                p { class: "page-greeting", "{greeting}" }
            }
        }
    }
}
