use auth::{links_for, portal_title, AppRoute};
use dioxus::prelude::*;

use crate::login_form::LogoutButton;
use crate::provider::use_auth;

/// Role-aware navigation sidebar.
///
/// Renders nothing until an identity is present; the guarded layout never
/// shows it to a signed-out visitor anyway.
#[component]
pub fn AppSidebar(
    /// Route currently rendered in the main panel.
    active: AppRoute,
    on_navigate: EventHandler<AppRoute>,
    on_signed_out: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let Some(identity) = auth().identity else {
        return rsx! {};
    };
    let role = identity.role;

    rsx! {
        aside {
            class: "sidebar",

            div {
                class: "sidebar-title",
                "{portal_title(role)}"
            }

            nav {
                class: "sidebar-links",
                for link in links_for(role) {
                    button {
                        key: "{link.route}",
                        class: if link.route == active { "sidebar-link active" } else { "sidebar-link" },
                        onclick: move |_| on_navigate.call(link.route),
                        "{link.label}"
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                LogoutButton {
                    class: "sidebar-link",
                    on_signed_out: on_signed_out,
                }
            }

            div {
                class: "sidebar-user",
                img {
                    class: "sidebar-user-avatar",
                    src: "{identity.avatar_or_default()}",
                    alt: "Profile",
                }
                div {
                    p { class: "sidebar-user-name", "{identity.display_name()}" }
                    p { class: "sidebar-user-email", "{identity.email}" }
                }
            }
        }
    }
}
