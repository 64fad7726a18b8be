//! Login page view.

use auth::AppRoute;
use dioxus::prelude::*;
use store::Role;
use ui::{use_auth, LoginForm};

use crate::Route;

/// Login page component.
///
/// Stays reachable while signed in; a link offers the way back to the dashboard.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let on_signed_in = move |role: Role| {
        nav.replace(Route::from(AppRoute::home_for(role)));
    };

    rsx! {
        div {
            class: "login-container",

            h1 { "Dashboard" }
            p { "Sign in to your account" }

            LoginForm { on_signed_in: on_signed_in }

            if let Some(identity) = auth().identity {
                p {
                    class: "page-greeting",
                    "Signed in as {identity.display_name()}. "
                    Link {
                        to: Route::from(AppRoute::home_for(identity.role)),
                        "Continue to dashboard"
                    }
                }
            }
        }
    }
}
