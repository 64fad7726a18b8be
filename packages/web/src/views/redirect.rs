//! Routes that never render content of their own: `/` and unmatched paths.

use auth::GuardDecision;
use dioxus::prelude::*;
use ui::use_auth;
use ui::views::PendingView;

use crate::Route;

/// Redirect `/` to the login view once the session has loaded.
#[component]
pub fn Root() -> Element {
    rsx! { Unrouted { path: "/".to_string() } }
}

/// Any path the router does not know. Fails closed to the login view.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { Unrouted { path: format!("/{}", segments.join("/")) } }
}

#[component]
fn Unrouted(path: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match auth::evaluate(&path, &auth()) {
        GuardDecision::Pending => rsx! { PendingView {} },
        GuardDecision::Redirect(target) | GuardDecision::Admit(target) => {
            nav.replace(Route::from(target));
            rsx! {}
        }
    }
}
