use auth::{AppRoute, GuardDecision};
use dioxus::prelude::*;
use ui::views::{PendingView, SidebarLayoutView};
use ui::{use_auth, use_session};

use crate::Route;

/// Layout wrapping every protected route. Re-evaluates the guard on each render.
#[component]
pub fn GuardedLayout() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let decision = auth::evaluate_with(session.policy(), &route.to_string(), &auth());

    match decision {
        GuardDecision::Pending => rsx! { PendingView {} },
        GuardDecision::Redirect(target) => {
            nav.replace(Route::from(target));
            rsx! {}
        }
        GuardDecision::Admit(active) => {
            let navigate = move |target: AppRoute| {
                nav.push(Route::from(target));
            };
            let signed_out = move |_: ()| {
                nav.replace(Route::Login {});
            };

            rsx! {
                SidebarLayoutView {
                    active: active,
                    on_navigate: navigate,
                    on_signed_out: signed_out,
                    Outlet::<Route> {}
                }
            }
        }
    }
}
