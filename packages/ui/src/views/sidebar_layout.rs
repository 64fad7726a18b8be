use auth::AppRoute;
use dioxus::prelude::*;

use crate::AppSidebar;

/// Shared layout for every protected view.
///
/// Platform packages provide navigation callbacks and an `Outlet` as children.
#[component]
pub fn SidebarLayoutView(
    /// Route the guard admitted.
    active: AppRoute,
    /// The router outlet for child routes.
    children: Element,
    /// Called when the user picks a sidebar link.
    on_navigate: EventHandler<AppRoute>,
    /// Called after the user signs out.
    on_signed_out: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "app-layout",
            AppSidebar {
                active: active,
                on_navigate: on_navigate,
                on_signed_out: on_signed_out,
            }
            main {
                class: "app-main",
                {children}
            }
        }
    }
}
