use auth::AppRoute;
use dioxus::prelude::*;
use store::DashboardConfig;

use views::{
    GuardedLayout, Login, MarketerDashboard, MarketerOffers, MarketerSchedule, NotFound, Root,
    UserCalendar, UserDashboard, UserOffers, UserProfile, UserTimesheet,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(GuardedLayout)]
        #[route("/marketer/dashboard")]
        MarketerDashboard {},
        #[route("/marketer/schedule")]
        MarketerSchedule {},
        #[route("/marketer/offers")]
        MarketerOffers {},
        #[route("/user/dashboard")]
        UserDashboard {},
        #[route("/user/timesheet")]
        UserTimesheet {},
        #[route("/user/offers")]
        UserOffers {},
        #[route("/user/calendar")]
        UserCalendar {},
        #[route("/user/profile")]
        UserProfile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Root => Route::Root {},
            AppRoute::Login => Route::Login {},
            AppRoute::MarketerDashboard => Route::MarketerDashboard {},
            AppRoute::MarketerSchedule => Route::MarketerSchedule {},
            AppRoute::MarketerOffers => Route::MarketerOffers {},
            AppRoute::UserDashboard => Route::UserDashboard {},
            AppRoute::UserTimesheet => Route::UserTimesheet {},
            AppRoute::UserOffers => Route::UserOffers {},
            AppRoute::UserCalendar => Route::UserCalendar {},
            AppRoute::UserProfile => Route::UserProfile {},
        }
    }
}

const CONFIG_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> DashboardConfig {
    match DashboardConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {e}", DashboardConfig::filename());
            DashboardConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        style { {ui::APP_CSS} }
        ui::AuthProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = DashboardConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.session.storage_key, "currentUser");
        assert!(!config.guard.enforce_role_areas);
    }

    #[test]
    fn test_route_paths_match_guard_table() {
        for route in AppRoute::ALL {
            assert_eq!(Route::from(route).to_string(), route.path());
        }
    }

    #[test]
    fn test_unknown_paths_fall_through_to_not_found() {
        let parsed: Route = "/marketer/users".parse().unwrap();
        assert!(matches!(parsed, Route::NotFound { .. }));
    }
}
