//! # Route guard
//!
//! Decides, for every navigation, whether the requested view may render. The
//! guard keeps no state of its own: [`evaluate`] is a pure function of the
//! requested path and the current [`Session`].
//!
//! | Session | Path | Decision |
//! |---------|------|----------|
//! | loading | any | [`GuardDecision::Pending`] |
//! | any | `/login` | admit (also when already signed in) |
//! | any | `/`, unknown | redirect to `/login` |
//! | signed out | protected | redirect to `/login` |
//! | signed in | protected | admit |
//!
//! The requested path is not remembered across the redirect.
//!
//! Role areas (`/marketer/*`, `/user/*`) are open to any signed-in identity
//! unless [`GuardPolicy::enforce_role_areas`] is set, in which case an identity
//! entering the other role's area is sent to its own dashboard.

use std::fmt;

use store::{GuardConfig, Role};

use crate::session::Session;

/// Every path the dashboard routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    MarketerDashboard,
    MarketerSchedule,
    MarketerOffers,
    UserDashboard,
    UserTimesheet,
    UserOffers,
    UserCalendar,
    UserProfile,
}

impl AppRoute {
    pub const ALL: [AppRoute; 10] = [
        AppRoute::Root,
        AppRoute::Login,
        AppRoute::MarketerDashboard,
        AppRoute::MarketerSchedule,
        AppRoute::MarketerOffers,
        AppRoute::UserDashboard,
        AppRoute::UserTimesheet,
        AppRoute::UserOffers,
        AppRoute::UserCalendar,
        AppRoute::UserProfile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Root => "/",
            AppRoute::Login => "/login",
            AppRoute::MarketerDashboard => "/marketer/dashboard",
            AppRoute::MarketerSchedule => "/marketer/schedule",
            AppRoute::MarketerOffers => "/marketer/offers",
            AppRoute::UserDashboard => "/user/dashboard",
            AppRoute::UserTimesheet => "/user/timesheet",
            AppRoute::UserOffers => "/user/offers",
            AppRoute::UserCalendar => "/user/calendar",
            AppRoute::UserProfile => "/user/profile",
        }
    }

    /// Match a browser path. Query string, fragment and trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// The role area a route belongs to; `None` for public routes.
    pub fn area(&self) -> Option<Role> {
        match self {
            AppRoute::Root | AppRoute::Login => None,
            AppRoute::MarketerDashboard | AppRoute::MarketerSchedule | AppRoute::MarketerOffers => {
                Some(Role::Marketer)
            }
            AppRoute::UserDashboard
            | AppRoute::UserTimesheet
            | AppRoute::UserOffers
            | AppRoute::UserCalendar
            | AppRoute::UserProfile => Some(Role::User),
        }
    }

    pub fn is_protected(&self) -> bool {
        self.area().is_some()
    }

    /// Landing page after sign-in.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Marketer => AppRoute::MarketerDashboard,
            Role::User => AppRoute::UserDashboard,
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading; render a neutral placeholder and do not redirect.
    Pending,
    /// Navigate here instead.
    Redirect(AppRoute),
    /// Render the requested route.
    Admit(AppRoute),
}

/// Optional tightening of the default guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardPolicy {
    pub enforce_role_areas: bool,
}

impl From<&GuardConfig> for GuardPolicy {
    fn from(config: &GuardConfig) -> Self {
        Self {
            enforce_role_areas: config.enforce_role_areas,
        }
    }
}

/// Evaluate a navigation with the default policy.
pub fn evaluate(path: &str, session: &Session) -> GuardDecision {
    evaluate_with(GuardPolicy::default(), path, session)
}

pub fn evaluate_with(policy: GuardPolicy, path: &str, session: &Session) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }

    let decision = match AppRoute::parse(path) {
        Some(AppRoute::Login) => GuardDecision::Admit(AppRoute::Login),
        None | Some(AppRoute::Root) => GuardDecision::Redirect(AppRoute::Login),
        Some(route) => match session.role() {
            None => GuardDecision::Redirect(AppRoute::Login),
            Some(role) if policy.enforce_role_areas && route.area() != Some(role) => {
                GuardDecision::Redirect(AppRoute::home_for(role))
            }
            Some(_) => GuardDecision::Admit(route),
        },
    };
    tracing::debug!(path, ?decision, "route guard");
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::config::default_identities;

    fn marketer() -> Session {
        Session::signed_in(default_identities()[0].clone())
    }

    fn user() -> Session {
        Session::signed_in(default_identities()[1].clone())
    }

    #[test]
    fn test_parse_known_paths() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::parse(route.path()), Some(route));
        }
        assert_eq!(AppRoute::parse(""), Some(AppRoute::Root));
        assert_eq!(AppRoute::parse("/user/profile/"), Some(AppRoute::UserProfile));
        assert_eq!(AppRoute::parse("/marketer/offers?status=pending"), Some(AppRoute::MarketerOffers));
        assert_eq!(AppRoute::parse("/login#top"), Some(AppRoute::Login));
        assert_eq!(AppRoute::parse("/marketer/users"), None);
        assert_eq!(AppRoute::parse("/settings"), None);
        assert_eq!(AppRoute::parse("/User/Profile"), None);
    }

    #[test]
    fn test_loading_is_pending_for_any_path() {
        let loading = Session::default();
        for path in ["/", "/login", "/user/dashboard", "/marketer/offers", "/nope"] {
            assert_eq!(evaluate(path, &loading), GuardDecision::Pending);
        }
    }

    #[test]
    fn test_signed_out_redirects_protected_paths() {
        let session = Session::signed_out();
        for route in AppRoute::ALL.into_iter().filter(AppRoute::is_protected) {
            assert_eq!(
                evaluate(route.path(), &session),
                GuardDecision::Redirect(AppRoute::Login)
            );
        }
        assert_eq!(evaluate("/login", &session), GuardDecision::Admit(AppRoute::Login));
    }

    #[test]
    fn test_root_and_unknown_paths_redirect_to_login() {
        for session in [Session::signed_out(), marketer(), user()] {
            assert_eq!(evaluate("/", &session), GuardDecision::Redirect(AppRoute::Login));
            assert_eq!(evaluate("/settings", &session), GuardDecision::Redirect(AppRoute::Login));
            assert_eq!(evaluate("/marketer/users", &session), GuardDecision::Redirect(AppRoute::Login));
        }
    }

    #[test]
    fn test_signed_in_admits_protected_paths() {
        let session = marketer();
        assert_eq!(
            evaluate("/marketer/dashboard", &session),
            GuardDecision::Admit(AppRoute::MarketerDashboard)
        );
        // Role areas are not enforced by default
        assert_eq!(
            evaluate("/user/timesheet", &session),
            GuardDecision::Admit(AppRoute::UserTimesheet)
        );
        // Login passes through while signed in
        assert_eq!(evaluate("/login", &session), GuardDecision::Admit(AppRoute::Login));
    }

    #[test]
    fn test_enforced_role_areas_redirect_home() {
        let policy = GuardPolicy { enforce_role_areas: true };

        assert_eq!(
            evaluate_with(policy, "/user/calendar", &marketer()),
            GuardDecision::Redirect(AppRoute::MarketerDashboard)
        );
        assert_eq!(
            evaluate_with(policy, "/marketer/schedule", &user()),
            GuardDecision::Redirect(AppRoute::UserDashboard)
        );
        assert_eq!(
            evaluate_with(policy, "/user/calendar", &user()),
            GuardDecision::Admit(AppRoute::UserCalendar)
        );
        assert_eq!(
            evaluate_with(policy, "/user/calendar", &Session::signed_out()),
            GuardDecision::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_policy_from_config() {
        let config = GuardConfig { enforce_role_areas: true };
        assert!(GuardPolicy::from(&config).enforce_role_areas);
        assert_eq!(GuardPolicy::from(&GuardConfig::default()), GuardPolicy::default());
    }

    #[test]
    fn test_home_for_role() {
        assert_eq!(AppRoute::home_for(Role::Marketer).path(), "/marketer/dashboard");
        assert_eq!(AppRoute::home_for(Role::User).to_string(), "/user/dashboard");
    }
}
