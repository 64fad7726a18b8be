//! Role-specific navigation. Views ask here instead of branching on the role themselves.

use store::Role;

use crate::guard::AppRoute;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub route: AppRoute,
    pub label: &'static str,
}

const MARKETER_LINKS: &[NavLink] = &[
    NavLink { route: AppRoute::MarketerDashboard, label: "Dashboard" },
    NavLink { route: AppRoute::MarketerSchedule, label: "Schedule" },
    NavLink { route: AppRoute::MarketerOffers, label: "Offers" },
];

const USER_LINKS: &[NavLink] = &[
    NavLink { route: AppRoute::UserDashboard, label: "Dashboard" },
    NavLink { route: AppRoute::UserTimesheet, label: "Timesheet" },
    NavLink { route: AppRoute::UserOffers, label: "My Offers" },
    NavLink { route: AppRoute::UserCalendar, label: "Calendar" },
    NavLink { route: AppRoute::UserProfile, label: "Profile" },
];

pub fn links_for(role: Role) -> &'static [NavLink] {
    match role {
        Role::Marketer => MARKETER_LINKS,
        Role::User => USER_LINKS,
    }
}

pub fn portal_title(role: Role) -> &'static str {
    match role {
        Role::Marketer => "Marketer Portal",
        Role::User => "User Portal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_stay_in_role_area() {
        for role in [Role::Marketer, Role::User] {
            let links = links_for(role);
            assert!(!links.is_empty());
            assert!(links.iter().all(|link| link.route.area() == Some(role)));
            // First link is the landing page
            assert_eq!(links[0].route, AppRoute::home_for(role));
        }
    }

    #[test]
    fn test_every_link_is_routable() {
        for link in links_for(Role::Marketer).iter().chain(links_for(Role::User)) {
            assert_eq!(AppRoute::parse(link.route.path()), Some(link.route));
        }
    }

    #[test]
    fn test_portal_titles() {
        assert_eq!(portal_title(Role::Marketer), "Marketer Portal");
        assert_eq!(portal_title(Role::User), "User Portal");
    }
}
