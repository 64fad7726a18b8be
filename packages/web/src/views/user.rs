//! User area.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::PageView;

#[component]
pub fn UserDashboard() -> Element {
    rsx! {
        PageView {
            title: "Dashboard",
            summary: "Your week at a glance.",
        }
    }
}

#[component]
pub fn UserTimesheet() -> Element {
    rsx! {
        PageView {
            title: "Timesheet",
            summary: "Record the hours you worked.",
        }
    }
}

#[component]
pub fn UserOffers() -> Element {
    rsx! {
        PageView {
            title: "My Offers",
            summary: "Offers you have received.",
        }
    }
}

#[component]
pub fn UserCalendar() -> Element {
    rsx! {
        PageView {
            title: "Calendar",
            summary: "Upcoming meetings.",
        }
    }
}

#[component]
pub fn UserProfile() -> Element {
    let auth = use_auth();
    let Some(identity) = auth().identity else {
        return rsx! {};
    };
    let phone = identity.phone.clone().unwrap_or_else(|| "Not set".to_string());
    let dob = identity.dob.clone().unwrap_or_else(|| "Not set".to_string());

    rsx! {
        PageView {
            title: "Profile",
            summary: "Your contact details.",
        }
        dl {
            class: "profile-details",
            dt { "Name" }
            dd { "{identity.display_name()}" }
            dt { "Email" }
            dd { "{identity.email}" }
            dt { "Phone" }
            dd { "{phone}" }
            dt { "Date of birth" }
            dd { "{dob}" }
        }
    }
}
