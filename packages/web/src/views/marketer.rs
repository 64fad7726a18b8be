//! Marketer area. Page bodies are rendered by the presentation layer; these
//! views only give each guarded route its heading.

use dioxus::prelude::*;
use ui::views::PageView;

#[component]
pub fn MarketerDashboard() -> Element {
    rsx! {
        PageView {
            title: "Dashboard",
            summary: "Overview of scheduled calls and open offers.",
        }
    }
}

#[component]
pub fn MarketerSchedule() -> Element {
    rsx! {
        PageView {
            title: "Schedule",
            summary: "Plan and review calls with your users.",
        }
    }
}

#[component]
pub fn MarketerOffers() -> Element {
    rsx! {
        PageView {
            title: "Offers",
            summary: "Offers you have sent, by status and date.",
        }
    }
}
