//! Mobile Navigation Component
//!
//! Bottom tab bar over the signed-in pages.

use dioxus::prelude::*;

use crate::app::Route;

/// Signed-in tab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Home,
    Send,
    Activity,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Send, Tab::Activity, Tab::Profile];

    pub fn route(&self) -> Route {
        match self {
            Tab::Home => Route::Home {},
            Tab::Send => Route::SendMoney {},
            Tab::Activity => Route::Activity {},
            Tab::Profile => Route::Profile {},
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Send => "Send",
            Tab::Activity => "Activity",
            Tab::Profile => "Profile",
        }
    }

    /// Tab owning `route`, if it is a tab route.
    pub fn from_route(route: &Route) -> Option<Tab> {
        match route {
            Route::Home {} => Some(Tab::Home),
            Route::SendMoney {} => Some(Tab::Send),
            Route::Activity {} => Some(Tab::Activity),
            Route::Profile {} => Some(Tab::Profile),
            _ => None,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Current active tab
    pub current: Tab,
}

/// Mobile bottom navigation bar
///
/// Shows: Home | Send | Activity | Profile
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    rsx! {
        nav { class: "mobile-nav", "aria-label": "Main",
            for tab in Tab::ALL {
                Link {
                    to: tab.route(),
                    class: if tab == props.current { "mobile-nav-item active" } else { "mobile-nav-item" },

                    span { class: "mobile-nav-icon", {render_tab_icon(tab)} }
                    span { class: "mobile-nav-label", "{tab.display_name()}" }
                }
            }
        }
    }
}

/// Render Lucide icon for a tab
fn render_tab_icon(tab: Tab) -> Element {
    let paths = match tab {
        // Lucide house
        Tab::Home => rsx! {
            path { d: "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" }
            path { d: "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
        },
        // Lucide send
        Tab::Send => rsx! {
            path { d: "m22 2-7 20-4-9-9-4Z" }
            path { d: "M22 2 11 13" }
        },
        // Lucide activity
        Tab::Activity => rsx! {
            path { d: "M22 12h-4l-3 9L9 3l-3 9H2" }
        },
        // Lucide user
        Tab::Profile => rsx! {
            circle { cx: "12", cy: "8", r: "5" }
            path { d: "M20 21a8 8 0 0 0-16 0" }
        },
    };

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {paths}
        }
    }
}
