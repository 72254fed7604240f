//! Role-aware navigation links.

use crate::models::session::Session;
use crate::routes::MainRoute;
use shared::models::Role;

/// One header entry. `required_roles` empty means visible to everyone,
/// signed in or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationLink {
    /// Translation key of the label.
    pub name: &'static str,
    pub route: MainRoute,
    pub required_roles: &'static [Role],
}

const EVERY_ROLE: &[Role] = &[Role::Customer, Role::Employee, Role::Admin];

/// All links, in display order.
pub const NAVIGATION_LINKS: &[NavigationLink] = &[
    NavigationLink {
        name: "nav.home",
        route: MainRoute::Home,
        required_roles: &[],
    },
    NavigationLink {
        name: "nav.about",
        route: MainRoute::About,
        required_roles: &[],
    },
    NavigationLink {
        name: "nav.contact",
        route: MainRoute::Contact,
        required_roles: &[],
    },
    NavigationLink {
        name: "nav.bookings",
        route: MainRoute::Customer,
        required_roles: EVERY_ROLE,
    },
    NavigationLink {
        name: "nav.book",
        route: MainRoute::CustomerBooking,
        required_roles: &[Role::Customer],
    },
    NavigationLink {
        name: "nav.employee",
        route: MainRoute::Employee,
        required_roles: &[Role::Employee, Role::Admin],
    },
    NavigationLink {
        name: "nav.admin",
        route: MainRoute::Admin,
        required_roles: &[Role::Admin],
    },
    NavigationLink {
        name: "nav.profile",
        route: MainRoute::Profile,
        required_roles: EVERY_ROLE,
    },
];

/// Links shown to a visitor with `role` (`None` when signed out).
#[must_use]
pub fn links_for(role: Option<Role>) -> Vec<&'static NavigationLink> {
    NAVIGATION_LINKS
        .iter()
        .filter(|link| {
            link.required_roles.is_empty()
                || role.is_some_and(|role| link.required_roles.contains(&role))
        })
        .collect()
}

/// Links for the current session. A token without a cached profile counts
/// as signed out.
#[must_use]
pub fn visible_links(session: &Session) -> Vec<&'static NavigationLink> {
    let role = if session.is_authenticated() {
        session.role()
    } else {
        None
    };
    links_for(role)
}

/// What the header shows on the account side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountArea {
    /// A profile fetch for a stored token is in flight.
    Checking,
    SignedOut,
    SignedIn(Role),
}

/// Account state of `session` for the header.
#[must_use]
pub fn account_area(session: &Session) -> AccountArea {
    match session.role() {
        Some(role) if session.is_authenticated() => AccountArea::SignedIn(role),
        _ if session.is_loading() => AccountArea::Checking,
        _ => AccountArea::SignedOut,
    }
}
