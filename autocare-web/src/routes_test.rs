//! Tests for the routing system
//!
//! Validates the route table, per-route role policy and dashboard targets.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, dashboard_for};
    use shared::models::Role;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests that every route parses back from its own path
    #[test]
    fn test_paths_round_trip() {
        for route in MainRoute::iter() {
            assert_eq!(MainRoute::recognize(&route.to_path()), Some(route), "{route:?}");
        }
    }

    /// Tests the public paths
    #[test]
    fn test_public_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::About.to_path(), "/about");
        assert_eq!(MainRoute::Contact.to_path(), "/contact");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Register.to_path(), "/register");
    }

    /// Tests that unknown paths fall through to the not-found page
    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            MainRoute::recognize("/definitely/not/here"),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests the booking path nests under the customer area
    #[test]
    fn test_booking_path() {
        assert_eq!(
            MainRoute::recognize("/customer/book"),
            Some(MainRoute::CustomerBooking)
        );
        assert_eq!(MainRoute::recognize("/customer"), Some(MainRoute::Customer));
    }

    /// Tests the role policy of protected routes
    #[test]
    fn test_required_roles() {
        assert_eq!(MainRoute::Profile.required_roles(), Some(&[][..]));
        assert_eq!(MainRoute::Customer.required_roles(), Some(&[][..]));
        assert_eq!(
            MainRoute::CustomerBooking.required_roles(),
            Some(&[Role::Customer][..])
        );
        assert_eq!(
            MainRoute::Employee.required_roles(),
            Some(&[Role::Employee, Role::Admin][..])
        );
        assert_eq!(MainRoute::Admin.required_roles(), Some(&[Role::Admin][..]));
    }

    /// Tests that public routes carry no policy
    #[test]
    fn test_public_routes_are_unguarded() {
        for route in [
            MainRoute::Home,
            MainRoute::About,
            MainRoute::Contact,
            MainRoute::Login,
            MainRoute::Register,
            MainRoute::NotFound,
        ] {
            assert!(route.required_roles().is_none(), "{route:?}");
        }
    }

    /// Tests guest-only routes
    #[test]
    fn test_guest_only_routes() {
        let guest_only: Vec<_> = MainRoute::iter().filter(|r| r.is_guest_only()).collect();
        assert_eq!(guest_only, vec![MainRoute::Login, MainRoute::Register]);
    }

    /// Tests each role lands on a dashboard it may open
    #[test]
    fn test_dashboard_for_role() {
        assert_eq!(dashboard_for(Role::Admin), MainRoute::Admin);
        assert_eq!(dashboard_for(Role::Employee), MainRoute::Employee);
        assert_eq!(dashboard_for(Role::Customer), MainRoute::Customer);

        for role in Role::iter() {
            let required = dashboard_for(role).required_roles().unwrap_or_default();
            assert!(required.contains(&role), "{role:?}");
        }
    }
}
