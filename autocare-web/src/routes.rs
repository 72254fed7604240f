use crate::{
    containers::{layout::Layout, protected_route::ProtectedRoute},
    models::session::Session,
    pages::*,
};
use shared::models::Role;
use strum::EnumIter;
use tracing::debug;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

const ANY_ROLE: &[Role] = &[];
const CUSTOMERS: &[Role] = &[Role::Customer];
const STAFF: &[Role] = &[Role::Employee, Role::Admin];
const ADMINS: &[Role] = &[Role::Admin];

/// The main routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/profile")]
    Profile,
    #[at("/customer")]
    Customer,
    #[at("/customer/book")]
    CustomerBooking,
    #[at("/employee")]
    Employee,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Roles allowed to open this route; `None` for public routes and an
    /// empty set for "any signed-in user".
    #[must_use]
    pub fn required_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::Home
            | Self::About
            | Self::Contact
            | Self::Login
            | Self::Register
            | Self::NotFound => None,
            Self::Profile | Self::Customer => Some(ANY_ROLE),
            Self::CustomerBooking => Some(CUSTOMERS),
            Self::Employee => Some(STAFF),
            Self::Admin => Some(ADMINS),
        }
    }

    /// Pages that only make sense while signed out.
    #[must_use]
    pub fn is_guest_only(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

/// Landing page for a signed-in user.
#[must_use]
pub fn dashboard_for(role: Role) -> MainRoute {
    match role {
        Role::Admin => MainRoute::Admin,
        Role::Employee => MainRoute::Employee,
        Role::Customer => MainRoute::Customer,
    }
}

fn page(route: MainRoute) -> Html {
    match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::About => html! { <AboutPage /> },
        MainRoute::Contact => html! { <ContactPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Profile => html! { <ProfilePage /> },
        MainRoute::Customer => html! { <CustomerPage /> },
        MainRoute::CustomerBooking => html! { <BookingPage /> },
        MainRoute::Employee => html! { <EmployeePage /> },
        MainRoute::Admin => html! { <AdminPage /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let role = use_selector(|session: &Session| {
        if session.is_authenticated() {
            session.role()
        } else {
            None
        }
    });
    let route = props.route;

    if route.is_guest_only() {
        if let Some(role) = *role {
            return html! { <Redirect<MainRoute> to={dashboard_for(role)} /> };
        }
    }

    let content = match route.required_roles() {
        None => page(route),
        Some(roles) => html! {
            <ProtectedRoute key={route.to_path()} required_roles={roles.to_vec()}>
                { page(route) }
            </ProtectedRoute>
        },
    };

    html! {
        <Layout current_route={Some(route)}>
            { content }
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    debug!(path = %route.to_path(), "switching route");
    html! { <MainRouteView {route} /> }
}
