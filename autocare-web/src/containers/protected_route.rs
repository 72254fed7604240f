use crate::{
    components::loading::Loading,
    guard::{GuardState, RedirectLatch, Resolution, resolve, state_for},
    hooks::use_api_client,
    models::session::Session,
    pages::ForbiddenPage,
    routes::MainRoute,
};
use shared::models::Role;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

/// Session identity and required roles: what a guard check depends on.
type GuardInputs = ((Option<String>, Option<Role>), Vec<Role>);

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
    /// Empty admits any signed-in user.
    #[prop_or_default]
    pub required_roles: Vec<Role>,
}

/// Renders its children only for a session that satisfies
/// `required_roles`; otherwise a loading view, a redirect to login, or a
/// 403 page.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let client = use_api_client();
    let navigator = use_navigator();
    let resolution = use_state_eq(|| None::<Resolution<GuardInputs>>);
    let latch = use_mut_ref(RedirectLatch::default);
    let identity = use_selector(|session: &Session| {
        (session.token().map(str::to_owned), session.role())
    });

    let inputs: GuardInputs = ((*identity).clone(), props.required_roles.clone());
    let current = state_for((*resolution).as_ref(), &inputs);
    // Inputs as of the latest render; a check started for older inputs is
    // dropped when it completes.
    let latest = use_mut_ref(|| inputs.clone());
    *latest.borrow_mut() = inputs.clone();

    {
        let resolution = resolution.clone();
        use_effect_with(inputs, move |inputs| {
            let inputs = inputs.clone();
            spawn_local(async move {
                let state = resolve(&client, &inputs.1).await;
                if *latest.borrow() != inputs {
                    debug!(?state, "guard inputs changed during check; discarding");
                    return;
                }
                debug!(?state, "guard settled");
                resolution.set(Some(Resolution { inputs, state }));
            });
            || ()
        });
    }

    use_effect_with(current, move |current| {
        if *current == GuardState::Unauthenticated && latch.borrow_mut().fire() {
            if let Some(navigator) = navigator {
                navigator.push(&MainRoute::Login);
            }
        }
        || ()
    });

    match current {
        GuardState::Initializing | GuardState::Unauthenticated => html! {
            <Loading message="Checking your session" />
        },
        GuardState::Forbidden => html! { <ForbiddenPage /> },
        GuardState::Authorized => html! { <>{ props.children.clone() }</> },
    }
}
