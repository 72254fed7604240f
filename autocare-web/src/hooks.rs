//! Hooks shared by pages.

use crate::api::{AutoCareClient, error_message};
use crate::guard::{Access, check_access};
use crate::models::session::Session;
use crate::routes::MainRoute;
use shared::models::{Booking, Role};
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use yew::{UseStateHandle, hook, use_effect_with, use_memo, use_state};
use yew_router::prelude::{Navigator, use_navigator};
use yewdux::prelude::{use_dispatch, use_store_value};

/// Browser API client bound to the session store. Built once per component.
#[hook]
pub fn use_api_client() -> Rc<AutoCareClient> {
    let dispatch = use_dispatch::<Session>();
    use_memo((), move |()| AutoCareClient::browser(dispatch))
}

/// On-demand access checks for individual actions.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    session: Rc<Session>,
    navigator: Option<Navigator>,
}

impl AuthGuard {
    /// Signed in at all; otherwise navigate to `redirect_to`.
    pub fn require_auth(&self, redirect_to: MainRoute) -> bool {
        self.require_role(&[], redirect_to)
    }

    /// Signed in with one of `roles` (empty admits any role); otherwise
    /// navigate to `redirect_to`.
    pub fn require_role(&self, roles: &[Role], redirect_to: MainRoute) -> bool {
        match check_access(&self.session, roles) {
            Access::Granted => true,
            denied => {
                debug!(?denied, ?redirect_to, "action denied");
                if let Some(navigator) = &self.navigator {
                    navigator.push(&redirect_to);
                }
                false
            }
        }
    }
}

/// Imperative counterpart of the route guard.
#[hook]
pub fn use_auth_guard() -> AuthGuard {
    AuthGuard {
        session: use_store_value::<Session>(),
        navigator: use_navigator(),
    }
}

/// Outcome of a list fetch: `None` while in flight, then the rows or a
/// display message.
pub type Loadable<T> = Option<Result<Vec<T>, String>>;

/// Bookings visible to the signed-in user, fetched on mount.
#[hook]
pub fn use_bookings() -> UseStateHandle<Loadable<Booking>> {
    let client = use_api_client();
    let bookings = use_state(|| None);
    {
        let bookings = bookings.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let result = client.list_bookings().await.map_err(|err| {
                    warn!(error = %err, status = ?err.status(), "failed to load bookings");
                    error_message(&err)
                });
                bookings.set(Some(result));
            });
            || ()
        });
    }
    bookings
}
