//! Route protection.
//!
//! Decides whether protected content renders, sends the visitor to the login
//! page, or shows a 403 view. This is a UX convenience only: the backends are
//! the authority on every request.

use crate::api::{AutoCareClient, error_message};
use crate::models::session::Session;
use shared::models::Role;
use tracing::{debug, info, warn};

/// Where a guarded subtree stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Still determining who the visitor is; render a loading indicator.
    Initializing,
    /// No usable session; redirect to login.
    Unauthenticated,
    /// Signed in with a role outside the required set.
    Forbidden,
    /// Render the protected content.
    Authorized,
}

/// What the guard must do next for a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardStep {
    /// Nothing to fetch; the state is final for this session.
    Settled(GuardState),
    /// A token is present but the profile is not cached.
    FetchProfile { token: String },
}

/// Outcome of an on-demand check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Unauthenticated,
    Forbidden,
}

/// `role` satisfies `required`; an empty set admits every role.
#[must_use]
pub fn role_permitted(role: Role, required: &[Role]) -> bool {
    required.is_empty() || required.contains(&role)
}

fn authorize(role: Role, required: &[Role]) -> GuardState {
    if role_permitted(role, required) {
        GuardState::Authorized
    } else {
        GuardState::Forbidden
    }
}

/// Next step for a guard mounted over `session`.
#[must_use]
pub fn next_step(session: &Session, required: &[Role]) -> GuardStep {
    match (session.token(), session.user()) {
        (None, _) => GuardStep::Settled(GuardState::Unauthenticated),
        (Some(token), None) => GuardStep::FetchProfile {
            token: token.to_string(),
        },
        (Some(_), Some(user)) => GuardStep::Settled(authorize(user.role, required)),
    }
}

/// Check against the cached session only; never fetches.
#[must_use]
pub fn check_access(session: &Session, required: &[Role]) -> Access {
    match session.role() {
        Some(role) if session.is_authenticated() => {
            if role_permitted(role, required) {
                Access::Granted
            } else {
                Access::Forbidden
            }
        }
        _ => Access::Unauthenticated,
    }
}

/// Run the guard to a terminal state, fetching the profile when only a
/// token is cached.
///
/// A profile response is applied only if the session still holds the token
/// it was requested with; otherwise the current session is evaluated as-is.
pub async fn resolve(client: &AutoCareClient, required: &[Role]) -> GuardState {
    let session = client.session();
    let token = match next_step(&session.snapshot(), required) {
        GuardStep::Settled(state) => return state,
        GuardStep::FetchProfile { token } => token,
    };

    debug!("profile not cached; fetching before rendering protected content");
    session.set_loading(true);
    let result = client.get_profile_with_token(&token).await;

    let current = session.snapshot();
    if current.token() != Some(token.as_str()) {
        debug!("session changed during profile fetch; discarding response");
        session.set_loading(false);
        return match next_step(&current, required) {
            GuardStep::Settled(state) => state,
            GuardStep::FetchProfile { .. } => GuardState::Initializing,
        };
    }

    match result {
        Ok(user) => {
            let role = user.role;
            info!(user_id = user.id, %role, "session restored");
            session.login(token, user);
            session.set_loading(false);
            authorize(role, required)
        }
        Err(err) => {
            warn!(error = %err, status = ?err.status(), reason = %error_message(&err), "profile fetch failed; signing out");
            session.logout();
            GuardState::Unauthenticated
        }
    }
}

/// A terminal guard state together with the inputs it was resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<K> {
    pub inputs: K,
    pub state: GuardState,
}

/// State to render for the `current` inputs. A resolution made for other
/// inputs (another route, another session) no longer applies, so the guard
/// is back to `Initializing` until the new check settles.
#[must_use]
pub fn state_for<K: PartialEq>(resolution: Option<&Resolution<K>>, current: &K) -> GuardState {
    match resolution {
        Some(resolution) if resolution.inputs == *current => resolution.state,
        _ => GuardState::Initializing,
    }
}

/// Lets the login redirect fire once per guard mount.
#[derive(Debug, Default)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    /// True the first time only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}
