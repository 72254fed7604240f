//! Local-storage copy of the session, read once at startup.

use crate::models::session::Session;
use gloo_storage::{LocalStorage, Storage};
use shared::models::UserRecord;
use tracing::warn;

const TOKEN_KEY: &str = "autocare.token";
const USER_KEY: &str = "autocare.user";

/// Rehydrate the session saved by the previous page load.
pub fn load() -> Session {
    let token = LocalStorage::get::<String>(TOKEN_KEY).ok();
    let user = LocalStorage::get::<UserRecord>(USER_KEY).ok();
    Session::restore(token, user)
}

/// Write the token and profile of `session`, deleting absent entries.
pub fn save(session: &Session) {
    match session.token() {
        Some(token) => {
            if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
                warn!(error = %err, "failed to persist session token");
            }
        }
        None => LocalStorage::delete(TOKEN_KEY),
    }

    match session.user() {
        Some(user) => {
            if let Err(err) = LocalStorage::set(USER_KEY, user) {
                warn!(error = %err, "failed to persist user profile");
            }
        }
        None => LocalStorage::delete(USER_KEY),
    }
}
