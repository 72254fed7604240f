//! Client-side session: bearer token plus cached profile.
//!
//! [`Session`] is a plain value so that every mutation is a single
//! replacement of the whole record; readers never observe a token without the
//! matching user or the reverse. Components reach it through a
//! [`SessionHandle`] rather than a global, which keeps tests isolated.

use crate::persistence;
use serde::{Deserialize, Serialize};
use shared::models::{Role, UserRecord};
use std::cell::RefCell;
use tracing::debug;
use yewdux::{Context, Dispatch, Store};

/// Authentication state shared by the whole app.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
    user: Option<UserRecord>,
    #[serde(skip)]
    is_loading: bool,
}

impl Session {
    /// Rebuild a session from persisted parts. A user without a token is
    /// dropped; a token without a user is kept so the guard can refetch.
    #[must_use]
    pub fn restore(token: Option<String>, user: Option<UserRecord>) -> Self {
        let token = token.filter(|value| !value.is_empty());
        let user = if token.is_some() { user } else { None };
        Self {
            token,
            user,
            is_loading: false,
        }
    }

    /// Current bearer token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Cached profile.
    #[must_use]
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    /// Role of the cached profile.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Whether an authentication check is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True iff both token and user are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Store a fresh token and its profile.
    pub fn login(&mut self, token: String, user: UserRecord) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Forget token and profile.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.is_loading = false;
    }

    /// Replace the cached profile, keeping the token. Ignored once the
    /// session has been cleared so a late response cannot resurrect it.
    pub fn update_user(&mut self, user: UserRecord) {
        if self.token.is_none() {
            debug!(user_id = user.id, "ignoring profile update for cleared session");
            return;
        }
        self.user = Some(user);
    }

    /// Mark an authentication check as started or finished.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

/// The store starts from whatever the previous page load persisted, so
/// guards never see an empty session on a reload.
impl Store for Session {
    fn new(_cx: &Context) -> Self {
        persistence::load()
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

/// Access to the live session for code outside the render tree.
pub trait SessionHandle {
    /// Copy of the current state.
    fn snapshot(&self) -> Session;
    /// See [`Session::login`].
    fn login(&self, token: String, user: UserRecord);
    /// See [`Session::logout`].
    fn logout(&self);
    /// See [`Session::update_user`].
    fn update_user(&self, user: UserRecord);
    /// See [`Session::set_loading`].
    fn set_loading(&self, loading: bool);

    /// Current bearer token.
    fn token(&self) -> Option<String> {
        self.snapshot().token().map(str::to_owned)
    }
}

/// In-memory session, used for server rendering and tests.
impl SessionHandle for RefCell<Session> {
    fn snapshot(&self) -> Session {
        self.borrow().clone()
    }

    fn login(&self, token: String, user: UserRecord) {
        self.borrow_mut().login(token, user);
    }

    fn logout(&self) {
        self.borrow_mut().logout();
    }

    fn update_user(&self, user: UserRecord) {
        self.borrow_mut().update_user(user);
    }

    fn set_loading(&self, loading: bool) {
        self.borrow_mut().set_loading(loading);
    }
}

/// The yewdux store; every change is written through to local storage.
impl SessionHandle for Dispatch<Session> {
    fn snapshot(&self) -> Session {
        (*self.get()).clone()
    }

    fn login(&self, token: String, user: UserRecord) {
        self.reduce_mut(|session| session.login(token, user));
        persistence::save(&self.get());
    }

    fn logout(&self) {
        self.reduce_mut(Session::logout);
        persistence::save(&self.get());
    }

    fn update_user(&self, user: UserRecord) {
        self.reduce_mut(|session| session.update_user(user));
        persistence::save(&self.get());
    }

    fn set_loading(&self, loading: bool) {
        self.reduce_mut(|session| session.set_loading(loading));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserRecord {
        UserRecord {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            role,
            enabled: true,
        }
    }

    fn invariant_holds(session: &Session) -> bool {
        session.is_authenticated() == (session.token().is_some() && session.user().is_some())
    }

    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_sets_both_fields() {
        let mut session = Session::default();
        session.login("abc".into(), user(Role::Customer));
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(session.role(), Some(Role::Customer));
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_clears_both_fields() {
        let mut session = Session::default();
        session.login("abc".into(), user(Role::Admin));
        session.set_loading(true);
        session.logout();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn update_user_keeps_token() {
        let mut session = Session::default();
        session.login("abc".into(), user(Role::Customer));
        let mut renamed = user(Role::Customer);
        renamed.first_name = "Augusta".into();
        session.update_user(renamed);
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(session.user().unwrap().first_name, "Augusta");
    }

    #[test]
    fn update_user_after_logout_does_not_resurrect() {
        let mut session = Session::default();
        session.login("abc".into(), user(Role::Customer));
        session.logout();
        session.update_user(user(Role::Customer));
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn invariant_holds_for_mixed_sequences() {
        let mut session = Session::default();
        let steps: [&dyn Fn(&mut Session); 6] = [
            &|s: &mut Session| s.update_user(user(Role::Employee)),
            &|s: &mut Session| s.login("t1".into(), user(Role::Customer)),
            &|s: &mut Session| s.update_user(user(Role::Admin)),
            &|s: &mut Session| s.logout(),
            &|s: &mut Session| s.update_user(user(Role::Admin)),
            &|s: &mut Session| s.login("t2".into(), user(Role::Employee)),
        ];
        for step in steps {
            step(&mut session);
            assert!(invariant_holds(&session));
        }
        assert!(session.is_authenticated());
    }

    #[test]
    fn restore_drops_user_without_token() {
        let session = Session::restore(None, Some(user(Role::Admin)));
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());

        let session = Session::restore(Some(String::new()), Some(user(Role::Admin)));
        assert!(session.token().is_none());
    }

    #[test]
    fn restore_keeps_token_without_user() {
        let session = Session::restore(Some("abc".into()), None);
        assert_eq!(session.token(), Some("abc"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn loading_flag_is_not_persisted() {
        let mut session = Session::default();
        session.login("abc".into(), user(Role::Customer));
        session.set_loading(true);
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert!(!restored.is_loading());
        assert_eq!(restored.token(), Some("abc"));
    }

    #[test]
    fn refcell_handle_mutates_in_place() {
        let handle = RefCell::new(Session::default());
        handle.login("abc".into(), user(Role::Employee));
        assert_eq!(SessionHandle::token(&handle).as_deref(), Some("abc"));
        handle.logout();
        assert!(!handle.snapshot().is_authenticated());
    }
}
