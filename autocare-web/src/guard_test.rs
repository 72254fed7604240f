//! Tests for the route guard
//!
//! Covers the state machine over every session shape, the profile fetch on
//! a cold start, and the once-per-mount redirect.

use crate::api::ApiRequest;
use crate::api_test::{PROFILE_JSON, harness, signed_in, user};
use crate::guard::{
    Access, GuardState, GuardStep, RedirectLatch, Resolution, check_access, next_step, resolve,
    role_permitted, state_for,
};
use crate::models::session::{Session, SessionHandle};
use crate::routes::MainRoute;
use futures::executor::block_on;
use shared::models::Role;
use strum::IntoEnumIterator;

fn token_only(token: &str) -> Session {
    Session::restore(Some(token.into()), None)
}

#[test]
fn no_token_is_unauthenticated_without_fetching() {
    let h = harness(Session::default());

    let state = block_on(resolve(&h.client, &[]));

    assert_eq!(state, GuardState::Unauthenticated);
    assert!(h.transport.requests.borrow().is_empty());
}

#[test]
fn token_without_user_fetches_profile_and_authorizes() {
    let h = harness(token_only("abc"));
    h.transport.reply(200, PROFILE_JSON);

    let state = block_on(resolve(&h.client, &[]));

    assert_eq!(state, GuardState::Authorized);
    let requests = h.transport.requests.borrow();
    let ApiRequest { url, bearer, .. } = &requests[0];
    assert!(url.ends_with("/users/me"));
    assert_eq!(bearer.as_deref(), Some("abc"));

    let session = h.session.snapshot();
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Customer));
    assert!(!session.is_loading());
}

#[test]
fn fetched_profile_with_wrong_role_is_forbidden() {
    let h = harness(token_only("abc"));
    h.transport.reply(200, PROFILE_JSON);

    let state = block_on(resolve(&h.client, &[Role::Admin]));

    assert_eq!(state, GuardState::Forbidden);
    assert!(h.session.snapshot().is_authenticated());
}

#[test]
fn cached_customer_on_admin_route_is_forbidden_without_redirect() {
    let h = harness(signed_in("abc", Role::Customer));

    let state = block_on(resolve(&h.client, &[Role::Admin]));

    assert_eq!(state, GuardState::Forbidden);
    assert!(h.transport.requests.borrow().is_empty());
    assert!(h.redirect.targets.borrow().is_empty());
    assert!(h.session.snapshot().is_authenticated());
}

#[test]
fn failed_profile_fetch_signs_out() {
    let h = harness(token_only("abc"));
    h.transport.reply(500, r#"{"message":"boom"}"#);

    let state = block_on(resolve(&h.client, &[]));

    assert_eq!(state, GuardState::Unauthenticated);
    let session = h.session.snapshot();
    assert!(session.token().is_none());
    assert!(!session.is_loading());
}

#[test]
fn rejected_token_signs_out_and_hard_redirects_once() {
    let h = harness(token_only("expired"));
    h.transport.reply(401, "");

    let state = block_on(resolve(&h.client, &[]));

    assert_eq!(state, GuardState::Unauthenticated);
    assert!(h.session.snapshot().token().is_none());
    assert_eq!(h.redirect.targets.borrow().len(), 1);
}

#[test]
fn logout_during_fetch_is_not_undone_by_late_profile() {
    let h = harness(token_only("abc"));
    let session = h.session.clone();
    h.transport
        .while_in_flight(move || session.logout())
        .reply(200, PROFILE_JSON);

    let state = block_on(resolve(&h.client, &[]));

    assert_eq!(state, GuardState::Unauthenticated);
    let session = h.session.snapshot();
    assert!(session.token().is_none());
    assert!(session.user().is_none());
}

#[test]
fn relogin_during_fetch_keeps_the_newer_session() {
    let h = harness(token_only("old"));
    let session = h.session.clone();
    h.transport
        .while_in_flight(move || session.login("new".into(), user(Role::Admin)))
        .reply(200, PROFILE_JSON);

    let state = block_on(resolve(&h.client, &[Role::Admin]));

    assert_eq!(state, GuardState::Authorized);
    let session = h.session.snapshot();
    assert_eq!(session.token(), Some("new"));
    assert_eq!(session.role(), Some(Role::Admin));
}

#[test]
fn resolving_twice_reaches_the_same_state() {
    for (session, required) in [
        (Session::default(), vec![]),
        (signed_in("abc", Role::Customer), vec![Role::Admin]),
        (signed_in("abc", Role::Employee), vec![Role::Employee, Role::Admin]),
        (token_only("abc"), vec![]),
    ] {
        let h = harness(session);
        h.transport.reply(200, PROFILE_JSON);

        let first = block_on(resolve(&h.client, &required));
        let second = block_on(resolve(&h.client, &required));

        assert_eq!(first, second);
    }
}

#[test]
fn next_step_covers_every_session_shape() {
    assert_eq!(
        next_step(&Session::default(), &[]),
        GuardStep::Settled(GuardState::Unauthenticated)
    );
    assert_eq!(
        next_step(&token_only("abc"), &[Role::Admin]),
        GuardStep::FetchProfile {
            token: "abc".into()
        }
    );
    assert_eq!(
        next_step(&signed_in("abc", Role::Admin), &[Role::Admin]),
        GuardStep::Settled(GuardState::Authorized)
    );
}

#[test]
fn role_matrix() {
    let employee_area = [Role::Employee, Role::Admin];
    assert!(role_permitted(Role::Customer, &[]));
    assert!(role_permitted(Role::Admin, &employee_area));
    assert!(role_permitted(Role::Employee, &employee_area));
    assert!(!role_permitted(Role::Customer, &employee_area));
    assert!(!role_permitted(Role::Employee, &[Role::Admin]));
}

#[test]
fn check_access_uses_cached_session_only() {
    assert_eq!(
        check_access(&Session::default(), &[]),
        Access::Unauthenticated
    );
    assert_eq!(check_access(&token_only("abc"), &[]), Access::Unauthenticated);
    assert_eq!(
        check_access(&signed_in("abc", Role::Customer), &[Role::Admin]),
        Access::Forbidden
    );
    assert_eq!(
        check_access(&signed_in("abc", Role::Admin), &[Role::Admin]),
        Access::Granted
    );
}

#[test]
fn redirect_latch_fires_once() {
    let mut latch = RedirectLatch::default();
    assert!(latch.fire());
    assert!(!latch.fire());
    assert!(!latch.fire());
}

#[test]
fn customer_dashboard_admits_every_signed_in_role() {
    let required = MainRoute::Customer.required_roles().unwrap_or_default();
    for role in Role::iter() {
        assert_eq!(check_access(&signed_in("abc", role), required), Access::Granted, "{role}");
    }
    assert_eq!(check_access(&Session::default(), required), Access::Unauthenticated);

    let booking = MainRoute::CustomerBooking.required_roles().unwrap_or_default();
    assert_eq!(check_access(&signed_in("abc", Role::Admin), booking), Access::Forbidden);
}

type Inputs = (Option<&'static str>, Option<Role>, MainRoute);

#[test]
fn resolution_for_another_route_renders_initializing() {
    let profile: Inputs = (Some("abc"), Some(Role::Employee), MainRoute::Profile);
    let admin: Inputs = (Some("abc"), Some(Role::Employee), MainRoute::Admin);
    let settled = Resolution {
        inputs: profile,
        state: GuardState::Authorized,
    };

    assert_eq!(state_for(Some(&settled), &profile), GuardState::Authorized);
    assert_eq!(state_for(Some(&settled), &admin), GuardState::Initializing);
}

#[test]
fn stale_forbidden_does_not_flash_over_a_permitted_route() {
    let admin: Inputs = (Some("abc"), Some(Role::Customer), MainRoute::Admin);
    let profile: Inputs = (Some("abc"), Some(Role::Customer), MainRoute::Profile);
    let settled = Resolution {
        inputs: admin,
        state: GuardState::Forbidden,
    };

    assert_eq!(state_for(Some(&settled), &profile), GuardState::Initializing);
}

#[test]
fn session_change_invalidates_the_resolution() {
    let before: Inputs = (Some("abc"), Some(Role::Admin), MainRoute::Admin);
    let after: Inputs = (None, None, MainRoute::Admin);
    let settled = Resolution {
        inputs: before,
        state: GuardState::Authorized,
    };

    assert_eq!(state_for(Some(&settled), &after), GuardState::Initializing);
    assert_eq!(state_for::<Inputs>(None, &before), GuardState::Initializing);
}
