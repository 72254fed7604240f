use crate::{
    api::error_message,
    components::{Alert, AlertKind, FormField, RoleBadge},
    hooks::{use_api_client, use_auth_guard},
    models::session::Session,
    pages::field_setter,
    routes::MainRoute,
    validation::{
        FieldErrors, PasswordChangeForm, ProfileForm, fields, validate_password_change,
        validate_profile,
    },
};
use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use shared::models::{ChangePasswordRequest, UpdateProfileRequest};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store_value;

/// How long a success banner stays up.
const SUCCESS_MESSAGE_MS: u32 = 3_000;

/// Show `message` in `slot`, then clear it after a few seconds. The timer
/// lives in `timer` so that leaving the page cancels it.
fn flash(
    slot: &UseStateHandle<Option<String>>,
    timer: &std::rc::Rc<std::cell::RefCell<Option<Timeout>>>,
    message: String,
) {
    slot.set(Some(message));
    let slot = slot.clone();
    let timeout = Timeout::new(SUCCESS_MESSAGE_MS, move || slot.set(None));
    *timer.borrow_mut() = Some(timeout);
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let guard = use_auth_guard();
    let session = use_store_value::<Session>();
    let current_user = session.user().cloned();

    let profile = use_state({
        let current_user = current_user.clone();
        move || {
            current_user
                .map(|user| ProfileForm {
                    first_name: user.first_name,
                    last_name: user.last_name,
                })
                .unwrap_or_default()
        }
    });
    let profile_errors = use_state(FieldErrors::default);
    let profile_error = use_state(|| None::<String>);
    let profile_success = use_state(|| None::<String>);
    let profile_timer = use_mut_ref(|| None::<Timeout>);

    let password = use_state(PasswordChangeForm::default);
    let password_errors = use_state(FieldErrors::default);
    let password_error = use_state(|| None::<String>);
    let password_success = use_state(|| None::<String>);
    let password_timer = use_mut_ref(|| None::<Timeout>);
    let busy = use_state(|| false);

    let on_profile_submit = {
        let client = client.clone();
        let guard = guard.clone();
        let profile = profile.clone();
        let errors = profile_errors.clone();
        let error = profile_error.clone();
        let success = profile_success.clone();
        let timer = profile_timer.clone();
        let busy = busy.clone();
        let saved = i18n.t("profile.saved");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !guard.require_auth(MainRoute::Login) {
                return;
            }
            let validation = validate_profile(&profile);
            let valid = validation.is_valid();
            errors.set(validation);
            if !valid {
                return;
            }

            busy.set(true);
            error.set(None);
            let request = UpdateProfileRequest {
                first_name: profile.first_name.trim().to_string(),
                last_name: profile.last_name.trim().to_string(),
            };
            let client = client.clone();
            let error = error.clone();
            let success = success.clone();
            let timer = timer.clone();
            let busy = busy.clone();
            let saved = saved.clone();
            spawn_local(async move {
                match client.update_profile(&request).await {
                    Ok(updated) => {
                        client.session().update_user(updated);
                        flash(&success, &timer, saved);
                    }
                    Err(err) => {
                        warn!(error = %err, status = ?err.status(), "profile update failed");
                        error.set(Some(error_message(&err)));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_password_submit = {
        let password = password.clone();
        let errors = password_errors.clone();
        let error = password_error.clone();
        let success = password_success.clone();
        let timer = password_timer.clone();
        let busy = busy.clone();
        let changed = i18n.t("profile.password_changed");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !guard.require_auth(MainRoute::Login) {
                return;
            }
            let validation = validate_password_change(&password);
            let valid = validation.is_valid();
            errors.set(validation);
            if !valid {
                return;
            }

            busy.set(true);
            error.set(None);
            let request = ChangePasswordRequest {
                current_password: password.current_password.clone(),
                new_password: password.new_password.clone(),
            };
            let client = client.clone();
            let password = password.clone();
            let error = error.clone();
            let success = success.clone();
            let timer = timer.clone();
            let busy = busy.clone();
            let changed = changed.clone();
            spawn_local(async move {
                match client.change_password(&request).await {
                    Ok(()) => {
                        password.set(PasswordChangeForm::default());
                        flash(&success, &timer, changed);
                    }
                    Err(err) => {
                        warn!(error = %err, status = ?err.status(), "password change failed");
                        error.set(Some(error_message(&err)));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_first_name = field_setter(&profile, &profile_errors, fields::FIRST_NAME, |form, value| {
        form.first_name = value;
    });
    let on_last_name = field_setter(&profile, &profile_errors, fields::LAST_NAME, |form, value| {
        form.last_name = value;
    });
    let on_current = field_setter(&password, &password_errors, fields::CURRENT_PASSWORD, |form, value| {
        form.current_password = value;
    });
    let on_new = field_setter(&password, &password_errors, fields::NEW_PASSWORD, |form, value| {
        form.new_password = value;
    });
    let on_confirm = field_setter(&password, &password_errors, fields::CONFIRM_PASSWORD, |form, value| {
        form.confirm_password = value;
    });

    let is_busy = *busy;
    let Some(user) = current_user else {
        return html! {};
    };

    html! {
        <div class="p-4 space-y-6 max-w-2xl mx-auto">
            <div class="flex items-center gap-3">
                <h1 class="text-2xl font-bold">{ i18n.t("profile.title") }</h1>
                <RoleBadge role={user.role} />
            </div>

            <form class="card bg-base-200 shadow-xl" onsubmit={on_profile_submit} novalidate=true>
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("profile.details") }</h2>
                    <Alert kind={AlertKind::Error} message={(*profile_error).clone()} />
                    <Alert kind={AlertKind::Success} message={(*profile_success).clone()} />
                    <FormField
                        id="email"
                        label={i18n.t("form.email")}
                        input_type="email"
                        value={user.email.clone()}
                        readonly=true
                    />
                    <FormField
                        id={fields::FIRST_NAME}
                        label={i18n.t("form.first_name")}
                        value={profile.first_name.clone()}
                        error={profile_errors.get(fields::FIRST_NAME).map(str::to_owned)}
                        oninput={on_first_name}
                    />
                    <FormField
                        id={fields::LAST_NAME}
                        label={i18n.t("form.last_name")}
                        value={profile.last_name.clone()}
                        error={profile_errors.get(fields::LAST_NAME).map(str::to_owned)}
                        oninput={on_last_name}
                    />
                    <div class="card-actions justify-end">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { i18n.t("profile.save") }
                        </button>
                    </div>
                </div>
            </form>

            <form class="card bg-base-200 shadow-xl" onsubmit={on_password_submit} novalidate=true>
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("profile.change_password") }</h2>
                    <Alert kind={AlertKind::Error} message={(*password_error).clone()} />
                    <Alert kind={AlertKind::Success} message={(*password_success).clone()} />
                    <FormField
                        id={fields::CURRENT_PASSWORD}
                        label={i18n.t("form.current_password")}
                        input_type="password"
                        value={password.current_password.clone()}
                        error={password_errors.get(fields::CURRENT_PASSWORD).map(str::to_owned)}
                        oninput={on_current}
                    />
                    <FormField
                        id={fields::NEW_PASSWORD}
                        label={i18n.t("form.new_password")}
                        input_type="password"
                        value={password.new_password.clone()}
                        error={password_errors.get(fields::NEW_PASSWORD).map(str::to_owned)}
                        oninput={on_new}
                    />
                    <FormField
                        id={fields::CONFIRM_PASSWORD}
                        label={i18n.t("form.confirm_password")}
                        input_type="password"
                        value={password.confirm_password.clone()}
                        error={password_errors.get(fields::CONFIRM_PASSWORD).map(str::to_owned)}
                        oninput={on_confirm}
                    />
                    <div class="card-actions justify-end">
                        <button class="btn btn-secondary" type="submit" disabled={is_busy}>
                            { i18n.t("profile.change_password") }
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
