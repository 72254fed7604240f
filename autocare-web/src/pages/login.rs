use crate::{
    api::{ApiError, error_message},
    components::{Alert, AlertKind, FormField},
    hooks::use_api_client,
    pages::field_setter,
    routes::{MainRoute, dashboard_for},
    validation::{FieldErrors, LoginForm, fields, validate_login},
};
use i18nrs::yew::use_translation;
use shared::models::LoginRequest;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Display text for a failed login attempt.
pub(crate) fn login_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized { .. } => INVALID_CREDENTIALS.to_string(),
        other => error_message(other),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);
    let errors = use_state(FieldErrors::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let validation = validate_login(&form);
            let valid = validation.is_valid();
            errors.set(validation);
            if !valid {
                return;
            }

            loading.set(true);
            error.set(None);
            let request = LoginRequest {
                email: form.email.trim().to_string(),
                password: form.password.clone(),
            };
            let client = client.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let outcome = match client.login(&request).await {
                    Ok(auth) => client.establish_session(auth.access_token).await,
                    Err(err) => Err(err),
                };
                match outcome {
                    Ok(user) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&dashboard_for(user.role));
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, status = ?err.status(), "login failed");
                        error.set(Some(login_failure_message(&err)));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_email = field_setter(&form, &errors, fields::EMAIL, |form, value| form.email = value);
    let on_password =
        field_setter(&form, &errors, fields::PASSWORD, |form, value| form.password = value);

    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                    <Alert kind={AlertKind::Error} message={(*error).clone()} />
                    <FormField
                        id={fields::EMAIL}
                        label={i18n.t("form.email")}
                        input_type="email"
                        value={form.email.clone()}
                        error={errors.get(fields::EMAIL).map(str::to_owned)}
                        oninput={on_email}
                    />
                    <FormField
                        id={fields::PASSWORD}
                        label={i18n.t("form.password")}
                        input_type="password"
                        value={form.password.clone()}
                        error={errors.get(fields::PASSWORD).map(str::to_owned)}
                        oninput={on_password}
                    />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") } }
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        { i18n.t("login.no_account") }
                        {" "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            { i18n.t("header.register") }
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GENERIC_ERROR_MESSAGE;

    #[test]
    fn unauthorized_login_reads_as_bad_credentials() {
        let err = ApiError::Unauthorized {
            message: Some("Bad credentials".into()),
        };
        assert_eq!(login_failure_message(&err), INVALID_CREDENTIALS);
    }

    #[test]
    fn other_failures_use_normalized_message() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(login_failure_message(&err), GENERIC_ERROR_MESSAGE);

        let err = ApiError::Forbidden {
            message: Some("Account disabled".into()),
        };
        assert_eq!(login_failure_message(&err), "Account disabled");
    }
}
