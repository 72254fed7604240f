use crate::{
    api::error_message,
    components::{Alert, AlertKind, FormField},
    hooks::use_api_client,
    pages::field_setter,
    routes::{MainRoute, dashboard_for},
    validation::{FieldErrors, RegistrationForm, fields, validate_registration},
};
use i18nrs::yew::use_translation;
use shared::models::RegisterRequest;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};

/// Request body for a validated registration form.
pub(crate) fn registration_request(form: &RegistrationForm) -> RegisterRequest {
    RegisterRequest {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let navigator = use_navigator();
    let form = use_state(RegistrationForm::default);
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
            let validation = validate_registration(&form);
            let valid = validation.is_valid();
            errors.set(validation);
            if !valid {
                return;
            }

            loading.set(true);
            error.set(None);
            let request = registration_request(&form);
            let client = client.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let outcome = match client.register(&request).await {
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
                        warn!(error = %err, status = ?err.status(), "registration failed");
                        error.set(Some(error_message(&err)));
                    }
                }
                loading.set(false);
            });
        })
    };

    let field = |id: &'static str,
                 label: &str,
                 input_type: &'static str,
                 value: &str,
                 oninput: Callback<String>| {
        html! {
            <FormField
                {id}
                label={i18n.t(label)}
                {input_type}
                value={value.to_string()}
                error={errors.get(id).map(str::to_owned)}
                {oninput}
            />
        }
    };

    let on_first_name =
        field_setter(&form, &errors, fields::FIRST_NAME, |form, value| form.first_name = value);
    let on_last_name =
        field_setter(&form, &errors, fields::LAST_NAME, |form, value| form.last_name = value);
    let on_email = field_setter(&form, &errors, fields::EMAIL, |form, value| form.email = value);
    let on_password =
        field_setter(&form, &errors, fields::PASSWORD, |form, value| form.password = value);
    let on_confirm = field_setter(&form, &errors, fields::CONFIRM_PASSWORD, |form, value| {
        form.confirm_password = value;
    });

    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{ i18n.t("register.title") }</h2>
                    <Alert kind={AlertKind::Error} message={(*error).clone()} />
                    { field(fields::FIRST_NAME, "form.first_name", "text", &form.first_name, on_first_name) }
                    { field(fields::LAST_NAME, "form.last_name", "text", &form.last_name, on_last_name) }
                    { field(fields::EMAIL, "form.email", "email", &form.email, on_email) }
                    { field(fields::PASSWORD, "form.password", "password", &form.password, on_password) }
                    { field(fields::CONFIRM_PASSWORD, "form.confirm_password", "password", &form.confirm_password, on_confirm) }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { if is_busy { i18n.t("register.submitting") } else { i18n.t("register.submit") } }
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        { i18n.t("register.have_account") }
                        {" "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            { i18n.t("header.login") }
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

    #[test]
    fn request_trims_names_and_email_but_not_password() {
        let form = RegistrationForm {
            first_name: "  Ada ".into(),
            last_name: "Lovelace ".into(),
            email: " ada@example.com".into(),
            password: " Engine1843 ".into(),
            confirm_password: " Engine1843 ".into(),
        };
        let request = registration_request(&form);
        assert_eq!(request.first_name, "Ada");
        assert_eq!(request.last_name, "Lovelace");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.password, " Engine1843 ");
    }
}
