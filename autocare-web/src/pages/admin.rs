use crate::{
    api::error_message,
    components::{Alert, AlertKind, FormField, Loading, RoleBadge},
    hooks::{Loadable, use_api_client, use_auth_guard},
    pages::{field_setter, register::registration_request},
    routes::MainRoute,
    validation::{FieldErrors, RegistrationForm, fields, validate_registration},
};
use i18nrs::yew::use_translation;
use shared::models::{Role, UserRecord};
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const ADMINS: &[Role] = &[Role::Admin];

/// Bumped after every change to the employee list to trigger a re-fetch.
/// A reducer rather than a state value so that bumps from callbacks created
/// in the same render all count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Revision(u32);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

/// Admin dashboard: employee accounts.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let guard = use_auth_guard();
    let employees = use_state(|| None::<Result<Vec<UserRecord>, String>>);
    let revision = use_reducer(Revision::default);
    let form = use_state(RegistrationForm::default);
    let errors = use_state(FieldErrors::default);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let busy = use_state(|| false);

    {
        let client = client.clone();
        let employees = employees.clone();
        use_effect_with(*revision, move |_| {
            spawn_local(async move {
                let result: Loadable<UserRecord> =
                    Some(client.list_employees().await.map_err(|err| {
                        warn!(error = %err, status = ?err.status(), "failed to load employees");
                        error_message(&err)
                    }));
                employees.set(result);
            });
            || ()
        });
    }

    let on_toggle = {
        let client = client.clone();
        let guard = guard.clone();
        let error = error.clone();
        let revision = revision.clone();
        Callback::from(move |employee_id: i64| {
            if !guard.require_role(ADMINS, MainRoute::Login) {
                return;
            }
            let client = client.clone();
            let error = error.clone();
            let revision = revision.clone();
            spawn_local(async move {
                match client.toggle_employee_status(employee_id).await {
                    Ok(()) => {
                        info!(employee_id, "employee status toggled");
                        revision.dispatch(());
                    }
                    Err(err) => {
                        warn!(error = %err, status = ?err.status(), employee_id, "status toggle failed");
                        error.set(Some(error_message(&err)));
                    }
                }
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let error = error.clone();
        let notice = notice.clone();
        let busy = busy.clone();
        let revision = revision.clone();
        let created = i18n.t("admin.created");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !guard.require_role(ADMINS, MainRoute::Login) {
                return;
            }
            let validation = validate_registration(&form);
            let valid = validation.is_valid();
            errors.set(validation);
            if !valid {
                return;
            }

            busy.set(true);
            error.set(None);
            notice.set(None);
            let request = registration_request(&form);
            let client = client.clone();
            let form = form.clone();
            let error = error.clone();
            let notice = notice.clone();
            let busy = busy.clone();
            let revision = revision.clone();
            let created = created.clone();
            spawn_local(async move {
                match client.create_employee(&request).await {
                    Ok(()) => {
                        form.set(RegistrationForm::default());
                        notice.set(Some(created));
                        revision.dispatch(());
                    }
                    Err(err) => {
                        warn!(error = %err, status = ?err.status(), "employee creation failed");
                        error.set(Some(error_message(&err)));
                    }
                }
                busy.set(false);
            });
        })
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

    let rows = match &*employees {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <Alert kind={AlertKind::Error} message={Some(message.clone())} />
        },
        Some(Ok(list)) if list.is_empty() => html! {
            <p class="text-base-content/70">{ i18n.t("admin.no_employees") }</p>
        },
        Some(Ok(list)) => html! {
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{ i18n.t("admin.name") }</th>
                            <th>{ i18n.t("form.email") }</th>
                            <th>{ i18n.t("admin.role") }</th>
                            <th>{ i18n.t("admin.status") }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                    { for list.iter().map(|employee| {
                        let id = employee.id;
                        let onclick = {
                            let on_toggle = on_toggle.clone();
                            Callback::from(move |_: MouseEvent| on_toggle.emit(id))
                        };
                        let (status, action) = if employee.enabled {
                            (i18n.t("admin.enabled"), i18n.t("admin.disable"))
                        } else {
                            (i18n.t("admin.disabled"), i18n.t("admin.enable"))
                        };
                        html! {
                            <tr key={id}>
                                <td>{ employee.full_name() }</td>
                                <td>{ &employee.email }</td>
                                <td><RoleBadge role={employee.role} /></td>
                                <td>{ status }</td>
                                <td>
                                    <button type="button" class="btn btn-xs btn-outline" {onclick}>
                                        { action }
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                    </tbody>
                </table>
            </div>
        },
    };

    let is_busy = *busy;

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("admin.title") }</h1>
            <Alert kind={AlertKind::Error} message={(*error).clone()} />
            <Alert kind={AlertKind::Success} message={(*notice).clone()} />

            <section class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("admin.employees") }</h2>
                    { rows }
                </div>
            </section>

            <form class="card bg-base-200 shadow-xl" {onsubmit} novalidate=true>
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("admin.create") }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <FormField
                            id={fields::FIRST_NAME}
                            label={i18n.t("form.first_name")}
                            value={form.first_name.clone()}
                            error={errors.get(fields::FIRST_NAME).map(str::to_owned)}
                            oninput={on_first_name}
                        />
                        <FormField
                            id={fields::LAST_NAME}
                            label={i18n.t("form.last_name")}
                            value={form.last_name.clone()}
                            error={errors.get(fields::LAST_NAME).map(str::to_owned)}
                            oninput={on_last_name}
                        />
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
                        <FormField
                            id={fields::CONFIRM_PASSWORD}
                            label={i18n.t("form.confirm_password")}
                            input_type="password"
                            value={form.confirm_password.clone()}
                            error={errors.get(fields::CONFIRM_PASSWORD).map(str::to_owned)}
                            oninput={on_confirm}
                        />
                    </div>
                    <div class="card-actions justify-end">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { i18n.t("admin.create") }
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bump_moves_the_revision() {
        let start = Rc::new(Revision::default());
        let first = Rc::clone(&start).reduce(());
        let second = Rc::clone(&first).reduce(());

        assert_ne!(*first, *start);
        assert_ne!(*second, *first);
        assert_eq!(*second, Revision(2));
    }
}
