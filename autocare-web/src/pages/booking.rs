use crate::{
    api::error_message,
    components::{Alert, AlertKind, FormField, Loading},
    hooks::use_api_client,
    routes::MainRoute,
    validation::{BookingForm, FieldErrors, fields, validate_booking},
};
use chrono::NaiveDate;
use i18nrs::yew::use_translation;
use shared::models::{
    AvailabilityResponse, BookingRequest, ServiceCenter, ServiceOffering, VehicleType,
};
use strum::IntoEnumIterator;
use tracing::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The selection an availability lookup was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AvailabilityKey {
    pub center_id: i64,
    pub service_id: i64,
    pub date: NaiveDate,
}

/// Lookup key once center, service and date are all chosen.
pub(crate) fn availability_key(form: &BookingForm) -> Option<AvailabilityKey> {
    Some(AvailabilityKey {
        center_id: form.center_id?,
        service_id: form.service_id?,
        date: form.date?,
    })
}

/// Apply a change to center, service or date. The chosen slot belongs to
/// the previous selection, so it is dropped whenever the key changes.
pub(crate) fn reselect(form: &BookingForm, change: impl FnOnce(&mut BookingForm)) -> BookingForm {
    let mut next = form.clone();
    change(&mut next);
    if (next.center_id, next.service_id, next.date) != (form.center_id, form.service_id, form.date) {
        next.time_slot = None;
    }
    next
}

/// Dates before `today` cannot be booked.
pub(crate) fn parse_booking_date(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| *date >= today)
}

/// Request body for a form that passed validation.
pub(crate) fn booking_request(form: &BookingForm) -> Option<BookingRequest> {
    Some(BookingRequest {
        center: form.center_id?,
        service: form.service_id?,
        date: form.date?,
        time_slot: form.time_slot.clone()?,
        vehicle_type: form.vehicle_type,
        license_plate: form.license_plate.trim().to_uppercase(),
    })
}

fn select_value(event: &Event) -> Option<String> {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let navigator = use_navigator();
    let form = use_state(BookingForm::default);
    let errors = use_state(FieldErrors::default);
    let error = use_state(|| None::<String>);
    let catalog = use_state(|| None::<(Vec<ServiceCenter>, Vec<ServiceOffering>)>);
    let availability = use_state(|| None::<AvailabilityResponse>);
    let availability_loading = use_state(|| false);
    let submitting = use_state(|| false);
    // Selection as of the latest render; read when a lookup completes.
    let latest_key = use_mut_ref(|| None::<AvailabilityKey>);
    *latest_key.borrow_mut() = availability_key(&form);

    {
        let client = client.clone();
        let catalog = catalog.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let (centers, services) =
                    futures::join!(client.list_centers(), client.list_services());
                match (centers, services) {
                    (Ok(centers), Ok(services)) => catalog.set(Some((centers, services))),
                    (Err(err), _) | (_, Err(err)) => {
                        warn!(error = %err, status = ?err.status(), "failed to load booking catalog");
                        catalog.set(Some((Vec::new(), Vec::new())));
                        error.set(Some(error_message(&err)));
                    }
                }
            });
            || ()
        });
    }

    {
        let client = client.clone();
        let availability = availability.clone();
        let availability_loading = availability_loading.clone();
        let error = error.clone();
        let latest_key = latest_key.clone();
        use_effect_with(availability_key(&form), move |key| {
            availability.set(None);
            if let Some(requested) = *key {
                availability_loading.set(true);
                spawn_local(async move {
                    let result = client
                        .availability(requested.center_id, requested.date, requested.service_id)
                        .await;
                    if *latest_key.borrow() != Some(requested) {
                        debug!(?requested, "discarding availability for a previous selection");
                        return;
                    }
                    match result {
                        Ok(response) => availability.set(Some(response)),
                        Err(err) => {
                            warn!(error = %err, status = ?err.status(), "availability lookup failed");
                            error.set(Some(error_message(&err)));
                        }
                    }
                    availability_loading.set(false);
                });
            } else {
                availability_loading.set(false);
            }
            || ()
        });
    }

    let on_center = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let center_id = select_value(&event).and_then(|value| value.parse().ok());
            form.set(reselect(&form, |next| next.center_id = center_id));
        })
    };
    let on_service = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let service_id = select_value(&event).and_then(|value| value.parse().ok());
            form.set(reselect(&form, |next| next.service_id = service_id));
        })
    };
    let on_date = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let date = parse_booking_date(&value, today());
            form.set(reselect(&form, |next| next.date = date));
        })
    };
    let on_slot = {
        let form = form.clone();
        Callback::from(move |slot: String| {
            let mut next = (*form).clone();
            next.time_slot = Some(slot);
            form.set(next);
        })
    };
    let on_vehicle = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(vehicle_type) = select_value(&event).and_then(|v| VehicleType::parse(&v)) {
                let mut next = (*form).clone();
                next.vehicle_type = vehicle_type;
                form.set(next);
            }
        })
    };
    let on_plate = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.license_plate = value;
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let validation = validate_booking(&form);
            let valid = validation.is_valid();
            errors.set(validation);
            let Some(request) = booking_request(&form).filter(|_| valid) else {
                return;
            };

            submitting.set(true);
            error.set(None);
            let client = client.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match client.create_booking(&request).await {
                    Ok(()) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::Customer);
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, status = ?err.status(), "booking failed");
                        error.set(Some(error_message(&err)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let Some((centers, services)) = (*catalog).clone() else {
        return html! { <Loading /> };
    };
    let selected = |current: Option<i64>, id: i64| current == Some(id);
    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(message) => html! {
                <label class="label"><span class="label-text-alt text-error">{ message.to_string() }</span></label>
            },
            None => html! {},
        }
    };

    let slots = match (&*availability, *availability_loading) {
        (_, true) => html! { <span class="loading loading-dots"></span> },
        (Some(response), false) if response.open_slots().next().is_some() => html! {
            <div class="flex flex-wrap gap-2">
            { for response.open_slots().map(|slot| {
                let time = slot.time.clone();
                let active = form.time_slot.as_deref() == Some(time.as_str());
                let onclick = {
                    let on_slot = on_slot.clone();
                    let time = time.clone();
                    Callback::from(move |_: MouseEvent| on_slot.emit(time.clone()))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("btn", "btn-sm", if active { "btn-primary" } else { "btn-outline" })}
                        {onclick}
                    >
                        { time }
                    </button>
                }
            }) }
            </div>
        },
        (Some(_), false) => html! { <p class="text-sm">{ i18n.t("booking.no_slots") }</p> },
        (None, false) => html! { <p class="text-sm text-base-content/70">{ i18n.t("booking.pick_first") }</p> },
    };

    let date_value = form
        .date
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    let is_busy = *submitting;

    html! {
        <div class="p-4 space-y-6 max-w-2xl mx-auto">
            <h1 class="text-2xl font-bold">{ i18n.t("booking.title") }</h1>
            <Alert kind={AlertKind::Error} message={(*error).clone()} />
            <form class="card bg-base-200 shadow-xl" {onsubmit} novalidate=true>
                <div class="card-body">
                    <div class="form-control">
                        <label class="label" for={fields::CENTER}>
                            <span class="label-text">{ i18n.t("booking.center") }</span>
                        </label>
                        <select id={fields::CENTER} class="select select-bordered" onchange={on_center}>
                            <option value="" selected={form.center_id.is_none()}>{ i18n.t("booking.choose") }</option>
                            { for centers.iter().map(|center| html! {
                                <option value={center.id.to_string()} selected={selected(form.center_id, center.id)}>
                                    { &center.name }
                                </option>
                            }) }
                        </select>
                        { field_error(fields::CENTER) }
                    </div>
                    <div class="form-control">
                        <label class="label" for={fields::SERVICE}>
                            <span class="label-text">{ i18n.t("booking.service") }</span>
                        </label>
                        <select id={fields::SERVICE} class="select select-bordered" onchange={on_service}>
                            <option value="" selected={form.service_id.is_none()}>{ i18n.t("booking.choose") }</option>
                            { for services.iter().map(|service| html! {
                                <option value={service.id.to_string()} selected={selected(form.service_id, service.id)}>
                                    { &service.name }
                                </option>
                            }) }
                        </select>
                        { field_error(fields::SERVICE) }
                    </div>
                    <FormField
                        id={fields::DATE}
                        label={i18n.t("booking.date")}
                        input_type="date"
                        value={date_value}
                        min={AttrValue::from(today().format(DATE_FORMAT).to_string())}
                        error={errors.get(fields::DATE).map(str::to_owned)}
                        oninput={on_date}
                    />
                    <div class="form-control">
                        <span class="label-text py-2">{ i18n.t("booking.slot") }</span>
                        { slots }
                        { field_error(fields::TIME_SLOT) }
                    </div>
                    <div class="form-control">
                        <label class="label" for="vehicleType">
                            <span class="label-text">{ i18n.t("booking.vehicle") }</span>
                        </label>
                        <select id="vehicleType" class="select select-bordered" onchange={on_vehicle}>
                            { for VehicleType::iter().map(|vehicle| html! {
                                <option value={vehicle.as_str()} selected={form.vehicle_type == vehicle}>
                                    { vehicle.label() }
                                </option>
                            }) }
                        </select>
                    </div>
                    <FormField
                        id={fields::LICENSE_PLATE}
                        label={i18n.t("booking.plate")}
                        value={form.license_plate.clone()}
                        error={errors.get(fields::LICENSE_PLATE).map(str::to_owned)}
                        oninput={on_plate}
                    />
                    <div class="card-actions justify-end">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { i18n.t("booking.submit") }
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

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, day).unwrap()
    }

    fn complete() -> BookingForm {
        BookingForm {
            center_id: Some(1),
            service_id: Some(2),
            date: Some(date(2)),
            time_slot: Some("09:00".into()),
            vehicle_type: VehicleType::Van,
            license_plate: " ab-123 ".into(),
        }
    }

    #[test]
    fn key_requires_center_service_and_date() {
        assert_eq!(
            availability_key(&complete()),
            Some(AvailabilityKey {
                center_id: 1,
                service_id: 2,
                date: date(2),
            })
        );
        let mut form = complete();
        form.service_id = None;
        assert_eq!(availability_key(&form), None);
    }

    #[test]
    fn changing_any_part_of_the_key_clears_the_slot() {
        let form = complete();
        assert!(reselect(&form, |f| f.center_id = Some(9)).time_slot.is_none());
        assert!(reselect(&form, |f| f.service_id = Some(9)).time_slot.is_none());
        assert!(reselect(&form, |f| f.date = Some(date(3))).time_slot.is_none());
        assert!(reselect(&form, |f| f.center_id = None).time_slot.is_none());
    }

    #[test]
    fn reselecting_the_same_value_keeps_the_slot() {
        let form = complete();
        let next = reselect(&form, |f| f.center_id = Some(1));
        assert_eq!(next.time_slot.as_deref(), Some("09:00"));
    }

    #[test]
    fn past_dates_are_rejected() {
        let today = date(10);
        assert_eq!(parse_booking_date("2026-11-10", today), Some(today));
        assert_eq!(parse_booking_date("2026-11-11", today), Some(date(11)));
        assert_eq!(parse_booking_date("2026-11-09", today), None);
        assert_eq!(parse_booking_date("", today), None);
        assert_eq!(parse_booking_date("11/12/2026", today), None);
    }

    #[test]
    fn request_normalizes_plate() {
        let request = booking_request(&complete()).unwrap();
        assert_eq!(request.license_plate, "AB-123");
        assert_eq!(request.vehicle_type, VehicleType::Van);
        assert_eq!(request.time_slot, "09:00");
    }

    #[test]
    fn incomplete_form_has_no_request() {
        let mut form = complete();
        form.time_slot = None;
        assert!(booking_request(&form).is_none());
    }
}
