use crate::{
    components::{Alert, AlertKind, BookingTable, Loading},
    hooks::use_bookings,
};
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Staff dashboard listing bookings across customers.
#[function_component(EmployeePage)]
pub fn employee_page() -> Html {
    let (i18n, ..) = use_translation();
    let bookings = use_bookings();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("employee.title") }</h1>
            {
                match &*bookings {
                    None => html! { <Loading /> },
                    Some(Err(message)) => html! {
                        <Alert kind={AlertKind::Error} message={Some(message.clone())} />
                    },
                    Some(Ok(rows)) => html! { <BookingTable bookings={rows.clone()} show_customer=true /> },
                }
            }
        </div>
    }
}
