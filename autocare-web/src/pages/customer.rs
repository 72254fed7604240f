use crate::{
    components::{Alert, AlertKind, BookingTable, Loading},
    guard::{Access, check_access},
    hooks::use_bookings,
    models::session::Session,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store_value;

/// Bookings dashboard. Customers also get a way to make a new one.
#[function_component(CustomerPage)]
pub fn customer_page() -> Html {
    let (i18n, ..) = use_translation();
    let bookings = use_bookings();
    let session = use_store_value::<Session>();
    let can_book = MainRoute::CustomerBooking
        .required_roles()
        .is_some_and(|roles| check_access(&session, roles) == Access::Granted);

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ i18n.t("customer.title") }</h1>
                if can_book {
                    <Link<MainRoute> to={MainRoute::CustomerBooking} classes="btn btn-primary gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineCalendarDays} class="w-5 h-5" />
                        { i18n.t("nav.book") }
                    </Link<MainRoute>>
                }
            </div>
            {
                match &*bookings {
                    None => html! { <Loading /> },
                    Some(Err(message)) => html! {
                        <Alert kind={AlertKind::Error} message={Some(message.clone())} />
                    },
                    Some(Ok(rows)) => html! { <BookingTable bookings={rows.clone()} /> },
                }
            }
        </div>
    }
}
