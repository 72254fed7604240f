use crate::{models::session::Session, routes::{MainRoute, dashboard_for}};
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

/// Landing page
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, _) = use_translation();
    let session = use_store_value::<Session>();
    let dashboard = session
        .is_authenticated()
        .then(|| session.role().map(dashboard_for))
        .flatten();

    html! {
        <div class="p-4 space-y-6">
            <div class="hero bg-base-200 rounded-box py-12">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-4xl font-bold">{ i18n.t("home.headline") }</h1>
                        <p class="py-6">{ i18n.t("home.tagline") }</p>
                        {
                            match dashboard {
                                Some(route) => html! {
                                    <Link<MainRoute> to={route} classes="btn btn-primary">
                                        { i18n.t("home.dashboard") }
                                    </Link<MainRoute>>
                                },
                                None => html! {
                                    <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary">
                                        { i18n.t("home.get_started") }
                                    </Link<MainRoute>>
                                },
                            }
                        }
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineCalendarDays} class="w-6 h-6" />
                            { i18n.t("home.cards.booking.title") }
                        </h2>
                        <p>{ i18n.t("home.cards.booking.description") }</p>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineWrenchScrewdriver} class="w-6 h-6" />
                            { i18n.t("home.cards.service.title") }
                        </h2>
                        <p>{ i18n.t("home.cards.service.description") }</p>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-6 h-6" />
                            { i18n.t("home.cards.centers.title") }
                        </h2>
                        <p>{ i18n.t("home.cards.centers.description") }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
