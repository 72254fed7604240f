use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// `NotFoundPage` page component
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex flex-col items-center justify-center py-16 space-y-4 text-center">
            <h1 class="text-3xl font-bold">{"404"}</h1>
            <p>{ i18n.t("not_found.message") }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                { i18n.t("nav.home") }
            </Link<MainRoute>>
        </div>
    }
}
