use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Shown when a signed-in user opens an area their role does not cover.
#[function_component(ForbiddenPage)]
pub fn forbidden_page() -> Html {
    let (i18n, _) = use_translation();
    let navigator = use_navigator();

    let go_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    html! {
        <div class="flex flex-col items-center justify-center py-16 space-y-4 text-center">
            <Icon icon_id={IconId::HeroiconsOutlineNoSymbol} class="w-12 h-12 text-error" />
            <h1 class="text-3xl font-bold">{"403"}</h1>
            <p>{ i18n.t("forbidden.message") }</p>
            <div class="flex gap-2">
                <button class="btn btn-ghost" onclick={go_back}>{ i18n.t("forbidden.back") }</button>
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                    { i18n.t("nav.home") }
                </Link<MainRoute>>
            </div>
        </div>
    }
}
