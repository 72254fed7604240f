use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// `AboutPage` page component
#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6 max-w-2xl">
            <h1 class="text-2xl font-bold">{ i18n.t("about.title") }</h1>
            <p>{ i18n.t("about.body") }</p>
        </div>
    }
}
