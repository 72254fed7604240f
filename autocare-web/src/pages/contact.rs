use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6 max-w-2xl">
            <h1 class="text-2xl font-bold">{ i18n.t("contact.title") }</h1>
            <p>{ i18n.t("contact.body") }</p>
            <ul class="space-y-2">
                <li class="flex items-center gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-5 h-5" />
                    <a class="link" href="mailto:support@autocare.example">{"support@autocare.example"}</a>
                </li>
                <li class="flex items-center gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlinePhone} class="w-5 h-5" />
                    <span>{ i18n.t("contact.phone") }</span>
                </li>
            </ul>
        </div>
    }
}
