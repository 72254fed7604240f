use crate::{
    components::{header_nav_item::HeaderNavItem, role_badge::RoleBadge, user_dropdown::UserDropdown},
    models::session::Session,
    navigation::{AccountArea, account_area, visible_links},
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store_value;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_store_value::<Session>();
    let links = visible_links(&session);
    let account = account_area(&session);

    let render_links = || -> Html {
        html! {
            { for links.iter().map(|link| html! {
                <HeaderNavItem link={**link} current_route={props.current_route} />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft" aria-label={i18n.t("header.menu")}>
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="h-5 w-5" />
                </button>
                <ul
                tabindex="0"
                class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                { render_links() }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { render_links() }
            </ul>
            <div class="flex items-center gap-2">
                {
                    match account {
                        AccountArea::Checking => html! {
                            <span class="loading loading-spinner loading-sm" aria-label={i18n.t("header.checking")}></span>
                        },
                        AccountArea::SignedIn(role) => html! {
                            <>
                                <span class="hidden sm:inline"><RoleBadge {role} /></span>
                                <UserDropdown />
                            </>
                        },
                        AccountArea::SignedOut => html! {
                            <>
                                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                    {i18n.t("header.login")}
                                </Link<MainRoute>>
                                <Link<MainRoute> to={MainRoute::Register} classes="btn btn-ghost btn-sm hidden sm:inline-flex">
                                    {i18n.t("header.register")}
                                </Link<MainRoute>>
                            </>
                        },
                    }
                }
            </div>
        </nav>
    }
}
