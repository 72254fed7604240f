use crate::{
    components::role_badge::RoleBadge, models::session::Session, models::session::SessionHandle,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use tracing::info;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Signed-in user's menu: profile link and logout.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let (session, dispatch) = use_store::<Session>();
    let Some(user) = session.user().cloned() else {
        return html! {};
    };

    let profile_button = {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Profile);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("header.profile")}</a></li>
        }
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            info!("signing out");
            dispatch.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Login);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <Icon icon_id={IconId::HeroiconsSolidUserCircle} class="h-6 w-6" />
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-56">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.full_name() }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                    <div><RoleBadge role={user.role} /></div>
                </li>
                <div class="divider my-0"></div>
                {profile_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
