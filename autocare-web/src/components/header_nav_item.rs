use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::navigation::NavigationLink;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub link: NavigationLink,
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let active_route_class = if props.current_route == Some(props.link.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<MainRoute> to={props.link.route} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              { i18n.t(props.link.name) }
          </Link<MainRoute>>
      </li>
    }
}
