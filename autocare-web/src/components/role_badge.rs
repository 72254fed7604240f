use shared::models::Role;
use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct RoleBadgeProps {
    pub role: Role,
}

/// DaisyUI badge colour for each role.
#[must_use]
pub fn badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge-error",
        Role::Employee => "badge-info",
        Role::Customer => "badge-success",
    }
}

#[function_component(RoleBadge)]
pub fn role_badge(props: &RoleBadgeProps) -> Html {
    html! {
        <span class={classes!("badge", "badge-sm", badge_class(props.role))}>
            { props.role.label() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn each_role_has_its_own_colour() {
        let classes: HashSet<_> = Role::iter().map(badge_class).collect();
        assert_eq!(classes.len(), Role::iter().count());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod render_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn renders_role_label() {
        let rendered = yew::ServerRenderer::<RoleBadge>::with_props(|| RoleBadgeProps {
            role: Role::Employee,
        })
        .render()
        .await;
        assert!(rendered.contains("Employee"));
        assert!(rendered.contains("badge-info"));
    }
}
