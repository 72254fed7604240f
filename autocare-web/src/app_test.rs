use wasm_bindgen_test::*;

use crate::components::{Alert, AlertKind, RoleBadge};
use shared::models::Role;
use yew::{Html, function_component, html};

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(StatusStrip)]
fn status_strip() -> Html {
    html! {
        <div class="status">
            <RoleBadge role={Role::Admin} />
            <Alert kind={AlertKind::Info} message={Some("Signed in".to_string())} />
        </div>
    }
}

#[wasm_bindgen_test]
async fn components_compose_without_providers() {
    let rendered = yew::ServerRenderer::<StatusStrip>::new().render().await;

    assert!(rendered.contains("<div class=\"status\">"));
    assert!(rendered.contains("Admin"));
    assert!(rendered.contains("alert-info"));
    assert!(rendered.contains("Signed in"));
}
