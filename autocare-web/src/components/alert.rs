use yew::{Html, Properties, classes, function_component, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert-error",
            Self::Success => "alert-success",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    /// Nothing renders when absent.
    #[prop_or_default]
    pub message: Option<String>,
}

/// Inline banner for a call-site error or confirmation.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let Some(message) = props.message.as_ref().filter(|m| !m.is_empty()) else {
        return html! {};
    };

    html! {
        <div class={classes!("alert", props.kind.class())} role="alert">
            <span>{ message.clone() }</span>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn renders_message_with_kind() {
        let rendered = yew::ServerRenderer::<Alert>::with_props(|| AlertProps {
            kind: AlertKind::Error,
            message: Some("Invalid email or password".into()),
        })
        .render()
        .await;
        assert!(rendered.contains("alert-error"));
        assert!(rendered.contains("Invalid email or password"));
    }

    #[wasm_bindgen_test]
    async fn renders_nothing_without_message() {
        let rendered = yew::ServerRenderer::<Alert>::with_props(|| AlertProps {
            kind: AlertKind::Success,
            message: None,
        })
        .render()
        .await;
        assert!(!rendered.contains("alert"));
    }
}
