use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    /// Element id; also the field name used in validation results.
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub oninput: Option<Callback<String>>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub disabled: bool,
}

/// Labelled input with its validation message underneath.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = props.oninput.clone().map(|callback| {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                callback.emit(input.value());
            }
        })
    });
    let invalid = props.error.is_some();

    html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                class={classes!("input", "input-bordered", invalid.then_some("input-error"))}
                type={props.input_type.clone()}
                value={props.value.clone()}
                min={props.min.clone()}
                readonly={props.readonly}
                disabled={props.disabled}
                aria-invalid={invalid.to_string()}
                {oninput}
            />
            if let Some(message) = &props.error {
                <label class="label">
                    <span class="label-text-alt text-error">{ message.clone() }</span>
                </label>
            }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn renders_error_under_input() {
        let rendered = yew::ServerRenderer::<FormField>::with_props(|| FormFieldProps {
            id: "email".into(),
            label: "Email".into(),
            value: "nope".into(),
            input_type: "email".into(),
            error: Some("Enter a valid email address".into()),
            oninput: None,
            min: None,
            readonly: false,
            disabled: false,
        })
        .render()
        .await;
        assert!(rendered.contains("input-error"));
        assert!(rendered.contains("Enter a valid email address"));
    }
}
