use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(String::from("Loading"))]
    pub message: String,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full animate-fadeIn" role="status">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium flex items-center gap-2">
                    <span class="loading loading-spinner text-primary"></span>
                    <span>{"AutoCare"}</span>
                </div>
                <div class="mt-3 flex items-center">
                    <span>{ props.message.clone() }</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn renders_default_message() {
        let rendered = yew::ServerRenderer::<Loading>::new().render().await;
        assert!(rendered.contains("AutoCare"));
        assert!(rendered.contains("Loading"));
    }

    #[wasm_bindgen_test]
    async fn renders_custom_message() {
        let rendered = yew::ServerRenderer::<Loading>::with_props(|| LoadingProps {
            message: "Checking your session".into(),
        })
        .render()
        .await;
        assert!(rendered.contains("Checking your session"));
    }
}
