use crate::components::loading::Loading;
use crate::routes::{MainRoute, switch};
use yew::suspense::Suspense;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Suspense fallback={ html!{ <Loading /> } }>
            <BrowserRouter>
                <Switch<MainRoute> render={switch} />
            </BrowserRouter>
        </Suspense>
    }
}
