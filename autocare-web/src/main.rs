mod api;
mod app;
mod components;
mod config;
mod containers;
mod guard;
mod hooks;
mod language;
mod logging;
mod models;
mod navigation;
mod pages;
mod persistence;
mod routes;
mod validation;

#[cfg(all(test, target_arch = "wasm32"))]
mod app_test;
#[cfg(test)]
mod guard_test;
#[cfg(test)]
mod routes_test;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{DEFAULT_LANGUAGE, supported_languages};
use std::collections::HashMap;
use tracing::info;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    logging::init();
    info!(version = env!("CARGO_PKG_VERSION"), "starting AutoCare");

    Renderer::<InternationalApp>::new().render();
}
