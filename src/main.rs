use yew::prelude::*;

mod analytics;
mod api;
mod calendar;
mod components;
mod config;
mod error;
mod inventory;
mod invoice;
mod model;
mod pages;
mod route;
mod schemes;

use components::Layout;
use config::AppConfig;
use pages::{
    DashboardPage, ExpensesPage, HomePage, InventoryPage, SalesPage, SchemesPage,
    SmartPricingPage,
};
use route::Page;

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(Page::current);
    let config = use_state(AppConfig::default);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| {
            if page != *active_page {
                page.push_history();
                active_page.set(page);
            }
        })
    };

    let content = match *active_page {
        Page::Home => html! { <HomePage on_select={on_select.clone()} /> },
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Sales => html! { <SalesPage /> },
        Page::Inventory => html! { <InventoryPage /> },
        Page::SmartPricing => html! { <SmartPricingPage /> },
        Page::Expenses => html! { <ExpensesPage /> },
        Page::Schemes => html! { <SchemesPage /> },
    };

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <Layout active_page={*active_page} on_select={on_select}>
                { content }
            </Layout>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("starting against {}", AppConfig::default().api_base_url);
    yew::Renderer::<App>::new().render();
}
