use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::analytics::{category_chart, inventory_chart, monthly_sales_chart, top_products_chart};
use crate::api::ApiClient;
use crate::components::{page_shell, BarChartCard, StatCard, StatIcon};
use crate::config::AppConfig;
use crate::model::Analytics;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let analytics = use_state(|| None::<Analytics>);

    {
        let analytics = analytics.clone();
        let client = ApiClient::new(&config);
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match client.fetch_analytics().await {
                        Ok(data) => analytics.set(Some(data)),
                        Err(err) => log::error!("Failed to fetch analytics: {}", err),
                    }
                });
                || ()
            },
            (),
        );
    }

    let Some(data) = (*analytics).clone() else {
        return html! {
            <div class="text-center text-lg font-medium p-10 text-muted-foreground animate-pulse">
                {"Loading analytics..."}
            </div>
        };
    };

    let units_sold: f64 = data.top_products.iter().map(|p| p.sales).sum();
    let units_in_stock: f64 = data.inventory.iter().map(|p| p.inventory).sum();

    html! {
        { page_shell(
            "Business Dashboard",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="TOP 5 UNITS SOLD" value={units_sold} icon={StatIcon::Sales} />
                        <StatCard title="CATEGORIES" value={data.categories.len() as f64} icon={StatIcon::Categories} />
                        <StatCard title="UNITS IN STOCK" value={units_in_stock} icon={StatIcon::Stock} />
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <BarChartCard chart={top_products_chart(&data)} />
                        <BarChartCard chart={category_chart(&data)} />
                    </div>
                    <BarChartCard chart={monthly_sales_chart(&data)} />
                    <BarChartCard chart={inventory_chart(&data)} />

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h3 class="font-bold text-foreground text-lg mb-2">{"User Switching Patterns (Coming Soon)"}</h3>
                        <p class="text-sm text-muted-foreground">
                            {"Switching behavior across product categories will help predict customer preferences and churn risks."}
                        </p>
                    </div>
                </>
            }
        ) }
    }
}
