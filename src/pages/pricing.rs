use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::analytics::format_quantity;
use crate::api::ApiClient;
use crate::calendar::{month_name, predict, DemandAction, DemandQuery, Forecast, YEAR_OPTIONS};
use crate::components::{icon_bar_chart, page_shell, status_line};
use crate::config::AppConfig;
use crate::error::{ApiError, AppError};
use crate::model::Product;

const SELECT_CLASS: &str = "w-full p-3 rounded-lg border border-input bg-input text-foreground";

fn on_select(query: &UseReducerHandle<DemandQuery>, action: fn(String) -> DemandAction) -> Callback<Event> {
    let query = query.clone();
    Callback::from(move |e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        query.dispatch(action(select.value()));
    })
}

#[function_component(SmartPricingPage)]
pub fn smart_pricing_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let products = use_state(Vec::<Product>::new);
    let query = use_reducer(DemandQuery::default);
    let predicted = use_state(|| None::<Forecast>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let products = products.clone();
        let client = ApiClient::new(&config);
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match client.fetch_products().await {
                        Ok(list) => products.set(list),
                        Err(err) => log::error!("Error fetching products: {}", err),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_predict = {
        let query = query.clone();
        let predicted = predicted.clone();
        let loading = loading.clone();
        let error = error.clone();
        let client = ApiClient::new(&config);
        Callback::from(move |_| {
            if !query.is_complete() {
                return;
            }
            let snapshot = (*query).clone();
            let predicted = predicted.clone();
            let loading = loading.clone();
            let error = error.clone();
            let client = client.clone();
            error.set(None);
            loading.set(true);

            spawn_local(async move {
                match predict(&client, &snapshot).await {
                    Ok(forecast) => predicted.set(Some(forecast)),
                    Err(AppError::Api(ApiError::Rejected { message, .. })) => {
                        log::warn!("prediction rejected: {}", message);
                        error.set(Some(message));
                    }
                    Err(err) => log::error!("Prediction error: {}", err),
                }
                loading.set(false);
            });
        })
    };

    let ready = query.is_complete() && !*loading;

    html! {
        { page_shell(
            "Smart Pricing & Analytics",
            html! { <span>{ icon_bar_chart() }</span> },
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <select onchange={on_select(&query, DemandAction::Product)} class={SELECT_CLASS}>
                            <option value="" selected={query.product_id.is_none()}>{"Select Product"}</option>
                            { for products.iter().map(|p| html! {
                                <option value={p.id.to_string()} selected={query.product_id == Some(p.id)}>{ p.name.clone() }</option>
                            }) }
                        </select>

                        <select onchange={on_select(&query, DemandAction::Year)} class={SELECT_CLASS}>
                            <option value="" selected={query.year.is_none()}>{"Select Year"}</option>
                            { for YEAR_OPTIONS.map(|y| html! {
                                <option value={y.to_string()} selected={query.year == Some(y)}>{ y.to_string() }</option>
                            }) }
                        </select>

                        <select onchange={on_select(&query, DemandAction::Month)} class={SELECT_CLASS}>
                            <option value="" selected={query.month.is_none()}>{"Select Month"}</option>
                            { for (1..=12u32).map(|m| html! {
                                <option value={m.to_string()} selected={query.month == Some(m)}>{ month_name(m) }</option>
                            }) }
                        </select>

                        <select onchange={on_select(&query, DemandAction::Week)} class={SELECT_CLASS}>
                            <option value="" selected={query.week.is_none()}>{"Select Week"}</option>
                            { for query.weeks.iter().map(|w| html! {
                                <option value={w.to_string()} selected={query.week == Some(*w)}>{ format!("Week {}", w) }</option>
                            }) }
                        </select>
                    </div>

                    <button onclick={on_predict} disabled={!ready} class="px-6 py-3 bg-primary text-primary-foreground rounded-lg hover:opacity-90 disabled:opacity-50">
                        { if *loading { "Predicting..." } else { "Predict Demand" } }
                    </button>

                    { status_line((*error).as_deref(), true) }

                    {
                        match &*predicted {
                            Some(forecast) => html! {
                                <div class="p-4 bg-[#eef4f9] border-l-4 border-[#173E63] rounded-md">
                                    <h2 class="text-lg font-semibold text-[#173E63]">
                                        {"Predicted Demand: "}
                                        <span class="text-foreground">{ format_quantity(forecast.demand) }</span>
                                    </h2>
                                    <p class="text-sm text-muted-foreground mt-1">{ forecast.caption() }</p>
                                </div>
                            },
                            None => html! {},
                        }
                    }
                </>
            }
        ) }
    }
}
