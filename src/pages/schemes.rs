use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::page_shell;
use crate::config::AppConfig;
use crate::model::Scheme;
use crate::schemes::{category_options, filter_schemes, type_options, FilterState};

#[function_component(SchemesPage)]
pub fn schemes_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let schemes = use_state(Vec::<Scheme>::new);
    let filter = use_state(FilterState::default);
    let loading = use_state(|| true);

    {
        let schemes = schemes.clone();
        let loading = loading.clone();
        let client = ApiClient::new(&config);
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match client.fetch_schemes().await {
                        Ok(list) => {
                            log::debug!("loaded {} schemes", list.len());
                            schemes.set(list);
                        }
                        Err(err) => log::error!("Failed to fetch schemes: {}", err),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                filter.set((*filter).clone().with_search(input.value()));
            }
        })
    };

    let on_category = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set((*filter).clone().with_category(select.value()));
        })
    };

    let on_type = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            filter.set((*filter).clone().with_type(select.value()));
        })
    };

    let visible = filter_schemes(&schemes, &filter);
    let categories = category_options(&schemes);
    let types = type_options(&schemes);

    html! {
        { page_shell(
            "Government Schemes for MSMEs",
            html! {},
            html! {
                <>
                    <p class="text-sm text-muted-foreground">
                        {"Filter and explore government schemes tailored to support small businesses and supermarkets."}
                    </p>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <div class="flex flex-col gap-1">
                            <label class="text-sm font-medium text-foreground">{"Search Schemes"}</label>
                            <input
                                type="text"
                                placeholder="Search by name or description..."
                                value={filter.search_term.clone()}
                                oninput={on_search}
                                class="px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            />
                        </div>
                        <div class="flex flex-col gap-1">
                            <label class="text-sm font-medium text-foreground">{"Filter by Category"}</label>
                            <select onchange={on_category} class="px-4 py-2 bg-input border border-input rounded-lg text-foreground">
                                { for categories.iter().map(|c| html! {
                                    <option value={c.clone()} selected={*c == filter.selected_category}>{ c.clone() }</option>
                                }) }
                            </select>
                        </div>
                        <div class="flex flex-col gap-1">
                            <label class="text-sm font-medium text-foreground">{"Filter by Type"}</label>
                            <select onchange={on_type} class="px-4 py-2 bg-input border border-input rounded-lg text-foreground">
                                { for types.iter().map(|t| html! {
                                    <option value={t.clone()} selected={*t == filter.selected_type}>{ t.clone() }</option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        { if *loading {
                            html! { <p class="text-muted-foreground col-span-full">{"Loading..."}</p> }
                        } else if visible.is_empty() {
                            html! { <p class="text-muted-foreground col-span-full">{"No schemes match your filters."}</p> }
                        } else {
                            html! {
                                <>
                                    { for visible.iter().enumerate().map(|(idx, scheme)| scheme_card(idx, scheme)) }
                                </>
                            }
                        }}
                    </div>
                </>
            }
        ) }
    }
}

fn scheme_card(idx: usize, scheme: &Scheme) -> Html {
    html! {
        <div key={idx} class="bg-card rounded-[10px] p-5 border border-border shadow-sm hover:shadow-md transition-shadow">
            <h2 class="text-lg font-semibold text-[#173E63] mb-1">
                { scheme.icon.as_ref().map(|i| format!("{} ", i)).unwrap_or_default() }
                { scheme.name.clone() }
            </h2>
            <p class="text-sm text-foreground mb-3">{ scheme.description.clone() }</p>
            <div class="flex justify-between items-center text-xs mb-2">
                <span class="bg-[#eef4f9] text-[#173E63] px-2 py-1 rounded">{ scheme.category.clone() }</span>
                <span class="bg-yellow-100 text-yellow-800 px-2 py-1 rounded">{ scheme.kind.clone() }</span>
            </div>
            <a href={scheme.link.clone()} target="_blank" rel="noopener noreferrer" class="text-sm text-primary underline font-medium">
                {"Learn More →"}
            </a>
        </div>
    }
}
