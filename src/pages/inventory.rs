use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::{ApiClient, InventoryBackend};
use crate::components::{icon_minus, icon_plus, icon_upload, page_shell, status_line};
use crate::config::AppConfig;
use crate::error::{ApiError, AppError};
use crate::inventory::{
    add_and_refresh, display_date, parse_reduce_quantity, reduce_and_refresh, BatchField,
    NewBatchForm,
};
use crate::model::InventoryBatch;

/// Rejections and bad input are shown inline; transport failures only go to the log.
fn failure_message(err: &AppError) -> Option<String> {
    match err {
        AppError::Api(ApiError::Rejected { message, .. }) => {
            log::warn!("inventory request rejected: {}", message);
            Some(err.user_message())
        }
        AppError::Api(api) => {
            log::error!("inventory request failed: {}", api);
            None
        }
        AppError::Validation(_) => Some(err.user_message()),
    }
}

#[function_component(InventoryPage)]
pub fn inventory_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let inventory = use_state(Vec::<InventoryBatch>::new);
    let form = use_state(NewBatchForm::default);
    let loading = use_state(|| false);
    let csv_file = use_state(|| None::<web_sys::File>);
    let csv_input = use_node_ref();
    let error = use_state(|| None::<String>);

    {
        let inventory = inventory.clone();
        let loading = loading.clone();
        let client = ApiClient::new(&config);
        use_effect_with_deps(
            move |_| {
                loading.set(true);
                spawn_local(async move {
                    match client.list_inventory().await {
                        Ok(list) => {
                            log::debug!("loaded {} inventory batches", list.len());
                            inventory.set(list);
                        }
                        Err(err) => log::error!("Failed to fetch inventory: {}", err),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_add = {
        let form = form.clone();
        let inventory = inventory.clone();
        let loading = loading.clone();
        let error = error.clone();
        let client = ApiClient::new(&config);
        Callback::from(move |_| {
            let form = form.clone();
            let inventory = inventory.clone();
            let loading = loading.clone();
            let error = error.clone();
            let client = client.clone();

            if let Err(err) = form.to_request() {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            loading.set(true);

            spawn_local(async move {
                match add_and_refresh(&client, &form).await {
                    Ok(listing) => {
                        form.set(NewBatchForm::default());
                        if let Some(list) = listing {
                            inventory.set(list);
                        }
                    }
                    Err(err) => error.set(failure_message(&err)),
                }
                loading.set(false);
            });
        })
    };

    let on_reduce = {
        let inventory = inventory.clone();
        let loading = loading.clone();
        let error = error.clone();
        let client = ApiClient::new(&config);
        Callback::from(move |batch_id: i64| {
            let raw = web_sys::window()
                .and_then(|w| {
                    w.prompt_with_message_and_default("Enter quantity to reduce:", "1")
                        .ok()
                })
                .flatten();
            // Cancelled or left blank: nothing to do.
            let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
                return;
            };
            if let Err(err) = parse_reduce_quantity(Some(&raw)) {
                error.set(Some(err.to_string()));
                return;
            }

            let inventory = inventory.clone();
            let loading = loading.clone();
            let error = error.clone();
            let client = client.clone();
            error.set(None);
            loading.set(true);

            spawn_local(async move {
                match reduce_and_refresh(&client, batch_id, Some(&raw)).await {
                    Ok(Some(list)) => inventory.set(list),
                    Ok(None) => {}
                    Err(err) => error.set(failure_message(&err)),
                }
                loading.set(false);
            });
        })
    };

    let on_csv_change = {
        let csv_file = csv_file.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            csv_file.set(input.files().and_then(|files| files.get(0)));
        })
    };

    let on_csv_upload = {
        let csv_file = csv_file.clone();
        let csv_input = csv_input.clone();
        let inventory = inventory.clone();
        let loading = loading.clone();
        let error = error.clone();
        let client = ApiClient::new(&config);
        Callback::from(move |_| {
            let Some(file) = (*csv_file).clone() else {
                return;
            };
            let csv_file = csv_file.clone();
            let csv_input = csv_input.clone();
            let inventory = inventory.clone();
            let loading = loading.clone();
            let error = error.clone();
            let client = client.clone();
            error.set(None);
            loading.set(true);

            spawn_local(async move {
                let result = match client.upload_inventory_csv(&file).await {
                    Ok(()) => {
                        log::info!("uploaded inventory file {}", file.name());
                        csv_file.set(None);
                        if let Some(input) = csv_input.cast::<web_sys::HtmlInputElement>() {
                            input.set_value("");
                        }
                        client.list_inventory().await
                    }
                    Err(err) => Err(err),
                };
                match result {
                    Ok(list) => inventory.set(list),
                    Err(err) => error.set(failure_message(&AppError::from(err))),
                }
                loading.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Inventory Management",
            html! {},
            html! {
                <>
                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h2 class="text-lg font-bold text-foreground mb-4 flex items-center gap-2">
                            { icon_plus() }
                            <span>{"Add New Inventory"}</span>
                        </h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-3">
                            { for BatchField::ALL.into_iter().map(|field| {
                                let form = form.clone();
                                let value = form.get(field).to_string();
                                html! {
                                    <input
                                        type={field.input_type()}
                                        placeholder={field.label()}
                                        value={value}
                                        oninput={Callback::from(move |e: InputEvent| {
                                            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                                                form.set((*form).clone().with(field, input.value()));
                                            }
                                        })}
                                        class="p-2 border rounded"
                                    />
                                }
                            }) }
                        </div>
                        <button onclick={on_add} disabled={*loading} class="w-full mt-4 bg-primary text-primary-foreground py-2 px-4 rounded-lg font-semibold">
                            { if *loading { "Adding..." } else { "Add Inventory" } }
                        </button>
                    </div>

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h2 class="text-lg font-bold text-foreground mb-4">{"Upload Inventory via CSV"}</h2>
                        <div class="flex items-center gap-4">
                            <input ref={csv_input} type="file" accept=".csv" onchange={on_csv_change} class="border rounded px-3 py-2" />
                            <button onclick={on_csv_upload} disabled={*loading} class="flex items-center gap-2 bg-[#173E63] text-white px-4 py-2 rounded">
                                { icon_upload() }
                                { if *loading { "Uploading..." } else { "Upload CSV" } }
                            </button>
                        </div>
                    </div>

                    { status_line((*error).as_deref(), true) }

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                        { for ["Product", "Category", "Qty", "Expiry", "Supplier", "Ordered", "Delivered", "Actions"].iter().map(|h| html! {
                                            <th class="px-4 py-4 font-bold text-center">{ *h }</th>
                                        }) }
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { if inventory.is_empty() {
                                        html! { <tr><td colspan="8" class="px-6 py-6 text-center text-muted-foreground">{ if *loading { "Loading..." } else { "No inventory yet." } }</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for inventory.iter().map(|item| {
                                                    let on_reduce = on_reduce.clone();
                                                    let batch_id = item.batch_id;
                                                    html! {
                                                        <tr key={item.batch_id.to_string()} class="text-sm hover:bg-muted/30 transition-colors">
                                                            <td class="px-4 py-3 text-center">{ item.product_name.clone().unwrap_or_default() }</td>
                                                            <td class="px-4 py-3 text-center">{ item.category.clone().unwrap_or_default() }</td>
                                                            <td class="px-4 py-3 text-center">{ item.quantity.to_string() }</td>
                                                            <td class="px-4 py-3 text-center">{ display_date(item.expiry_date.as_deref()) }</td>
                                                            <td class="px-4 py-3 text-center">{ item.supplier_name.clone().unwrap_or_default() }</td>
                                                            <td class="px-4 py-3 text-center">{ display_date(item.order_date.as_deref()) }</td>
                                                            <td class="px-4 py-3 text-center">{ display_date(item.delivery_date.as_deref()) }</td>
                                                            <td class="px-4 py-3 text-center">
                                                                <button
                                                                    onclick={Callback::from(move |_| on_reduce.emit(batch_id))}
                                                                    disabled={*loading}
                                                                    class="flex items-center gap-1 bg-red-600 text-white px-3 py-1 rounded-md hover:bg-red-700"
                                                                >
                                                                    { icon_minus() }
                                                                    <span>{"Reduce Qty"}</span>
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
