use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::analytics::format_quantity;
use crate::api::ApiClient;
use crate::components::{icon_plus, page_shell, status_line};
use crate::config::AppConfig;
use crate::error::{ApiError, AppError};
use crate::invoice::{build_invoice, submit_invoice, InvoiceAction, InvoiceForm, StatusMessage};

#[function_component(SalesPage)]
pub fn sales_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let form = use_reducer(InvoiceForm::default);

    {
        let form = form.clone();
        let client = ApiClient::new(&config);
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match client.fetch_products().await {
                        Ok(products) => form.dispatch(InvoiceAction::ProductsLoaded(products)),
                        Err(err) => log::error!("Error fetching products: {}", err),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_add_line = {
        let form = form.clone();
        Callback::from(move |_| form.dispatch(InvoiceAction::AddLine))
    };

    let on_total = {
        let form = form.clone();
        Callback::from(move |_| form.dispatch(InvoiceAction::CalculateTotal))
    };

    let on_submit = {
        let form = form.clone();
        let client = ApiClient::new(&config);
        let user_id = config.user_id;
        Callback::from(move |_| {
            let form = form.clone();
            let client = client.clone();
            let items = form.items.clone();
            if let Err(err) = build_invoice(user_id, &items) {
                form.dispatch(InvoiceAction::Rejected(err.to_string()));
                return;
            }
            form.dispatch(InvoiceAction::Submitting);

            spawn_local(async move {
                match submit_invoice(&client, user_id, &items).await {
                    Ok(()) => form.dispatch(InvoiceAction::Submitted),
                    Err(AppError::Validation(err)) => {
                        form.dispatch(InvoiceAction::SubmitFailed(err.to_string()));
                    }
                    Err(AppError::Api(ApiError::Rejected { message, .. })) => {
                        log::warn!("invoice rejected: {}", message);
                        form.dispatch(InvoiceAction::SubmitFailed(message));
                    }
                    Err(err) => {
                        log::error!("Error creating invoice: {}", err);
                        form.dispatch(InvoiceAction::SubmitFailed(
                            "Error creating invoice.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let status = form.status.as_ref().map(|s| {
        let is_error = matches!(s, StatusMessage::Error(_));
        (s.text().to_string(), is_error)
    });

    html! {
        { page_shell(
            "Sales Entry",
            html! {
                <button onclick={on_add_line} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_plus() }
                    {"Add Product"}
                </button>
            },
            html! {
                <>
                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-8 py-4 font-bold">{"Product"}</th>
                                        <th class="px-8 py-4 font-bold">{"Category"}</th>
                                        <th class="px-8 py-4 font-bold text-center">{"Available Qty"}</th>
                                        <th class="px-8 py-4 font-bold text-center">{"Quantity Sold"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { for form.items.iter().enumerate().map(|(idx, item)| {
                                        let on_product = {
                                            let form = form.clone();
                                            Callback::from(move |e: Event| {
                                                let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                                form.dispatch(InvoiceAction::SelectProduct { index: idx, raw: select.value() });
                                            })
                                        };
                                        let on_quantity = {
                                            let form = form.clone();
                                            Callback::from(move |e: InputEvent| {
                                                if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                                                    form.dispatch(InvoiceAction::SetQuantity { index: idx, raw: input.value() });
                                                }
                                            })
                                        };

                                        html! {
                                            <tr key={idx} title={item.name().to_string()} class="text-sm hover:bg-muted/30 transition-colors">
                                                <td class="px-8 py-4">
                                                    <select onchange={on_product} class="w-full px-3 py-2 bg-input border border-input rounded-lg text-foreground">
                                                        <option value="" selected={item.product_id.is_none()}>{"Select Product"}</option>
                                                        { for form.products.iter().map(|p| html! {
                                                            <option value={p.id.to_string()} selected={item.product_id == Some(p.id)}>{ p.name.clone() }</option>
                                                        }) }
                                                    </select>
                                                </td>
                                                <td class="px-8 py-4 text-foreground">{ item.category().to_string() }</td>
                                                <td class="px-8 py-4 text-center text-muted-foreground">{ item.available_quantity() }</td>
                                                <td class="px-8 py-4 text-center">
                                                    <input type="number" value={item.quantity.clone()} oninput={on_quantity} class="w-24 text-center p-2 border rounded" />
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </div>

                    <div class="flex flex-wrap gap-4">
                        <button onclick={on_total} class="bg-accent text-white px-5 py-2 rounded-lg">{"Calculate Total"}</button>
                        <button onclick={on_submit} disabled={form.submitting} class="bg-[#173E63] text-white px-5 py-2 rounded-lg">
                            { if form.submitting { "Submitting..." } else { "Submit Invoice" } }
                        </button>
                    </div>

                    <div class="text-2xl font-semibold text-right text-[#173E63]">
                        {"Total Sales: "}
                        <span class="text-green-600 font-bold">{ format_quantity(form.total) }</span>
                    </div>

                    {
                        match &status {
                            Some((msg, is_error)) => status_line(Some(msg.as_str()), *is_error),
                            None => html! {},
                        }
                    }
                </>
            }
        ) }
    }
}
