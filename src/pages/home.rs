use chrono::Datelike;
use yew::prelude::*;

use crate::route::Page;

const FEATURES: [Page; 5] = [
    Page::Dashboard,
    Page::Sales,
    Page::Inventory,
    Page::SmartPricing,
    Page::Schemes,
];

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_select: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <header class="text-center py-8">
                <h1 class="text-4xl font-extrabold text-foreground mb-4 tracking-tight">{"Smart Retail Assistant"}</h1>
                <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                    {"Empower your supermarket with AI-driven insights and tools designed to enhance efficiency, reduce costs, and grow your business."}
                </p>
            </header>

            <section class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6 mt-6">
                { for FEATURES.into_iter().map(|page| {
                    let on_select = props.on_select.clone();
                    html! {
                        <button
                            type="button"
                            onclick={Callback::from(move |_| on_select.emit(page))}
                            class="text-left p-6 bg-card rounded-2xl border border-border shadow-sm hover:shadow-md transition-all"
                        >
                            <h2 class="text-xl font-semibold text-[#173E63] mb-2">{ page.label() }</h2>
                            <p class="text-sm text-muted-foreground">{ format!("Access tools and insights for {}.", page.label().to_lowercase()) }</p>
                        </button>
                    }
                }) }
            </section>

            <footer class="mt-16 text-center text-sm text-muted-foreground">
                { format!("© {} Smart Retail Assistant", year) }
            </footer>
        </div>
    }
}
