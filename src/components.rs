use yew::prelude::*;

use crate::analytics::{format_quantity, BarChart};
use crate::route::Page;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header active_page={props.active_page} />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    active_page: Page,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <span class="text-sm font-semibold text-[#173E63]">{ props.active_page.label() }</span>
            <span class="text-xs text-slate-500">{"Smart Retail Assistant"}</span>
        </header>
    }
}

struct NavItem {
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            page: Page::Home,
            icon: icon_home,
        },
        NavItem {
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            page: Page::Sales,
            icon: icon_receipt,
        },
        NavItem {
            page: Page::Inventory,
            icon: icon_box,
        },
        NavItem {
            page: Page::SmartPricing,
            icon: icon_trending_up,
        },
        NavItem {
            page: Page::Expenses,
            icon: icon_credit_card,
        },
        NavItem {
            page: Page::Schemes,
            icon: icon_landmark,
        },
    ];

    html! {
        <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-12 h-12 bg-[#173E63] rounded-full flex items-center justify-center text-white font-black">
                    {"SR"}
                </div>
                <span class="text-[#173E63] text-xl font-black tracking-tight">{"Smart Retail"}</span>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.page == props.active_page;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();
                        let page = item.page;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ page.label() }</span>
                            </button>
                        }
                    }) }
                </nav>
            </div>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

/// Inline status line under a form; errors in red.
pub fn status_line(message: Option<&str>, is_error: bool) -> Html {
    match message {
        Some(msg) => {
            let class_name = if is_error {
                "text-sm font-medium text-red-600"
            } else {
                "text-sm font-medium text-green-600"
            };
            html! { <p class={class_name}>{ msg.to_string() }</p> }
        }
        None => html! {},
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Sales,
    Categories,
    Stock,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: f64,
    pub icon: StatIcon,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_quantity(props.value) }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Sales => icon_trending_up(),
                        StatIcon::Categories => icon_layout_grid(),
                        StatIcon::Stock => icon_box(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartCardProps {
    pub chart: BarChart,
}

#[function_component(BarChartCard)]
pub fn bar_chart_card(props: &BarChartCardProps) -> Html {
    let chart = &props.chart;
    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-bold text-foreground text-lg">{ chart.title }</h3>
                <span class="text-xs text-muted-foreground">{ chart.series }</span>
            </div>
            { if chart.bars.is_empty() {
                html! { <p class="text-sm text-muted-foreground">{"No data yet."}</p> }
            } else {
                html! {
                    <div class="space-y-2">
                        { for chart.bars.iter().map(|bar| html! {
                            <div class="flex flex-col gap-1 text-sm">
                                <div class="flex items-center justify-between">
                                    <span class="text-foreground">{ bar.label.clone() }</span>
                                    <span class="text-muted-foreground">{ format_quantity(bar.value) }</span>
                                </div>
                                <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                                    <div class="h-full bg-primary" style={format!("width: {}%", bar.percent)}></div>
                                </div>
                            </div>
                        }) }
                    </div>
                }
            }}
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_home() -> Html {
    icon_base("M3 11l9-8 9 8M5 10v10h14V10")
}
pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_receipt() -> Html {
    icon_base("M5 3h14v18l-3-2-2 2-2-2-2 2-2-2-3 2zM9 8h6M9 12h6")
}
pub fn icon_box() -> Html {
    icon_base("M3 7l9-4 9 4v10l-9 4-9-4zM3 7l9 4 9-4M12 11v10")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
pub fn icon_landmark() -> Html {
    icon_base("M3 21h18M5 21V10M19 21V10M9 21V10M15 21V10M2 10l10-7 10 7")
}
pub fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_minus() -> Html {
    icon_base("M5 12h14")
}
pub fn icon_upload() -> Html {
    icon_base("M12 16V4M7 9l5-5 5 5M4 20h16")
}
