use yew::prelude::*;

use crate::components::page_shell;

#[function_component(ExpensesPage)]
pub fn expenses_page() -> Html {
    html! {
        { page_shell(
            "Expense Tracker",
            html! {},
            html! {
                <p class="text-muted-foreground">
                    {"Track all your expenses, get cost-saving suggestions, and analyze shop profitability here."}
                </p>
            }
        ) }
    }
}
