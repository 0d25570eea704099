use yew::prelude::*;

use crate::components::charts::{CategoryPieChart, ComparisonBarChart};
use crate::components::transactions::TransactionList;
use crate::services::transforms;
use crate::state::AppState;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub app_state: UseReducerHandle<AppState>,
}

/// Overview panel: summary stats, both charts, and the five most recent
/// transactions. All of it is a pure projection of the synced model, so
/// chart inputs are recomputed on every render.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let state = &props.app_state;

    let breakdown = transforms::category_breakdown(&state.spending_patterns);
    let comparison = transforms::current_vs_predicted(&state.predictions, &state.spending_patterns);
    let recent: Vec<_> = state.transactions.iter().take(5).cloned().collect();

    html! {
        <div class="dashboard">
            <div class="stats-grid">
                <div class="stat-card">
                    <h3>{"Total Expenses"}</h3>
                    <p class="stat-value">
                        {format!("${:.2}", state.spending_patterns.total_expenses)}
                    </p>
                </div>
                <div class="stat-card">
                    <h3>{"Avg Daily Spending"}</h3>
                    <p class="stat-value">
                        {format!("${:.2}", state.spending_patterns.avg_daily_spending)}
                    </p>
                </div>
                <div class="stat-card">
                    <h3>{"Transactions"}</h3>
                    <p class="stat-value">{state.transactions.len()}</p>
                </div>
                <div class="stat-card">
                    <h3>{"Active Goals"}</h3>
                    <p class="stat-value">{state.goals.len()}</p>
                </div>
            </div>

            <div class="charts-row">
                <CategoryPieChart data={breakdown} />
                <ComparisonBarChart data={comparison} />
            </div>

            <div class="recent-transactions">
                <h3>{"Recent Transactions"}</h3>
                {if recent.is_empty() {
                    html! { <p class="empty-hint">{"No transactions yet. Add one to get started!"}</p> }
                } else {
                    html! { <TransactionList transactions={recent} show_dates={false} /> }
                }}
            </div>
        </div>
    }
}
