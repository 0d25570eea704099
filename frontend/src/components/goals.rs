use shared::Goal;
use yew::prelude::*;

use crate::hooks::use_goals::use_goal_form;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::state::AppState;

/// Progress bars cap at 100% even when the saved amount overshoots the
/// target; the printed percentage stays exact.
fn progress_bar_width(goal: &Goal) -> String {
    format!("width: {}%", goal.progress_percentage.min(100.0))
}

fn goal_card(goal: &Goal) -> Html {
    html! {
        <div key={goal.id} class="goal-card">
            <div class="goal-header">
                <h3>{&goal.goal_name}</h3>
                {if let Some(category) = &goal.category {
                    html! { <span class="goal-category">{category}</span> }
                } else {
                    html! {}
                }}
            </div>
            <div class="goal-progress">
                <div class="progress-bar">
                    <div class="progress-fill" style={progress_bar_width(goal)}></div>
                </div>
                <span class="progress-label">
                    {format!("{:.1}%", goal.progress_percentage)}
                </span>
            </div>
            <div class="goal-amounts">
                {format!("${:.2} of ${:.2}", goal.current_amount, goal.target_amount)}
            </div>
            {if let Some(target_date) = &goal.target_date {
                html! {
                    <div class="goal-target-date">
                        {format!("Target: {}", date_utils::format_display_date(target_date))}
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GoalsManagerProps {
    pub api_client: ApiClient,
    pub app_state: UseReducerHandle<AppState>,
}

/// Goal list plus a collapsible create-goal form.
#[function_component(GoalsManager)]
pub fn goals_manager(props: &GoalsManagerProps) -> Html {
    let result = use_goal_form(&props.api_client, &props.app_state);
    let state = result.state;
    let actions = result.actions;

    let on_toggle = {
        let toggle_form = actions.toggle_form.clone();
        Callback::from(move |_: MouseEvent| toggle_form.emit(()))
    };

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="goals-manager">
            <div class="goals-header">
                <h2>{"Financial Goals"}</h2>
                <button class="toggle-form" onclick={on_toggle}>
                    {if state.show_form { "Cancel" } else { "+ New Goal" }}
                </button>
            </div>

            {if state.form_success {
                html! { <div class="form-message success">{"Goal created successfully!"}</div> }
            } else {
                html! {}
            }}

            {if state.show_form {
                html! {
                    <form class="goal-form" {onsubmit}>
                        {if let Some(error) = &state.form_error {
                            html! { <div class="form-message error">{error}</div> }
                        } else {
                            html! {}
                        }}
                        <input
                            type="text"
                            placeholder="Goal name"
                            value={state.form.goal_name.clone()}
                            onchange={actions.on_name_change.clone()}
                            disabled={state.submitting}
                        />
                        <input
                            type="number"
                            step="0.01"
                            placeholder="Target amount"
                            value={state.form.target_amount.clone()}
                            onchange={actions.on_target_amount_change.clone()}
                            disabled={state.submitting}
                        />
                        <input
                            type="date"
                            value={state.form.target_date.clone()}
                            onchange={actions.on_target_date_change.clone()}
                            disabled={state.submitting}
                        />
                        <input
                            type="text"
                            placeholder="Category (optional)"
                            value={state.form.category.clone()}
                            onchange={actions.on_category_change.clone()}
                            disabled={state.submitting}
                        />
                        <button type="submit" disabled={state.submitting}>
                            {if state.submitting { "Creating..." } else { "Create Goal" }}
                        </button>
                    </form>
                }
            } else {
                html! {}
            }}

            {if props.app_state.goals.is_empty() {
                html! { <p class="empty-hint">{"No goals yet. Create one to start tracking!"}</p> }
            } else {
                html! {
                    <div class="goals-grid">
                        {for props.app_state.goals.iter().map(goal_card)}
                    </div>
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(progress_percentage: f64) -> Goal {
        Goal {
            id: 1,
            goal_name: "Emergency fund".to_string(),
            target_amount: 1000.0,
            current_amount: 400.0,
            progress_percentage,
            target_date: None,
            category: None,
        }
    }

    #[test]
    fn test_progress_bar_width_is_clamped_to_full() {
        assert_eq!(progress_bar_width(&goal(40.0)), "width: 40%");
        assert_eq!(progress_bar_width(&goal(120.0)), "width: 100%");
    }
}
