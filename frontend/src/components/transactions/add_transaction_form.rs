use shared::TransactionType;
use yew::prelude::*;

use crate::hooks::use_transactions::use_transaction_form;
use crate::services::api::ApiClient;
use crate::state::AppState;

#[derive(Properties, PartialEq)]
pub struct AddTransactionFormProps {
    pub api_client: ApiClient,
    pub app_state: UseReducerHandle<AppState>,
}

#[function_component(AddTransactionForm)]
pub fn add_transaction_form(props: &AddTransactionFormProps) -> Html {
    let result = use_transaction_form(&props.api_client, &props.app_state);
    let state = result.state;
    let actions = result.actions;

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="transaction-form">
            <h3>{"Add Transaction"}</h3>

            {if let Some(error) = &state.form_error {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}
            {if state.form_success {
                html! { <div class="form-message success">{"Transaction added successfully!"}</div> }
            } else {
                html! {}
            }}

            <form {onsubmit}>
                <input
                    type="number"
                    step="0.01"
                    placeholder="Amount"
                    value={state.form.amount.clone()}
                    onchange={actions.on_amount_change.clone()}
                    disabled={state.submitting}
                />
                <input
                    type="text"
                    placeholder="Description"
                    value={state.form.description.clone()}
                    onchange={actions.on_description_change.clone()}
                    disabled={state.submitting}
                />
                <select
                    onchange={actions.on_type_change.clone()}
                    disabled={state.submitting}
                >
                    <option
                        value="expense"
                        selected={state.form.transaction_type == TransactionType::Expense}
                    >
                        {"Expense"}
                    </option>
                    <option
                        value="income"
                        selected={state.form.transaction_type == TransactionType::Income}
                    >
                        {"Income"}
                    </option>
                </select>
                <input
                    type="date"
                    value={state.form.date.clone()}
                    onchange={actions.on_date_change.clone()}
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
                    {if state.submitting { "Adding..." } else { "Add Transaction" }}
                </button>
            </form>
        </div>
    }
}
