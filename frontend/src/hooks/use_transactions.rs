use shared::TransactionType;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::forms::TransactionForm;
use crate::hooks::use_sync::{fetch_spending_patterns, fetch_transactions};
use crate::services::api::ApiClient;
use crate::state::AppState;

#[derive(Clone, PartialEq)]
pub struct TransactionFormState {
    pub form: TransactionForm,
    pub submitting: bool,
    pub form_error: Option<String>,
    pub form_success: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseTransactionFormActions {
    pub submit: Callback<()>,
    pub on_amount_change: Callback<Event>,
    pub on_description_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_type_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
}

pub struct UseTransactionFormResult {
    pub state: TransactionFormState,
    pub actions: UseTransactionFormActions,
}

/// Sequence run once the backend confirms a transaction write: the fields
/// reset to empty defaults, then the transaction list and the spending
/// patterns derived from it are re-read. The model is never patched
/// locally.
fn on_write_confirmed(
    reset_form: impl FnOnce(),
    refetch_transactions: impl FnOnce(),
    refetch_patterns: impl FnOnce(),
) {
    reset_form();
    refetch_transactions();
    refetch_patterns();
}

/// Add-transaction form: pure validation first (an invalid form sends
/// nothing), then the write, then targeted re-fetches of the transaction
/// list and the spending patterns derived from it. On failure the fields
/// stay as typed so the user can retry.
#[hook]
pub fn use_transaction_form(
    api_client: &ApiClient,
    app_state: &UseReducerHandle<AppState>,
) -> UseTransactionFormResult {
    let form = use_state(TransactionForm::empty);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| false);

    let submit = {
        let api_client = api_client.clone();
        let app_state = app_state.clone();
        let form = form.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        Callback::from(move |_: ()| {
            form_error.set(None);
            form_success.set(false);

            // Required-field and format checks happen before any request.
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };

            let api_client = api_client.clone();
            let app_state = app_state.clone();
            let epoch = app_state.session_epoch;
            let form = form.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.create_transaction(&request).await {
                    Ok(()) => {
                        on_write_confirmed(
                            || form.set(TransactionForm::empty()),
                            || fetch_transactions(api_client.clone(), app_state.clone(), epoch),
                            || {
                                fetch_spending_patterns(
                                    api_client.clone(),
                                    app_state.clone(),
                                    epoch,
                                )
                            },
                        );
                        form_success.set(true);

                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3000).await;
                            form_success_clear.set(false);
                        });
                    }
                    Err(e) => {
                        form_error.set(Some(e.to_string()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let on_amount_change = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.amount = input.value();
            form.set(next);
            form_error.set(None);
        })
    };

    let on_description_change = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = input.value();
            form.set(next);
            form_error.set(None);
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.category = input.value();
            form.set(next);
        })
    };

    let on_type_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.transaction_type = if select.value() == "income" {
                TransactionType::Income
            } else {
                TransactionType::Expense
            };
            form.set(next);
        })
    };

    let on_date_change = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.date = input.value();
            form.set(next);
            form_error.set(None);
        })
    };

    UseTransactionFormResult {
        state: TransactionFormState {
            form: (*form).clone(),
            submitting: *submitting,
            form_error: (*form_error).clone(),
            form_success: *form_success,
        },
        actions: UseTransactionFormActions {
            submit,
            on_amount_change,
            on_description_change,
            on_category_change,
            on_type_change,
            on_date_change,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_confirmed_write_resets_form_and_refetches_both_collections() {
        let calls: RefCell<Vec<&str>> = RefCell::new(Vec::new());

        on_write_confirmed(
            || calls.borrow_mut().push("reset form"),
            || calls.borrow_mut().push("refetch transactions"),
            || calls.borrow_mut().push("refetch spending patterns"),
        );

        assert_eq!(
            *calls.borrow(),
            ["reset form", "refetch transactions", "refetch spending patterns"]
        );
    }
}
