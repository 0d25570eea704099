use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::GoalForm;
use crate::hooks::use_sync::fetch_goals;
use crate::services::api::ApiClient;
use crate::state::AppState;

#[derive(Clone, PartialEq)]
pub struct GoalFormState {
    pub form: GoalForm,
    pub show_form: bool,
    pub submitting: bool,
    pub form_error: Option<String>,
    pub form_success: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseGoalFormActions {
    pub submit: Callback<()>,
    pub toggle_form: Callback<()>,
    pub on_name_change: Callback<Event>,
    pub on_target_amount_change: Callback<Event>,
    pub on_target_date_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
}

pub struct UseGoalFormResult {
    pub state: GoalFormState,
    pub actions: UseGoalFormActions,
}

/// Sequence run once the backend confirms a goal write: the fields reset,
/// the form collapses, and the goal list is re-read. A goal write touches
/// no other collection.
fn on_write_confirmed(
    reset_form: impl FnOnce(),
    close_form: impl FnOnce(),
    refetch_goals: impl FnOnce(),
) {
    reset_form();
    close_form();
    refetch_goals();
}

/// Create-goal form. Same contract as the transaction form: validate
/// before any request, re-fetch the goal list after a confirmed write,
/// preserve the fields on failure.
#[hook]
pub fn use_goal_form(
    api_client: &ApiClient,
    app_state: &UseReducerHandle<AppState>,
) -> UseGoalFormResult {
    let form = use_state(GoalForm::empty);
    let show_form = use_state(|| false);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| false);

    let submit = {
        let api_client = api_client.clone();
        let app_state = app_state.clone();
        let form = form.clone();
        let show_form = show_form.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        Callback::from(move |_: ()| {
            form_error.set(None);
            form_success.set(false);

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
            let show_form = show_form.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.create_goal(&request).await {
                    Ok(()) => {
                        on_write_confirmed(
                            || form.set(GoalForm::empty()),
                            || show_form.set(false),
                            || fetch_goals(api_client.clone(), app_state.clone(), epoch),
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

    let toggle_form = {
        let show_form = show_form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            show_form.set(!*show_form);
            form_error.set(None);
        })
    };

    let on_name_change = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.goal_name = input.value();
            form.set(next);
            form_error.set(None);
        })
    };

    let on_target_amount_change = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.target_amount = input.value();
            form.set(next);
            form_error.set(None);
        })
    };

    let on_target_date_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.target_date = input.value();
            form.set(next);
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

    UseGoalFormResult {
        state: GoalFormState {
            form: (*form).clone(),
            show_form: *show_form,
            submitting: *submitting,
            form_error: (*form_error).clone(),
            form_success: *form_success,
        },
        actions: UseGoalFormActions {
            submit,
            toggle_form,
            on_name_change,
            on_target_amount_change,
            on_target_date_change,
            on_category_change,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_confirmed_write_resets_form_closes_it_and_refetches_goals() {
        let calls: RefCell<Vec<&str>> = RefCell::new(Vec::new());

        on_write_confirmed(
            || calls.borrow_mut().push("reset form"),
            || calls.borrow_mut().push("close form"),
            || calls.borrow_mut().push("refetch goals"),
        );

        assert_eq!(
            *calls.borrow(),
            ["reset form", "close form", "refetch goals"]
        );
    }
}
