use shared::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::session;
use crate::state::{Action, AppState};

#[derive(Clone, PartialEq)]
pub struct AuthFormState {
    pub is_login: bool,
    pub email: String,
    pub password: String,
    pub monthly_income: String,
    pub error: Option<String>,
    pub submitting: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthActions {
    pub submit: Callback<()>,
    pub toggle_mode: Callback<()>,
    pub on_email_change: Callback<Event>,
    pub on_password_change: Callback<Event>,
    pub on_income_change: Callback<Event>,
}

pub struct UseAuthResult {
    pub state: AuthFormState,
    pub actions: UseAuthActions,
}

/// Login/register form state. On success the token is persisted and
/// `Action::LoggedIn` dispatched; the sync orchestrator picks it up from
/// there. Backend rejections are shown inline and never auto-retried.
#[hook]
pub fn use_auth(app_state: &UseReducerHandle<AppState>) -> UseAuthResult {
    let is_login = use_state(|| true);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let monthly_income = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let submit = {
        let app_state = app_state.clone();
        let is_login = is_login.clone();
        let email = email.clone();
        let password = password.clone();
        let monthly_income = monthly_income.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |_: ()| {
            error.set(None);

            if email.trim().is_empty() || password.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            let income = if *is_login {
                0.0
            } else {
                let raw = monthly_income.trim();
                if raw.is_empty() {
                    0.0
                } else {
                    match raw.parse::<f64>() {
                        Ok(value) if value.is_finite() => value,
                        _ => {
                            error.set(Some(format!("'{}' is not a valid income", raw)));
                            return;
                        }
                    }
                }
            };

            let app_state = app_state.clone();
            let is_login_mode = *is_login;
            let email_value = email.trim().to_string();
            let password_value = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);

                let api_client = ApiClient::new(None);
                let result = if is_login_mode {
                    api_client
                        .login(&LoginRequest {
                            email: email_value,
                            password: password_value,
                        })
                        .await
                } else {
                    api_client
                        .register(&RegisterRequest {
                            email: email_value,
                            password: password_value,
                            monthly_income: income,
                        })
                        .await
                };

                match result {
                    Ok(auth) => {
                        session::store_token(&auth.token);
                        app_state.dispatch(Action::LoggedIn(auth.token));
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            is_login.set(!*is_login);
            error.set(None);
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_income_change = {
        let monthly_income = monthly_income.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            monthly_income.set(input.value());
        })
    };

    UseAuthResult {
        state: AuthFormState {
            is_login: *is_login,
            email: (*email).clone(),
            password: (*password).clone(),
            monthly_income: (*monthly_income).clone(),
            error: (*error).clone(),
            submitting: *submitting,
        },
        actions: UseAuthActions {
            submit,
            toggle_mode,
            on_email_change,
            on_password_change,
            on_income_change,
        },
    }
}
