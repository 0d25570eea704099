//! Session-start fan-out: the four reads are issued back-to-back as
//! independent tasks and land on their own model slices in whatever order
//! they finish. A branch that fails is logged and leaves its slice alone;
//! it never cancels or blocks the other branches.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::{Action, AppState};

pub fn fetch_transactions(
    api_client: ApiClient,
    app_state: UseReducerHandle<AppState>,
    epoch: u32,
) {
    spawn_local(async move {
        match api_client.get_transactions().await {
            Ok(transactions) => {
                app_state.dispatch(Action::TransactionsLoaded {
                    epoch,
                    transactions,
                });
            }
            Err(e) => {
                Logger::error_with_component("sync", &format!("Failed to fetch transactions: {}", e));
            }
        }
    });
}

pub fn fetch_spending_patterns(
    api_client: ApiClient,
    app_state: UseReducerHandle<AppState>,
    epoch: u32,
) {
    spawn_local(async move {
        match api_client.get_spending_patterns().await {
            Ok(patterns) => {
                app_state.dispatch(Action::SpendingPatternsLoaded { epoch, patterns });
            }
            Err(e) => {
                Logger::error_with_component(
                    "sync",
                    &format!("Failed to fetch spending patterns: {}", e),
                );
            }
        }
    });
}

pub fn fetch_predictions(
    api_client: ApiClient,
    app_state: UseReducerHandle<AppState>,
    epoch: u32,
) {
    spawn_local(async move {
        match api_client.get_predictions().await {
            Ok(predictions) => {
                app_state.dispatch(Action::PredictionsLoaded { epoch, predictions });
            }
            Err(e) => {
                Logger::error_with_component("sync", &format!("Failed to fetch predictions: {}", e));
            }
        }
    });
}

pub fn fetch_goals(api_client: ApiClient, app_state: UseReducerHandle<AppState>, epoch: u32) {
    spawn_local(async move {
        match api_client.get_goals().await {
            Ok(goals) => {
                app_state.dispatch(Action::GoalsLoaded { epoch, goals });
            }
            Err(e) => {
                Logger::error_with_component("sync", &format!("Failed to fetch goals: {}", e));
            }
        }
    });
}

/// Kick off all four reads concurrently for the current session.
pub fn sync_all(api_client: &ApiClient, app_state: &UseReducerHandle<AppState>) {
    Logger::info_with_component("sync", "Starting full data sync");
    let epoch = app_state.session_epoch;
    fetch_transactions(api_client.clone(), app_state.clone(), epoch);
    fetch_spending_patterns(api_client.clone(), app_state.clone(), epoch);
    fetch_predictions(api_client.clone(), app_state.clone(), epoch);
    fetch_goals(api_client.clone(), app_state.clone(), epoch);
}

/// Run a full sync once per token absent->present transition (fresh login
/// or a persisted token found at mount). Logout changes the token to
/// `None`, which is a no-op here.
#[hook]
pub fn use_sync_on_login(app_state: &UseReducerHandle<AppState>) {
    let handle = app_state.clone();
    use_effect_with(app_state.token.clone(), move |token| {
        if token.is_some() {
            let api_client = ApiClient::new(token.clone());
            sync_all(&api_client, &handle);
        }
        || ()
    });
}
