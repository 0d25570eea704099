use yew::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::components::chat::ChatPanel;
use crate::components::dashboard::Dashboard;
use crate::components::goals::GoalsManager;
use crate::components::header::Header;
use crate::components::transactions::{AddTransactionForm, TransactionList};
use crate::hooks::use_sync::use_sync_on_login;
use crate::services::api::ApiClient;
use crate::services::session;
use crate::state::{Action, ActiveTab, AppState};

/// Root component. Holds the single state container, gates everything on
/// the session token, and routes tabs by matching on [`ActiveTab`].
#[function_component(App)]
pub fn app() -> Html {
    // A token persisted from a previous visit restores the session at mount.
    let app_state = use_reducer(|| AppState::new(session::load_token()));

    use_sync_on_login(&app_state);

    if !app_state.is_authenticated() {
        return html! {
            <div class="app">
                <AuthForm app_state={app_state.clone()} />
            </div>
        };
    }

    let api_client = ApiClient::new(app_state.token.clone());

    let on_select_tab = {
        let app_state = app_state.clone();
        Callback::from(move |tab: ActiveTab| {
            app_state.dispatch(Action::TabSelected(tab));
        })
    };

    let on_logout = {
        let app_state = app_state.clone();
        Callback::from(move |_: ()| {
            session::clear_token();
            app_state.dispatch(Action::LoggedOut);
        })
    };

    html! {
        <div class="app">
            <Header
                active_tab={app_state.active_tab}
                {on_select_tab}
                {on_logout}
            />
            <main class="app-content">
                {match app_state.active_tab {
                    ActiveTab::Dashboard => html! {
                        <Dashboard app_state={app_state.clone()} />
                    },
                    ActiveTab::Transactions => html! {
                        <div class="transactions-view">
                            <AddTransactionForm
                                api_client={api_client.clone()}
                                app_state={app_state.clone()}
                            />
                            <TransactionList
                                transactions={app_state.transactions.clone()}
                            />
                        </div>
                    },
                    ActiveTab::Goals => html! {
                        <GoalsManager
                            api_client={api_client.clone()}
                            app_state={app_state.clone()}
                        />
                    },
                    ActiveTab::Chat => html! {
                        <ChatPanel
                            api_client={api_client.clone()}
                            app_state={app_state.clone()}
                        />
                    },
                }}
            </main>
        </div>
    }
}
