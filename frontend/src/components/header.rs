use yew::prelude::*;

use crate::state::ActiveTab;

const TABS: [(ActiveTab, &str); 4] = [
    (ActiveTab::Dashboard, "Dashboard"),
    (ActiveTab::Transactions, "Transactions"),
    (ActiveTab::Goals, "Goals"),
    (ActiveTab::Chat, "AI Chat"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_tab: ActiveTab,
    pub on_select_tab: Callback<ActiveTab>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <h1>{"💰 Finance AI Assistant"}</h1>
            <nav class="nav-tabs">
                {for TABS.iter().map(|(tab, label)| {
                    let on_select_tab = props.on_select_tab.clone();
                    let tab = *tab;
                    let onclick = Callback::from(move |_| on_select_tab.emit(tab));
                    html! {
                        <button
                            class={if props.active_tab == tab { "active" } else { "" }}
                            {onclick}
                        >
                            {*label}
                        </button>
                    }
                })}
                <button
                    class="logout-btn"
                    onclick={
                        let on_logout = props.on_logout.clone();
                        Callback::from(move |_| on_logout.emit(()))
                    }
                >
                    {"Logout"}
                </button>
            </nav>
        </header>
    }
}
