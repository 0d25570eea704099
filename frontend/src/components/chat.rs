use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::hooks::use_chat::use_chat;
use crate::services::api::ApiClient;
use crate::state::{AppState, Sender};

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub api_client: ApiClient,
    pub app_state: UseReducerHandle<AppState>,
}

/// Conversation panel over the append-only chat log. Enter sends, same as
/// the button.
#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let chat = use_chat(&props.api_client, &props.app_state);
    let state = chat.state;
    let actions = chat.actions;

    let on_send = {
        let send = actions.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };

    let on_keypress = {
        let send = actions.send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };

    html! {
        <div class="chat-panel">
            <h2>{"AI Finance Assistant"}</h2>

            <div class="chat-messages">
                {if props.app_state.chat_messages.is_empty() {
                    html! {
                        <div class="chat-empty">
                            <p>{"Hi! I'm your AI finance assistant. Ask me anything about your finances!"}</p>
                        </div>
                    }
                } else {
                    html! {
                        {for props.app_state.chat_messages.iter().map(|message| {
                            let sender_class = match message.sender {
                                Sender::User => "message user",
                                Sender::Assistant => "message assistant",
                            };
                            html! {
                                <div class={sender_class}>
                                    <p>{&message.text}</p>
                                </div>
                            }
                        })}
                    }
                }}
                {if state.sending {
                    html! { <div class="message assistant typing"><p>{"Thinking..."}</p></div> }
                } else {
                    html! {}
                }}
            </div>

            <div class="chat-input">
                <input
                    type="text"
                    placeholder="Ask about your finances..."
                    value={state.input.clone()}
                    oninput={actions.on_input_change.clone()}
                    onkeypress={on_keypress}
                    disabled={state.sending}
                />
                <button onclick={on_send} disabled={state.sending}>
                    {"Send"}
                </button>
            </div>
        </div>
    }
}
