use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::{Action, AppState};

/// Appended as the assistant's turn when the exchange fails, so the
/// conversation never ends on an unanswered message.
pub const ASSISTANT_FALLBACK: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, PartialEq)]
pub struct ChatInputState {
    pub input: String,
    pub sending: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseChatActions {
    pub send: Callback<()>,
    pub on_input_change: Callback<InputEvent>,
}

pub struct UseChatResult {
    pub state: ChatInputState,
    pub actions: UseChatActions,
}

/// One request/response exchange per user message. The user's message is
/// appended to the log synchronously before the request goes out;
/// whitespace-only input is dropped without touching the log or the
/// network.
#[hook]
pub fn use_chat(api_client: &ApiClient, app_state: &UseReducerHandle<AppState>) -> UseChatResult {
    let input = use_state(String::new);
    let sending = use_state(|| false);

    let send = {
        let api_client = api_client.clone();
        let app_state = app_state.clone();
        let input = input.clone();
        let sending = sending.clone();

        Callback::from(move |_: ()| {
            let text = input.trim().to_string();
            if text.is_empty() {
                return;
            }

            app_state.dispatch(Action::UserMessageAppended(text.clone()));
            input.set(String::new());

            let api_client = api_client.clone();
            let app_state = app_state.clone();
            let epoch = app_state.session_epoch;
            let sending = sending.clone();

            spawn_local(async move {
                sending.set(true);

                match api_client.send_chat_message(&text).await {
                    Ok(reply) => {
                        app_state.dispatch(Action::AssistantMessageAppended { epoch, text: reply });
                    }
                    Err(e) => {
                        Logger::error_with_component("chat", &format!("Chat exchange failed: {}", e));
                        app_state.dispatch(Action::AssistantMessageAppended {
                            epoch,
                            text: ASSISTANT_FALLBACK.to_string(),
                        });
                    }
                }

                sending.set(false);
            });
        })
    };

    let on_input_change = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            input.set(element.value());
        })
    };

    UseChatResult {
        state: ChatInputState {
            input: (*input).clone(),
            sending: *sending,
        },
        actions: UseChatActions {
            send,
            on_input_change,
        },
    }
}
