use yew::prelude::*;

use crate::hooks::use_auth::use_auth;
use crate::state::AppState;

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub app_state: UseReducerHandle<AppState>,
}

/// The single view shown whenever no session token is present.
#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let auth = use_auth(&props.app_state);
    let state = auth.state;
    let actions = auth.actions;

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_toggle = {
        let toggle_mode = actions.toggle_mode.clone();
        Callback::from(move |_: MouseEvent| toggle_mode.emit(()))
    };

    html! {
        <div class="auth-container">
            <div class="auth-form">
                <h2>{if state.is_login { "Login" } else { "Register" }}</h2>

                {if let Some(error) = &state.error {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                <form {onsubmit}>
                    <input
                        type="email"
                        placeholder="Email"
                        value={state.email.clone()}
                        onchange={actions.on_email_change.clone()}
                        disabled={state.submitting}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={state.password.clone()}
                        onchange={actions.on_password_change.clone()}
                        disabled={state.submitting}
                    />
                    {if !state.is_login {
                        html! {
                            <input
                                type="number"
                                step="0.01"
                                placeholder="Monthly Income"
                                value={state.monthly_income.clone()}
                                onchange={actions.on_income_change.clone()}
                                disabled={state.submitting}
                            />
                        }
                    } else {
                        html! {}
                    }}
                    <button type="submit" disabled={state.submitting}>
                        {if state.is_login { "Login" } else { "Register" }}
                    </button>
                </form>

                <button class="switch-mode" onclick={on_toggle}>
                    {if state.is_login { "Need to register?" } else { "Already have an account?" }}
                </button>
            </div>
        </div>
    }
}
