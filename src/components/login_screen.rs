use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::services::login;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_success: Callback<()>,
    pub on_show_register: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let session = use_session();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let session = session.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                let session = session.clone();
                let error = error.clone();
                let submitting = submitting.clone();
                let on_success = on_success.clone();
                submitting.set(true);
                spawn_local(async move {
                    match login(&email, &password).await {
                        Ok(established) => {
                            session.establish(established);
                            error.set(None);
                            on_success.emit(());
                        }
                        Err(e) => {
                            log::error!("❌ Login failed: {}", e);
                            error.set(Some("Invalid email or password".to_string()));
                        }
                    }
                    submitting.set(false);
                });
            }
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>{"Dukani"}</h1>
                <p>{"Sales management for your shop"}</p>

                { for error.iter().map(|message| html! { <div class="error">{message}</div> }) }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Your password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>

                <button
                    type="button"
                    class="btn-link"
                    onclick={props.on_show_register.reform(|_| ())}
                >
                    {"No account yet? Register"}
                </button>
            </div>
        </div>
    }
}
