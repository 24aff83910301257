use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::register;

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    pub on_registered: Callback<()>,
    pub on_show_login: Callback<()>,
}

#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let on_registered = props.on_registered.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(email_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value();
                let email = email_input.value();
                let password = password_input.value();

                let error = error.clone();
                let notice = notice.clone();
                let submitting = submitting.clone();
                let on_registered = on_registered.clone();
                submitting.set(true);
                spawn_local(async move {
                    match register(&username, &email, &password).await {
                        Ok(()) => {
                            error.set(None);
                            notice.set(Some("Account created, redirecting to login...".to_string()));
                            // Let the notice show briefly before switching screens
                            Timeout::new(1_500, move || on_registered.emit(())).forget();
                        }
                        Err(e) => {
                            log::error!("❌ Registration failed: {}", e);
                            error.set(Some("Failed to register. Please try again.".to_string()));
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
                <h1>{"Create account"}</h1>

                { for error.iter().map(|message| html! { <div class="error">{message}</div> }) }
                { for notice.iter().map(|message| html! { <div class="notice">{message}</div> }) }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input type="text" id="username" ref={username_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="reg-email">{"Email"}</label>
                        <input type="email" id="reg-email" ref={email_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="reg-password">{"Password"}</label>
                        <input type="password" id="reg-password" ref={password_ref} required=true />
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Creating..." } else { "Register" } }
                    </button>
                </form>

                <button
                    type="button"
                    class="btn-link"
                    onclick={props.on_show_login.reform(|_| ())}
                >
                    {"Back to login"}
                </button>
            </div>
        </div>
    }
}
