use yew::prelude::*;

use crate::hooks::use_session::{load_persisted_session, SessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Wraps the app and provides the session handle to every screen. The
/// initial value is whatever a previous visit persisted.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_state(load_persisted_session);
    let handle = SessionHandle { state };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}
