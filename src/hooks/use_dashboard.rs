use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::{DashboardSummary, Session};
use crate::services::fetch_dashboard;
use crate::state::RemoteState;

#[derive(Clone)]
pub struct UseDashboardHandle {
    pub state: UseStateHandle<RemoteState<DashboardSummary>>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_dashboard() -> UseDashboardHandle {
    let session = use_session();
    let state = use_state(RemoteState::<DashboardSummary>::default);

    // Fetch on mount
    {
        let state = state.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            if let Some(session) = session.current() {
                spawn_local(load(session, state));
            }
            || ()
        });
    }

    let refresh = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Some(session) = session.current() {
                spawn_local(load(session, state.clone()));
            }
        })
    };

    UseDashboardHandle { state, refresh }
}

async fn load(session: Session, state: UseStateHandle<RemoteState<DashboardSummary>>) {
    let mut next = (*state).clone();
    next.begin();
    state.set(next);

    match fetch_dashboard(&session).await {
        Ok(summary) => {
            let mut next = (*state).clone();
            next.resolve(summary);
            state.set(next);
        }
        Err(e) => {
            log::error!("❌ Error fetching dashboard: {}", e);
            let mut next = (*state).clone();
            next.fail("Failed to load dashboard data");
            state.set(next);
        }
    }
}
