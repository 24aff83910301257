use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::{Product, Sale, Session};
use crate::services::{fetch_products, fetch_sales};
use crate::state::RemoteState;

/// The sales screen loads two collections: its own, plus products for the
/// selector. They travel together as one view state.
#[derive(Clone, PartialEq, Debug)]
pub struct SalesData {
    pub sales: Vec<Sale>,
    pub products: Vec<Product>,
}

#[derive(Clone)]
pub struct UseSalesHandle {
    pub state: UseStateHandle<RemoteState<SalesData>>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_sales() -> UseSalesHandle {
    let session = use_session();
    let state = use_state(RemoteState::<SalesData>::default);

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

    UseSalesHandle { state, refresh }
}

async fn load(session: Session, state: UseStateHandle<RemoteState<SalesData>>) {
    let mut next = (*state).clone();
    next.begin();
    state.set(next);

    // Both fetches run concurrently; the view state updates once, after the
    // join point.
    let (sales, products) = futures::join!(fetch_sales(&session), fetch_products());

    let mut next = (*state).clone();
    match (sales, products) {
        (Ok(sales), Ok(products)) => {
            next.resolve(SalesData { sales, products });
        }
        (Err(e), _) | (_, Err(e)) => {
            log::error!("❌ Error loading sales screen: {}", e);
            next.fail("Failed to load sales data");
        }
    }
    state.set(next);
}
