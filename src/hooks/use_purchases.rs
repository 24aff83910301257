use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::{Product, Purchase, Session};
use crate::services::{delete_purchase, fetch_products, fetch_purchases};
use crate::state::RemoteState;
use crate::utils::confirm;

#[derive(Clone, PartialEq, Debug)]
pub struct PurchasesData {
    pub purchases: Vec<Purchase>,
    pub products: Vec<Product>,
}

#[derive(Clone)]
pub struct UsePurchasesHandle {
    pub state: UseStateHandle<RemoteState<PurchasesData>>,
    pub refresh: Callback<()>,
    pub remove: Callback<u32>,
}

#[hook]
pub fn use_purchases() -> UsePurchasesHandle {
    let session = use_session();
    let state = use_state(RemoteState::<PurchasesData>::default);

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
        let session = session.clone();
        Callback::from(move |_| {
            if let Some(session) = session.current() {
                spawn_local(load(session, state.clone()));
            }
        })
    };

    let remove = {
        let state = state.clone();
        Callback::from(move |id: u32| {
            if !confirm("Are you sure you want to delete this purchase?") {
                return;
            }
            if let Some(session) = session.current() {
                let state = state.clone();
                spawn_local(async move {
                    match delete_purchase(&session, id).await {
                        Ok(()) => load(session, state).await,
                        Err(e) => {
                            log::error!("❌ Error deleting purchase {}: {}", id, e);
                            let mut next = (*state).clone();
                            next.fail("Failed to delete purchase");
                            state.set(next);
                        }
                    }
                });
            }
        })
    };

    UsePurchasesHandle {
        state,
        refresh,
        remove,
    }
}

async fn load(session: Session, state: UseStateHandle<RemoteState<PurchasesData>>) {
    let mut next = (*state).clone();
    next.begin();
    state.set(next);

    let (purchases, products) = futures::join!(fetch_purchases(&session), fetch_products());

    let mut next = (*state).clone();
    match (purchases, products) {
        (Ok(purchases), Ok(products)) => {
            next.resolve(PurchasesData {
                purchases,
                products,
            });
        }
        (Err(e), _) | (_, Err(e)) => {
            log::error!("❌ Error loading purchases screen: {}", e);
            next.fail("Failed to load purchases data");
        }
    }
    state.set(next);
}
