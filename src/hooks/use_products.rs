use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::Product;
use crate::services::{delete_product, fetch_products};
use crate::state::RemoteState;
use crate::utils::confirm;

#[derive(Clone)]
pub struct UseProductsHandle {
    pub state: UseStateHandle<RemoteState<Vec<Product>>>,
    /// Invalidate and reload the collection.
    pub refresh: Callback<()>,
    /// Confirmed delete; declining the prompt issues no request.
    pub remove: Callback<u32>,
}

#[hook]
pub fn use_products() -> UseProductsHandle {
    let session = use_session();
    let state = use_state(RemoteState::<Vec<Product>>::default);

    // Fetch on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(load(state));
            || ()
        });
    }

    let refresh = {
        let state = state.clone();
        Callback::from(move |_| {
            spawn_local(load(state.clone()));
        })
    };

    let remove = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |id: u32| {
            if !confirm("Are you sure you want to delete this product?") {
                return;
            }
            if let Some(session) = session.current() {
                let state = state.clone();
                spawn_local(async move {
                    match delete_product(&session, id).await {
                        Ok(()) => load(state).await,
                        Err(e) => {
                            log::error!("❌ Error deleting product {}: {}", id, e);
                            let mut next = (*state).clone();
                            next.fail("Failed to delete product");
                            state.set(next);
                        }
                    }
                });
            }
        })
    };

    UseProductsHandle {
        state,
        refresh,
        remove,
    }
}

async fn load(state: UseStateHandle<RemoteState<Vec<Product>>>) {
    let mut next = (*state).clone();
    next.begin();
    state.set(next);

    match fetch_products().await {
        Ok(products) => {
            let mut next = (*state).clone();
            next.resolve(products);
            state.set(next);
        }
        Err(e) => {
            log::error!("❌ Error fetching products: {}", e);
            let mut next = (*state).clone();
            next.fail("Failed to load products");
            state.set(next);
        }
    }
}
