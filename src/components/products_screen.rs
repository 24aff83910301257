use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_products, use_session};
use crate::models::{Product, ProductDraft};
use crate::services::{create_product, update_product};
use crate::state::RemoteView;
use crate::utils::money;

#[function_component(ProductsScreen)]
pub fn products_screen() -> Html {
    let session = use_session();
    let products = use_products();

    // Staged form input; the same draft serves create and edit mode
    let draft = use_state(ProductDraft::default);
    let editing = use_state(|| None::<u32>);
    let form_error = use_state(|| None::<String>);

    let edit_field = |apply: fn(&mut ProductDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_name = edit_field(|d, v| d.name = v);
    let on_buying = edit_field(|d, v| d.buying_price = v);
    let on_selling = edit_field(|d, v| d.selling_price = v);
    let on_quantity = edit_field(|d, v| d.quantity = v);

    let on_submit = {
        let session = session.clone();
        let draft = draft.clone();
        let editing = editing.clone();
        let form_error = form_error.clone();
        let refresh = products.refresh.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(session) = session.current() {
                let payload = draft.payload();
                let id = *editing;

                let draft = draft.clone();
                let editing = editing.clone();
                let form_error = form_error.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    let result = match id {
                        Some(id) => update_product(&session, id, &payload).await,
                        None => create_product(&session, &payload).await,
                    };
                    match result {
                        Ok(()) => {
                            // Reset form and refetch the list
                            draft.set(ProductDraft::default());
                            editing.set(None);
                            form_error.set(None);
                            refresh.emit(());
                        }
                        Err(e) => {
                            log::error!("❌ Error saving product: {}", e);
                            form_error.set(Some("Failed to save product. Please try again.".to_string()));
                        }
                    }
                });
            }
        })
    };

    let on_edit = {
        let draft = draft.clone();
        let editing = editing.clone();
        Callback::from(move |product: Product| {
            draft.set(ProductDraft::from_product(&product));
            editing.set(Some(product.id));
        })
    };

    let on_cancel_edit = {
        let draft = draft.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(ProductDraft::default());
            editing.set(None);
        })
    };

    html! {
        <div class="products">
            <h1>{"Products Management"}</h1>

            <div class="card form-card">
                <h3>{ if editing.is_some() { "Edit Product" } else { "Add New Product" } }</h3>

                { for form_error.iter().map(|message| html! { <div class="error">{message}</div> }) }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <input
                            type="text"
                            placeholder="Product Name"
                            value={draft.name.clone()}
                            oninput={on_name}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="number"
                            placeholder="Buying Price"
                            step="0.01"
                            value={draft.buying_price.clone()}
                            oninput={on_buying}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="number"
                            placeholder="Selling Price"
                            step="0.01"
                            value={draft.selling_price.clone()}
                            oninput={on_selling}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="number"
                            placeholder="Quantity"
                            step="1"
                            value={draft.quantity.clone()}
                            oninput={on_quantity}
                        />
                    </div>

                    <div class="button-row">
                        <button type="submit" class="btn-primary">
                            { if editing.is_some() { "Update Product" } else { "Add Product" } }
                        </button>
                        {
                            if editing.is_some() {
                                html! {
                                    <button type="button" class="btn-secondary" onclick={on_cancel_edit}>
                                        {"Cancel"}
                                    </button>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </form>
            </div>

            {
                match products.state.view() {
                    RemoteView::Loading => html! {
                        <div class="loading">{"Loading products..."}</div>
                    },
                    RemoteView::Failed(message) => html! {
                        <div class="error">{message}</div>
                    },
                    RemoteView::Ready(list) => product_table(list, &on_edit, &products.remove),
                }
            }
        </div>
    }
}

fn product_table(products: &[Product], on_edit: &Callback<Product>, on_delete: &Callback<u32>) -> Html {
    html! {
        <div class="card list-card">
            <h3>{format!("Products List ({})", products.len())}</h3>
            {
                if products.is_empty() {
                    html! { <p class="no-data">{"No products found. Add your first product!"}</p> }
                } else {
                    html! {
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Buying Price"}</th>
                                    <th>{"Selling Price"}</th>
                                    <th>{"Quantity"}</th>
                                    <th>{"Profit"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    for products.iter().map(|product| {
                                        let edit = {
                                            let on_edit = on_edit.clone();
                                            let product = product.clone();
                                            Callback::from(move |_| on_edit.emit(product.clone()))
                                        };
                                        let delete = {
                                            let on_delete = on_delete.clone();
                                            let id = product.id;
                                            Callback::from(move |_| on_delete.emit(id))
                                        };
                                        html! {
                                            <tr key={product.id}>
                                                <td>{&product.name}</td>
                                                <td>{money(product.buying_price)}</td>
                                                <td>{money(product.selling_price)}</td>
                                                <td>{product.quantity}</td>
                                                <td>{money(product.unit_profit())}</td>
                                                <td>
                                                    <button class="btn-edit" onclick={edit}>{"Edit"}</button>
                                                    <button class="btn-delete" onclick={delete}>{"Delete"}</button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                }
                            </tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}
