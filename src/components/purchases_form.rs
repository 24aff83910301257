use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::{Product, PurchaseDraft};
use crate::services::create_purchase;
use crate::utils::format::parse_id;
use crate::utils::money;

#[derive(Properties, PartialEq)]
pub struct PurchasesFormProps {
    pub products: Vec<Product>,
    pub on_success: Callback<()>,
}

#[function_component(PurchasesForm)]
pub fn purchases_form(props: &PurchasesFormProps) -> Html {
    let session = use_session();
    let draft = use_state(PurchaseDraft::default);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_product_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.product_id = select.value();
            draft.set(next);
        })
    };

    let on_quantity = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.quantity = input.value();
            draft.set(next);
        })
    };

    let on_submit = {
        let session = session.clone();
        let draft = draft.clone();
        let error = error.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match draft.payload() {
                Some(payload) => payload,
                None => return,
            };
            if let Some(session) = session.current() {
                let draft = draft.clone();
                let error = error.clone();
                let notice = notice.clone();
                let submitting = submitting.clone();
                let on_success = on_success.clone();
                submitting.set(true);
                spawn_local(async move {
                    match create_purchase(&session, &payload).await {
                        Ok(()) => {
                            draft.set(PurchaseDraft::default());
                            error.set(None);
                            notice.set(Some("Purchase recorded".to_string()));
                            {
                                let notice = notice.clone();
                                Timeout::new(3_000, move || notice.set(None)).forget();
                            }
                            on_success.emit(());
                        }
                        Err(e) => {
                            log::error!("❌ Error recording purchase: {}", e);
                            error.set(Some(
                                "Failed to record purchase. Please try again.".to_string(),
                            ));
                        }
                    }
                    submitting.set(false);
                });
            }
        })
    };

    let selected = parse_id(&draft.product_id).and_then(|id| Product::find(&props.products, id));

    html! {
        <div class="card form-card">
            <h2>{"Record New Purchase"}</h2>

            { for error.iter().map(|message| html! { <div class="error">{message}</div> }) }
            { for notice.iter().map(|message| html! { <div class="notice">{message}</div> }) }

            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label>{"Product:"}</label>
                    <select value={draft.product_id.clone()} onchange={on_product_change} required=true>
                        <option value="" selected={draft.product_id.is_empty()}>{"Select a product"}</option>
                        {
                            for props.products.iter().map(|product| html! {
                                <option
                                    value={product.id.to_string()}
                                    selected={draft.product_id == product.id.to_string()}
                                >
                                    {&product.name}
                                </option>
                            })
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Quantity:"}</label>
                    <input
                        type="number"
                        min="1"
                        step="1"
                        value={draft.quantity.clone()}
                        oninput={on_quantity}
                        required=true
                    />
                </div>

                {
                    match selected {
                        Some(product) => html! {
                            <div class="product-info">
                                <h4>{"Product Information:"}</h4>
                                <div>{format!("Product: {}", product.name)}</div>
                                <div>{format!("Current Buying Price: {}", money(product.buying_price))}</div>
                                <div>{format!("Current Selling Price: {}", money(product.selling_price))}</div>
                                <div>{format!("Profit Margin: {} per unit", money(product.unit_profit()))}</div>
                            </div>
                        },
                        None => html! {},
                    }
                }

                <div class="notes">
                    <p><strong>{"Note:"}</strong>{" Purchases increase your inventory stock."}</p>
                    <p>{"Make sure to record purchases whenever you restock products."}</p>
                </div>

                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Recording Purchase..." } else { "Record Purchase" } }
                </button>
            </form>
        </div>
    }
}
