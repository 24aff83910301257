use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::{Product, SaleDraft};
use crate::services::create_sale;
use crate::utils::format::parse_id;
use crate::utils::money;

#[derive(Properties, PartialEq)]
pub struct SalesFormProps {
    pub products: Vec<Product>,
    pub on_success: Callback<()>,
}

#[function_component(SalesForm)]
pub fn sales_form(props: &SalesFormProps) -> Html {
    let session = use_session();
    let draft = use_state(SaleDraft::default);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_product_change = {
        let draft = draft.clone();
        let products = props.products.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let mut next = (*draft).clone();
            match parse_id(&value).and_then(|id| Product::find(&products, id).cloned()) {
                // Snapshot the product's current prices into the draft
                Some(product) => next.select_product(&product),
                None => {
                    next.product_id = String::new();
                    next.buying_price = String::new();
                    next.selling_price = String::new();
                }
            }
            draft.set(next);
        })
    };

    let edit_field = |apply: fn(&mut SaleDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_quantity = edit_field(|d, v| d.quantity = v);
    let on_buying = edit_field(|d, v| d.buying_price = v);
    let on_selling = edit_field(|d, v| d.selling_price = v);

    let on_submit = {
        let session = session.clone();
        let draft = draft.clone();
        let error = error.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // No product selected means no request
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
                    match create_sale(&session, &payload).await {
                        Ok(()) => {
                            draft.set(SaleDraft::default());
                            error.set(None);
                            notice.set(Some("Sale recorded".to_string()));
                            {
                                let notice = notice.clone();
                                Timeout::new(3_000, move || notice.set(None)).forget();
                            }
                            on_success.emit(());
                        }
                        Err(e) => {
                            log::error!("❌ Error recording sale: {}", e);
                            error.set(Some("Failed to record sale. Please try again.".to_string()));
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
            <h2>{"Record New Sale"}</h2>

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
                                    {format!("{} (Stock: {})", product.name, product.quantity)}
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

                <div class="form-row">
                    <div class="form-group">
                        <label>{"Buying Price (KSH):"}</label>
                        <input
                            type="number"
                            step="0.01"
                            value={draft.buying_price.clone()}
                            oninput={on_buying}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Selling Price (KSH):"}</label>
                        <input
                            type="number"
                            step="0.01"
                            value={draft.selling_price.clone()}
                            oninput={on_selling}
                            required=true
                        />
                    </div>
                </div>

                {
                    match selected {
                        Some(product) => html! {
                            <div class="product-info">
                                <h4>{"Product Information:"}</h4>
                                <div>{format!("Product: {}", product.name)}</div>
                                <div>{format!("Current Price: {}", money(product.selling_price))}</div>
                                <div>{format!("Profit Margin: {} per unit", money(product.unit_profit()))}</div>
                            </div>
                        },
                        None => html! {},
                    }
                }

                <div class="calculations">
                    <div class="calc-row">
                        <span>{"Total Amount:"}</span>
                        <span class="calc-value">{money(draft.total())}</span>
                    </div>
                    <div class="calc-row">
                        <span>{"Estimated Profit:"}</span>
                        <span class="profit-value">{money(draft.estimated_profit())}</span>
                    </div>
                </div>

                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Recording Sale..." } else { "Record Sale" } }
                </button>
            </form>
        </div>
    }
}
