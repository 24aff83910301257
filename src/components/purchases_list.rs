use yew::prelude::*;

use crate::models::{Product, Purchase, PurchasesSummary};
use crate::utils::display_date;

#[derive(Properties, PartialEq)]
pub struct PurchasesListProps {
    pub purchases: Vec<Purchase>,
    pub products: Vec<Product>,
    pub on_delete: Callback<u32>,
}

#[function_component(PurchasesList)]
pub fn purchases_list(props: &PurchasesListProps) -> Html {
    let summary = PurchasesSummary::build(&props.purchases, &props.products);

    html! {
        <div class="card list-card">
            <h2>{"Purchase History"}</h2>
            {
                if props.purchases.is_empty() {
                    html! { <p class="no-data">{"No purchases recorded yet"}</p> }
                } else {
                    html! {
                        <table>
                            <thead>
                                <tr>
                                    <th>{"ID"}</th>
                                    <th>{"Product"}</th>
                                    <th>{"Quantity"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    for props.purchases.iter().map(|purchase| {
                                        let delete = {
                                            let on_delete = props.on_delete.clone();
                                            let id = purchase.id;
                                            Callback::from(move |_| on_delete.emit(id))
                                        };
                                        html! {
                                            <tr key={purchase.id}>
                                                <td>{purchase.id}</td>
                                                <td>{Product::name_of(&props.products, purchase.product_id)}</td>
                                                <td><span class="quantity">{format!("{} units", purchase.quantity)}</span></td>
                                                <td>{display_date(&purchase.date)}</td>
                                                <td>
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

            <div class="summary">
                <h3>{"Summary"}</h3>
                <div>{format!("Total Purchases: {} transactions", summary.transactions)}</div>
                <div>{format!("Total Quantity Purchased: {} units", summary.total_units)}</div>
                <div>{format!("Unique Products: {}", summary.unique_products)}</div>

                {
                    if summary.per_product.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h4>{"Purchases by Product:"}</h4>
                                <ul class="summary-list">
                                    {
                                        for summary.per_product.iter().map(|row| html! {
                                            <li class="summary-item">
                                                <span>{format!("{}:", row.name)}</span>
                                                <span class="quantity">{format!("{} units", row.units)}</span>
                                            </li>
                                        })
                                    }
                                </ul>
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
