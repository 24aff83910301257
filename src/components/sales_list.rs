use yew::prelude::*;

use crate::models::{Product, Sale};
use crate::utils::{display_date, money};

#[derive(Properties, PartialEq)]
pub struct SalesListProps {
    pub sales: Vec<Sale>,
    pub products: Vec<Product>,
}

#[function_component(SalesList)]
pub fn sales_list(props: &SalesListProps) -> Html {
    html! {
        <div class="card list-card">
            <h2>{"Recent Sales"}</h2>
            {
                if props.sales.is_empty() {
                    html! { <p class="no-data">{"No sales recorded yet"}</p> }
                } else {
                    html! {
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Product"}</th>
                                    <th>{"Quantity"}</th>
                                    <th>{"Total"}</th>
                                    <th>{"Profit"}</th>
                                    <th>{"Date"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    for props.sales.iter().map(|sale| html! {
                                        <tr key={sale.id}>
                                            <td>{Product::name_of(&props.products, sale.product_id)}</td>
                                            <td>{sale.quantity}</td>
                                            <td>{money(sale.total())}</td>
                                            <td class="profit">{money(sale.profit())}</td>
                                            <td>{display_date(&sale.date)}</td>
                                        </tr>
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
