use yew::prelude::*;

use super::{SalesForm, SalesList};
use crate::hooks::use_sales;
use crate::state::RemoteView;

#[function_component(SalesScreen)]
pub fn sales_screen() -> Html {
    let sales = use_sales();

    html! {
        <div class="sales">
            <h1>{"Sales Management"}</h1>
            {
                match sales.state.view() {
                    RemoteView::Loading => html! {
                        <div class="loading">{"Loading sales..."}</div>
                    },
                    RemoteView::Failed(message) => html! {
                        <div class="error">{message}</div>
                    },
                    RemoteView::Ready(data) => html! {
                        <div class="split">
                            <SalesForm
                                products={data.products.clone()}
                                on_success={sales.refresh.clone()}
                            />
                            <SalesList
                                sales={data.sales.clone()}
                                products={data.products.clone()}
                            />
                        </div>
                    },
                }
            }
        </div>
    }
}
