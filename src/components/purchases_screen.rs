use yew::prelude::*;

use super::{PurchasesForm, PurchasesList};
use crate::hooks::use_purchases;
use crate::state::RemoteView;

#[function_component(PurchasesScreen)]
pub fn purchases_screen() -> Html {
    let purchases = use_purchases();

    html! {
        <div class="purchases">
            <h1>{"Purchases Management"}</h1>
            {
                match purchases.state.view() {
                    RemoteView::Loading => html! {
                        <div class="loading">{"Loading purchases..."}</div>
                    },
                    RemoteView::Failed(message) => html! {
                        <div class="error">{message}</div>
                    },
                    RemoteView::Ready(data) => html! {
                        <div class="split">
                            <PurchasesForm
                                products={data.products.clone()}
                                on_success={purchases.refresh.clone()}
                            />
                            <PurchasesList
                                purchases={data.purchases.clone()}
                                products={data.products.clone()}
                                on_delete={purchases.remove.clone()}
                            />
                        </div>
                    },
                }
            }
        </div>
    }
}
