use yew::prelude::*;

use crate::hooks::use_dashboard;
use crate::models::SummaryRow;
use crate::state::RemoteView;
use crate::utils::money;

#[function_component(DashboardScreen)]
pub fn dashboard_screen() -> Html {
    let dashboard = use_dashboard();

    let on_refresh = dashboard.refresh.reform(|_: MouseEvent| ());

    html! {
        <div class="dashboard">
            <h1>{"Dashboard"}</h1>
            {
                match dashboard.state.view() {
                    RemoteView::Loading => html! {
                        <div class="loading">{"Loading dashboard..."}</div>
                    },
                    RemoteView::Failed(message) => html! {
                        <div class="error">{message}</div>
                    },
                    RemoteView::Ready(summary) => html! {
                        <>
                            <div class="card-grid">
                                <div class="card">
                                    <h3>{"Stock Summary"}</h3>
                                    { summary_list(&summary.stock_rows(), |row| format!("{} units", row.value)) }
                                </div>
                                <div class="card">
                                    <h3>{"Sales by Product"}</h3>
                                    { summary_list(&summary.sales_rows(), |row| format!("{} sold", row.value)) }
                                </div>
                                <div class="card">
                                    <h3>{"Profit by Product"}</h3>
                                    { summary_list(&summary.profit_rows(), |row| money(row.value)) }
                                </div>
                            </div>

                            <div class="card chart">
                                <h3>{"Stock Levels"}</h3>
                                { bar_list(&summary.stock_rows()) }
                            </div>

                            <button class="btn-primary" onclick={on_refresh}>
                                {"Refresh Data"}
                            </button>
                        </>
                    },
                }
            }
        </div>
    }
}

fn summary_list(rows: &[SummaryRow], render_value: impl Fn(&SummaryRow) -> String) -> Html {
    if rows.is_empty() {
        return html! { <p class="no-data">{"No data available"}</p> };
    }
    html! {
        <ul class="summary-list">
            {
                for rows.iter().map(|row| html! {
                    <li class="summary-item">
                        <span>{&row.label}</span>
                        <strong>{render_value(row)}</strong>
                    </li>
                })
            }
        </ul>
    }
}

/// Plain divs as bars; width caps at 100%.
fn bar_list(rows: &[SummaryRow]) -> Html {
    html! {
        <div class="bar-chart">
            {
                for rows.iter().map(|row| {
                    let width = (row.value * 2.0).min(100.0).max(0.0);
                    html! {
                        <div class="bar-row">
                            <div class="bar-label">{&row.label}</div>
                            <div class="bar-track">
                                <div class="bar-fill" style={format!("width: {}%", width)}>
                                    <span class="bar-value">{row.value}</span>
                                </div>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
