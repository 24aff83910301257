use dukani::models::{
    DashboardSummary, LoginResponse, Product, ProductDraft, PurchaseDraft, PurchasesSummary,
    Purchase, Sale, SaleDraft, User,
};
use dukani::utils::format::money;

fn widget() -> Product {
    Product {
        id: 1,
        name: "Widget".into(),
        buying_price: 10.0,
        selling_price: 15.0,
        quantity: 5.0,
    }
}

#[test]
fn product_profit_renders_at_display_time() {
    // name="Widget", buying=10, selling=15, quantity=5 -> profit 5.00
    assert_eq!(money(widget().unit_profit()), "KSH 5.00");
}

#[test]
fn sale_totals_from_snapshot_prices() {
    let sale = Sale {
        id: 1,
        product_id: 1,
        quantity: 3.0,
        buying_price: 10.0,
        selling_price: 15.0,
        date: "2026-08-06".into(),
    };
    assert_eq!(money(sale.total()), "KSH 45.00");
    assert_eq!(money(sale.profit()), "KSH 15.00");
}

#[test]
fn sale_snapshot_survives_product_price_change() {
    let mut product = widget();
    let mut draft = SaleDraft::default();
    draft.select_product(&product);
    draft.quantity = "3".into();
    let payload = draft.payload().unwrap();

    // A later product price change must not affect the staged snapshot
    product.selling_price = 99.0;
    assert_eq!(product.selling_price, 99.0);
    assert_eq!(payload.selling_price, 15.0);
    assert_eq!(payload.buying_price, 10.0);
}

#[test]
fn staged_quantity_defaults_to_zero() {
    let draft = ProductDraft {
        name: "Widget".into(),
        buying_price: "10".into(),
        selling_price: "15".into(),
        quantity: String::new(),
    };
    assert_eq!(draft.payload().quantity, 0.0);

    let draft = PurchaseDraft {
        product_id: "1".into(),
        quantity: String::new(),
    };
    assert_eq!(draft.payload().unwrap().quantity, 0.0);
}

#[test]
fn no_product_selected_stages_no_request() {
    assert!(SaleDraft::default().payload().is_none());
    assert!(PurchaseDraft::default().payload().is_none());
}

#[test]
fn dashboard_tolerates_short_parallel_arrays() {
    let summary = DashboardSummary {
        labels: vec!["A".into(), "B".into()],
        data: vec![3.0],
        ..Default::default()
    };
    let rows = summary.stock_rows();
    assert_eq!(rows[0].value, 3.0);
    assert_eq!(rows[1].value, 0.0);
}

#[test]
fn dashboard_deserializes_with_absent_arrays() {
    let summary: DashboardSummary =
        serde_json::from_str(r#"{"labels":["A"],"data":[2.5]}"#).unwrap();
    assert_eq!(summary.stock_rows().len(), 1);
    assert!(summary.sales_rows().is_empty());
    assert!(summary.profit_rows().is_empty());
}

#[test]
fn purchases_summary_counts_and_groups() {
    let products = vec![
        widget(),
        Product {
            id: 2,
            name: "Gadget".into(),
            buying_price: 4.0,
            selling_price: 6.0,
            quantity: 0.0,
        },
    ];
    let purchases = vec![
        Purchase {
            id: 1,
            product_id: 1,
            quantity: 5.0,
            date: "2026-08-01".into(),
        },
        Purchase {
            id: 2,
            product_id: 1,
            quantity: 2.0,
            date: "2026-08-02".into(),
        },
    ];

    let summary = PurchasesSummary::build(&purchases, &products);
    assert_eq!(summary.transactions, 2);
    assert_eq!(summary.total_units, 7.0);
    assert_eq!(summary.unique_products, 1);
    assert_eq!(summary.per_product.len(), 1);
    assert_eq!(summary.per_product[0].name, "Widget");
}

#[test]
fn login_response_without_token_is_rejected() {
    let response: LoginResponse =
        serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert!(response.into_session().is_err());

    let response: LoginResponse = serde_json::from_str(
        r#"{"token":"t0k3n","user":{"username":"amina","email":"amina@example.com"}}"#,
    )
    .unwrap();
    let session = response.into_session().unwrap();
    assert_eq!(session.token, "t0k3n");
    assert_eq!(
        session.user,
        User {
            username: "amina".into(),
            email: "amina@example.com".into(),
        }
    );
}
