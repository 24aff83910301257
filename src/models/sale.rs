use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::utils::format::{parse_amount, parse_id};

/// A recorded sale. Prices are snapshots captured at sale time, independent
/// of any later product price change.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Sale {
    pub id: u32,
    pub product_id: u32,
    pub quantity: f64,
    pub buying_price: f64,
    pub selling_price: f64,
    #[serde(default)]
    pub date: String,
}

impl Sale {
    pub fn total(&self) -> f64 {
        self.selling_price * self.quantity
    }

    pub fn profit(&self) -> f64 {
        (self.selling_price - self.buying_price) * self.quantity
    }
}

/// Form staging for recording a sale.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SaleDraft {
    pub product_id: String,
    pub quantity: String,
    pub buying_price: String,
    pub selling_price: String,
}

impl SaleDraft {
    /// Snapshot the selected product's current prices into the draft. The
    /// operator can still adjust them before submitting.
    pub fn select_product(&mut self, product: &Product) {
        self.product_id = product.id.to_string();
        self.buying_price = product.buying_price.to_string();
        self.selling_price = product.selling_price.to_string();
    }

    /// None when no product is selected - no request gets issued then.
    pub fn payload(&self) -> Option<SalePayload> {
        Some(SalePayload {
            product_id: parse_id(&self.product_id)?,
            quantity: parse_amount(&self.quantity),
            buying_price: parse_amount(&self.buying_price),
            selling_price: parse_amount(&self.selling_price),
        })
    }

    /// Live "Total Amount" readout under the form.
    pub fn total(&self) -> f64 {
        parse_amount(&self.selling_price) * parse_amount(&self.quantity)
    }

    /// Live "Estimated Profit" readout under the form.
    pub fn estimated_profit(&self) -> f64 {
        (parse_amount(&self.selling_price) - parse_amount(&self.buying_price))
            * parse_amount(&self.quantity)
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SalePayload {
    pub product_id: u32,
    pub quantity: f64,
    pub buying_price: f64,
    pub selling_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_totals_use_snapshot_prices() {
        let sale = Sale {
            id: 1,
            product_id: 7,
            quantity: 3.0,
            buying_price: 10.0,
            selling_price: 15.0,
            date: "2026-08-06".into(),
        };
        assert_eq!(sale.total(), 45.0);
        assert_eq!(sale.profit(), 15.0);
    }

    #[test]
    fn draft_without_product_stages_no_payload() {
        let draft = SaleDraft {
            quantity: "3".into(),
            ..Default::default()
        };
        assert!(draft.payload().is_none());
    }

    #[test]
    fn selecting_a_product_snapshots_prices() {
        let product = Product {
            id: 7,
            name: "Widget".into(),
            buying_price: 10.0,
            selling_price: 15.0,
            quantity: 5.0,
        };
        let mut draft = SaleDraft::default();
        draft.select_product(&product);
        draft.quantity = "3".into();

        assert_eq!(draft.total(), 45.0);
        assert_eq!(draft.estimated_profit(), 15.0);

        let payload = draft.payload().unwrap();
        assert_eq!(payload.product_id, 7);
        assert_eq!(payload.buying_price, 10.0);
        assert_eq!(payload.selling_price, 15.0);
    }

    #[test]
    fn empty_quantity_counts_as_zero() {
        let mut draft = SaleDraft::default();
        draft.product_id = "7".into();
        let payload = draft.payload().unwrap();
        assert_eq!(payload.quantity, 0.0);
        assert_eq!(draft.total(), 0.0);
    }
}
