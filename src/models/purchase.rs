use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::utils::format::{parse_amount, parse_id};

/// A restock event. Conceptually increases stock; the client never derives
/// a stock level from these - it displays whatever the backend reports.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Purchase {
    pub id: u32,
    pub product_id: u32,
    pub quantity: f64,
    #[serde(default)]
    pub date: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct PurchaseDraft {
    pub product_id: String,
    pub quantity: String,
}

impl PurchaseDraft {
    pub fn payload(&self) -> Option<PurchasePayload> {
        Some(PurchasePayload {
            product_id: parse_id(&self.product_id)?,
            quantity: parse_amount(&self.quantity),
        })
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct PurchasePayload {
    pub product_id: u32,
    pub quantity: f64,
}

/// The summary card under the purchase history table.
#[derive(Clone, PartialEq, Debug)]
pub struct PurchasesSummary {
    pub transactions: usize,
    pub total_units: f64,
    pub unique_products: usize,
    pub per_product: Vec<ProductTotal>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ProductTotal {
    pub name: String,
    pub units: f64,
}

impl PurchasesSummary {
    pub fn build(purchases: &[Purchase], products: &[Product]) -> Self {
        let total_units = purchases.iter().map(|p| p.quantity).sum();

        let mut seen: Vec<u32> = Vec::new();
        for purchase in purchases {
            if !seen.contains(&purchase.product_id) {
                seen.push(purchase.product_id);
            }
        }

        // One row per product that has at least one recorded purchase
        let per_product = products
            .iter()
            .filter_map(|product| {
                let units: f64 = purchases
                    .iter()
                    .filter(|p| p.product_id == product.id)
                    .map(|p| p.quantity)
                    .sum();
                (units > 0.0).then(|| ProductTotal {
                    name: product.name.clone(),
                    units,
                })
            })
            .collect();

        Self {
            transactions: purchases.len(),
            total_units,
            unique_products: seen.len(),
            per_product,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str) -> Product {
        Product {
            id,
            name: name.into(),
            buying_price: 10.0,
            selling_price: 15.0,
            quantity: 0.0,
        }
    }

    fn purchase(id: u32, product_id: u32, quantity: f64) -> Purchase {
        Purchase {
            id,
            product_id,
            quantity,
            date: "2026-08-06".into(),
        }
    }

    #[test]
    fn summary_groups_units_by_product() {
        let products = vec![product(1, "Widget"), product(2, "Gadget"), product(3, "Idle")];
        let purchases = vec![purchase(1, 1, 5.0), purchase(2, 2, 2.0), purchase(3, 1, 3.0)];

        let summary = PurchasesSummary::build(&purchases, &products);
        assert_eq!(summary.transactions, 3);
        assert_eq!(summary.total_units, 10.0);
        assert_eq!(summary.unique_products, 2);

        // Products without purchases get no row
        assert_eq!(summary.per_product.len(), 2);
        assert_eq!(summary.per_product[0].name, "Widget");
        assert_eq!(summary.per_product[0].units, 8.0);
        assert_eq!(summary.per_product[1].name, "Gadget");
        assert_eq!(summary.per_product[1].units, 2.0);
    }

    #[test]
    fn draft_requires_a_selected_product() {
        let draft = PurchaseDraft {
            product_id: "".into(),
            quantity: "4".into(),
        };
        assert!(draft.payload().is_none());

        let draft = PurchaseDraft {
            product_id: "2".into(),
            quantity: "".into(),
        };
        let payload = draft.payload().unwrap();
        assert_eq!(payload.product_id, 2);
        assert_eq!(payload.quantity, 0.0);
    }
}
