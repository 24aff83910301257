use serde::{Deserialize, Serialize};

use crate::utils::format::parse_amount;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub buying_price: f64,
    pub selling_price: f64,
    // Stock on hand as reported by the backend; older records omit it
    #[serde(default)]
    pub quantity: f64,
}

impl Product {
    /// Profit per unit, computed at render time (never stored).
    pub fn unit_profit(&self) -> f64 {
        self.selling_price - self.buying_price
    }

    pub fn find(products: &[Product], id: u32) -> Option<&Product> {
        products.iter().find(|p| p.id == id)
    }

    pub fn name_of(products: &[Product], id: u32) -> String {
        Self::find(products, id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Unknown Product".to_string())
    }
}

/// Form staging for the products screen. Everything is held as text until
/// submission; the same draft serves create and edit mode.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProductDraft {
    pub name: String,
    pub buying_price: String,
    pub selling_price: String,
    pub quantity: String,
}

impl ProductDraft {
    /// Stage an existing product for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            buying_price: product.buying_price.to_string(),
            selling_price: product.selling_price.to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    /// Parse the staged text into the request payload. Empty numeric fields
    /// count as zero rather than failing.
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.trim().to_string(),
            buying_price: parse_amount(&self.buying_price),
            selling_price: parse_amount(&self.selling_price),
            quantity: parse_amount(&self.quantity),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ProductPayload {
    pub name: String,
    pub buying_price: f64,
    pub selling_price: f64,
    pub quantity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn profit_is_computed_at_render_time() {
        assert_eq!(widget().unit_profit(), 5.0);
    }

    #[test]
    fn unknown_product_name_falls_back() {
        let products = vec![widget()];
        assert_eq!(Product::name_of(&products, 1), "Widget");
        assert_eq!(Product::name_of(&products, 99), "Unknown Product");
    }

    #[test]
    fn empty_quantity_defaults_to_zero() {
        let draft = ProductDraft {
            name: " Widget ".into(),
            buying_price: "10".into(),
            selling_price: "15".into(),
            quantity: "".into(),
        };
        let payload = draft.payload();
        assert_eq!(payload.name, "Widget");
        assert_eq!(payload.buying_price, 10.0);
        assert_eq!(payload.selling_price, 15.0);
        assert_eq!(payload.quantity, 0.0);
    }

    #[test]
    fn editing_stages_the_row_back_into_text() {
        let draft = ProductDraft::from_product(&widget());
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.buying_price, "10");
        assert_eq!(draft.selling_price, "15");
        assert_eq!(draft.quantity, "5");
    }
}
