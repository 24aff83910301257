use serde::{Deserialize, Serialize};

/// The /dashboard payload. The backend speaks in parallel arrays (index i of
/// each label array pairs with index i of its data array); any array may be
/// absent and is treated as empty.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DashboardSummary {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default)]
    pub sales_labels: Vec<String>,
    #[serde(default)]
    pub sales_data: Vec<f64>,
    #[serde(default)]
    pub donut_label: Vec<String>,
    #[serde(default)]
    pub donut_data: Vec<f64>,
}

/// One label/value pair, after the parallel arrays have been zipped. A label
/// whose data index is missing pairs with 0 instead of going out of bounds.
#[derive(Clone, PartialEq, Debug)]
pub struct SummaryRow {
    pub label: String,
    pub value: f64,
}

impl DashboardSummary {
    /// Stock on hand per product.
    pub fn stock_rows(&self) -> Vec<SummaryRow> {
        zip_rows(&self.labels, &self.data)
    }

    /// Units sold per product.
    pub fn sales_rows(&self) -> Vec<SummaryRow> {
        zip_rows(&self.sales_labels, &self.sales_data)
    }

    /// Profit per product.
    pub fn profit_rows(&self) -> Vec<SummaryRow> {
        zip_rows(&self.donut_label, &self.donut_data)
    }
}

fn zip_rows(labels: &[String], values: &[f64]) -> Vec<SummaryRow> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| SummaryRow {
            label: label.clone(),
            value: values.get(i).copied().unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_data_array_renders_zero() {
        let summary = DashboardSummary {
            labels: vec!["A".into(), "B".into()],
            data: vec![3.0],
            ..Default::default()
        };
        let rows = summary.stock_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "A");
        assert_eq!(rows[0].value, 3.0);
        assert_eq!(rows[1].label, "B");
        assert_eq!(rows[1].value, 0.0);
    }

    #[test]
    fn absent_arrays_are_empty() {
        let summary: DashboardSummary = serde_json::from_str("{}").unwrap();
        assert!(summary.stock_rows().is_empty());
        assert!(summary.sales_rows().is_empty());
        assert!(summary.profit_rows().is_empty());
    }
}
