use chrono::{DateTime, NaiveDate};

/// Amounts are displayed in Kenyan shillings with two decimals.
pub fn money(amount: f64) -> String {
    format!("KSH {:.2}", amount)
}

/// Parse a staged numeric field. Empty or unparsable input counts as zero,
/// matching the form contract (native inputs already constrain the format).
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Parse a staged record id (select values). None means nothing selected.
pub fn parse_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Render a backend date string as YYYY-MM-DD, passing through anything
/// that is neither RFC 3339 nor already a plain date.
pub fn display_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(money(45.0), "KSH 45.00");
        assert_eq!(money(5.5), "KSH 5.50");
    }

    #[test]
    fn empty_amount_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("  "), 0.0);
        assert_eq!(parse_amount("3.5"), 3.5);
    }

    #[test]
    fn id_parsing_is_optional() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("12"), Some(12));
    }

    #[test]
    fn dates_render_short() {
        assert_eq!(display_date("2026-08-06T10:30:00+00:00"), "2026-08-06");
        assert_eq!(display_date("2026-08-06"), "2026-08-06");
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
