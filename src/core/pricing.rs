//! Price display formatting.
//!
//! Prices are rendered the way an `en-US` locale prints plain numbers:
//! comma thousands separators and at most three fraction digits, with
//! trailing zeros dropped. The amount is prefixed with a dollar sign and the
//! currency code is shown separately next to it.

/// Symbol printed in front of every amount
pub const CURRENCY_SYMBOL: &str = "$";

/// Most fraction digits kept when printing
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with `en-US` grouping, e.g. `1297.0` -> `1,297`
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Decimal expansion of the f64 itself, so large values keep every digit
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));

    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }

    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// A price ready for display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceTag {
    /// Symbol and grouped number, e.g. `$1,297`
    pub amount: String,
    /// Currency code, e.g. `USD`
    pub currency: String,
}

impl PriceTag {
    pub fn new(price: f64, currency: &str) -> Self {
        Self {
            amount: format!("{}{}", CURRENCY_SYMBOL, format_amount(price)),
            currency: currency.to_string(),
        }
    }

    /// Amount and currency on one line, e.g. `$1,297 USD`
    pub fn label(&self) -> String {
        format!("{} {}", self.amount, self.currency)
    }
}

impl From<&crate::core::catalog::Product> for PriceTag {
    fn from(product: &crate::core::catalog::Product) -> Self {
        PriceTag::new(product.price, &product.currency)
    }
}
