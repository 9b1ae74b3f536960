use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::document::LINE_BREAK;

pub const CURRENCY_PREFIX: &str = "US$ ";

/// Replace the literal two-character `\n` escapes in an address with line breaks.
pub fn format_address(address: &str) -> String {
    address.replace("\\n", LINE_BREAK)
}

/// Format a date the way it is printed on the invoice, e.g. `Feb 15, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Format an amount as `US$ 1,234.56`, rounding half away from zero to cents.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{CURRENCY_PREFIX}{sign}{}.{frac}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
