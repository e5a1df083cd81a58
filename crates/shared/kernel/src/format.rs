//! Presentation helpers for catalog values.

use apb_domain::constants::PRICE_UNAVAILABLE;
use apb_domain::experience::Price;

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a price in Colombian peso style: `$140.000`, `$1.250,5`.
///
/// Text prices are read like a lenient number parser would: leading whitespace is
/// skipped and the longest numeric prefix is used (`"95000 COP"` is `95000`). Absent,
/// non-numeric or non-finite prices render as `N/A`.
#[must_use]
pub fn format_price(price: Option<&Price>) -> String {
    let amount = match price {
        Some(Price::Amount(value)) => Some(*value),
        Some(Price::Text(text)) => parse_leading_number(text),
        None => None,
    };

    match amount.filter(|value| value.is_finite()) {
        Some(value) => format!("${}", group_digits(value)),
        None => PRICE_UNAVAILABLE.to_owned(),
    }
}

/// Parses the longest numeric prefix of `text`, e.g. `" 12.5kg"` -> `12.5`.
#[must_use]
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    end += count_digits(&bytes[end..]);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction = count_digits(&bytes[end + 1..]);
        if fraction > 0 || digits > 0 {
            end += 1 + fraction;
            digits += fraction;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn group_digits(value: f64) -> String {
    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
    let negative = value < 0.0 && (int_part != "0" || !fraction.is_empty());
    if negative {
        out.push('-');
    }

    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(digit);
    }

    if !fraction.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}
