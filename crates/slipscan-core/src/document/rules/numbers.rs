//! Numeric token parsing shared by the monetary extractors.

use super::patterns::{DECIMAL_DIGIT, NUMERIC_TOKEN};

/// Parse a numeric token such as "1,250.00" or "12,34,567.50".
///
/// Grouping commas are removed before parsing, so any grouping style works.
/// Decimal digits of any script ("१,२५०", "２５０") read as their ASCII
/// values. Returns `None` when what remains is not a decimal number.
pub fn parse_amount(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|&c| c != ',')
        .map(|c| ascii_digit(c).unwrap_or(c))
        .collect();
    cleaned.parse::<f64>().ok()
}

fn is_decimal_digit(c: char) -> bool {
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4]))
}

/// ASCII form of a Unicode decimal digit.
///
/// Decimal digits are assigned in contiguous runs of whole 0-9 blocks, so the
/// value is the offset from the start of the run, modulo ten.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut zero = c as u32;
    while let Some(prev) = zero.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        zero -= 1;
    }

    char::from_digit((c as u32 - zero) % 10, 10)
}

/// All numeric tokens in `text`, left to right.
pub fn numeric_tokens(text: &str) -> impl Iterator<Item = &str> {
    NUMERIC_TOKEN.find_iter(text).map(|m| m.as_str())
}

/// The rightmost value on `line` that parses and is strictly above `floor`.
///
/// Zero never qualifies, whatever the floor.
pub fn trailing_amount_above(line: &str, floor: f64) -> Option<f64> {
    let tokens: Vec<&str> = numeric_tokens(line).collect();

    tokens
        .into_iter()
        .rev()
        .filter_map(parse_amount)
        .find(|&value| value != 0.0 && value > floor)
}

/// The largest value in `text` within `[min, max]` (inclusive).
///
/// Zero never qualifies, whatever the bounds.
pub fn max_amount_within(text: &str, min: f64, max: f64) -> Option<f64> {
    numeric_tokens(text)
        .filter_map(parse_amount)
        .filter(|&value| value != 0.0 && value >= min && value <= max)
        .fold(None, |best, value| match best {
            Some(current) if current >= value => Some(current),
            _ => Some(value),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("900"), Some(900.0));
        assert_eq!(parse_amount("1,250.00"), Some(1250.0));
        assert_eq!(parse_amount("45."), Some(45.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount(","), None);
        assert_eq!(parse_amount("12.3.4"), None);
    }

    #[test]
    fn test_non_ascii_digits() {
        assert_eq!(parse_amount("१,२५०.००"), Some(1250.0));
        assert_eq!(parse_amount("２５０"), Some(250.0));
        assert_eq!(parse_amount("৯৯"), Some(99.0));
        // Mathematical digits sit in five adjacent blocks
        assert_eq!(parse_amount("\u{1D7D9}\u{1D7EA}"), Some(18.0));
        assert_eq!(parse_amount("1x"), None);
    }

    #[test]
    fn test_non_ascii_tokens_on_lines() {
        assert_eq!(trailing_amount_above("Grand Total: १,२५०.००", 10.0), Some(1250.0));
        assert_eq!(max_amount_within("Paid ２５０ cash", 10.0, 50_000.0), Some(250.0));
    }

    #[test]
    fn test_grouping_styles_parse_equal() {
        assert_eq!(parse_amount("12,34,567.50"), parse_amount("1234567.50"));
        assert_eq!(parse_amount("1,234,567.50"), Some(1234567.5));
    }

    #[test]
    fn test_numeric_tokens() {
        let tokens: Vec<&str> = numeric_tokens("Qty 2 x 1,250.00 on 15-08-2024").collect();
        assert_eq!(tokens, vec!["2", "1,250.00", "15", "08", "2024"]);
    }

    #[test]
    fn test_trailing_amount_prefers_rightmost() {
        assert_eq!(trailing_amount_above("Total 3 items 450.00", 10.0), Some(450.0));
        assert_eq!(trailing_amount_above("Total 450.00 incl 5", 10.0), Some(450.0));
        assert_eq!(trailing_amount_above("Total 10", 10.0), None);
        assert_eq!(trailing_amount_above("Total 10.01", 10.0), Some(10.01));
    }

    #[test]
    fn test_zero_never_qualifies() {
        assert_eq!(trailing_amount_above("Due 0.00", -1.0), None);
        assert_eq!(max_amount_within("0 and 0.0", -1.0, 10.0), None);
    }

    #[test]
    fn test_max_amount_within_bounds() {
        assert_eq!(max_amount_within("5 23 61234 900", 10.0, 50_000.0), Some(900.0));
        assert_eq!(max_amount_within("10 50000", 10.0, 50_000.0), Some(50_000.0));
        assert_eq!(max_amount_within("1 2 3", 10.0, 50_000.0), None);
        assert_eq!(max_amount_within("", 10.0, 50_000.0), None);
    }
}
