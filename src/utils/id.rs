/// Reads the integer prefix of a route identifier.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit. Returns `None` when no digits lead the string or the value
/// does not fit in an `i64`.
pub fn parse_product_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::parse_product_id;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_product_id("42"), Some(42));
        assert_eq!(parse_product_id("9999"), Some(9999));
        assert_eq!(parse_product_id("-3"), Some(-3));
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_product_id(" 17abc"), Some(17));
        assert_eq!(parse_product_id("12.5"), Some(12));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(parse_product_id("abc"), None);
        assert_eq!(parse_product_id(""), None);
        assert_eq!(parse_product_id("-"), None);
        assert_eq!(parse_product_id("99999999999999999999"), None);
    }
}
