//! Lenient number parsing and formatting for text-edited numeric fields.
//!
//! Ratings and coordinates are typed as free text in the form and parsed on
//! commit. Parsing takes the longest numeric prefix of the input (after leading
//! whitespace) and yields NaN when there is none, so `"4.5 stars"` becomes
//! `4.5` and `"n/a"` becomes NaN. Formatting is the inverse used when a stored
//! listing is loaded back into the form.

/// Parses the leading numeric prefix of `text`.
///
/// Accepts an optional sign, digits with an optional fractional part, an
/// optional exponent, or the literal `Infinity`. Anything after the prefix is
/// ignored. Returns `f64::NAN` when no prefix is present.
///
/// # Examples
///
/// ```
/// use barlekha_directory::domain::numeric::parse_number;
///
/// assert_eq!(parse_number("4.2"), 4.2);
/// assert_eq!(parse_number("  24.7028N"), 24.7028);
/// assert_eq!(parse_number("-.5e1x"), -5.0);
/// assert!(parse_number("").is_nan());
/// assert!(parse_number("abc").is_nan());
/// ```
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
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

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a number the way it is shown and re-edited.
///
/// Integral values drop the fractional part (`4.0` → `"4"`), NaN is `"NaN"`
/// and infinities are `"Infinity"` / `"-Infinity"` so the text parses back to
/// the same value.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_numbers() {
        assert_eq!(parse_number("3"), 3.0);
        assert_eq!(parse_number("+3.5"), 3.5);
        assert_eq!(parse_number("91.8225, Barlekha"), 91.8225);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number(".25"), 0.25);
        assert_eq!(parse_number("1e3"), 1000.0);
    }

    #[test]
    fn dangling_exponent_is_ignored() {
        assert_eq!(parse_number("2e"), 2.0);
        assert_eq!(parse_number("2e+"), 2.0);
    }

    #[test]
    fn non_numeric_input_is_nan() {
        assert!(parse_number("").is_nan());
        assert!(parse_number("   ").is_nan());
        assert!(parse_number("four").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number("NaN").is_nan());
    }

    #[test]
    fn infinity_literal_is_recognised() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity and beyond"), f64::NEG_INFINITY);
    }

    #[test]
    fn formatting_reparses_to_the_same_value() {
        for value in [4.5, 4.0, 24.7028, -91.5, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(parse_number(&format_number(value)), value);
        }
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
