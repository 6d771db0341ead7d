//! Parser for the raw strings typed into measurement columns.
use super::field::FieldKind;

/// How a numeric entry relates to the true value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Instrument over-range, e.g. `>200` MΩ.
    AtLeast,
    /// Instrument under-range, e.g. `<0.01` Ω.
    AtMost,
}

/// A parsed numeric entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    pub value: f64,
    pub bound: Bound,
}

/// The classification of one raw entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Absent or blank.
    Untested,
    /// `N/A`, `LIM` and friends. Treated like untested by every rule.
    NotApplicable,
    Value(Measured),
    /// Content that is not a number where a number is expected.
    Invalid,
}

impl Reading {
    /// Parses a raw numeric entry, accepting the unit suffixes of `kind`.
    pub fn parse(raw: Option<&str>, kind: FieldKind) -> Self {
        let text = match raw.map(str::trim) {
            None | Some("") => return Reading::Untested,
            Some(t) => t,
        };
        if is_not_applicable(text) {
            return Reading::NotApplicable;
        }

        let (bound, rest) = split_bound(text);
        let number = strip_unit(rest.trim(), kind).trim();

        match parse_decimal(number) {
            Some(value) => Reading::Value(Measured { value, bound }),
            None => Reading::Invalid,
        }
    }
}

/// True for the placeholders used when a test does not apply.
pub fn is_not_applicable(text: &str) -> bool {
    matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "n/a" | "na" | "-" | "lim" | "n.a." | "none"
    )
}

/// Parses the leading number of a configuration value such as `32A`,
/// `30mA`, `500V` or `2.5mm²`. Returns `None` for blanks and placeholders.
pub fn leading_number(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim();
    if text.is_empty() || is_not_applicable(text) {
        return None;
    }
    let end = text
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || c == '.'))
        .map_or(text.len(), |(i, _)| i);
    parse_decimal(&text[..end])
}

fn split_bound(text: &str) -> (Bound, &str) {
    for (prefix, bound) in [
        (">=", Bound::AtLeast),
        ("≥", Bound::AtLeast),
        (">", Bound::AtLeast),
        ("<=", Bound::AtMost),
        ("≤", Bound::AtMost),
        ("<", Bound::AtMost),
    ] {
        if let Some(rest) = text.strip_prefix(prefix) {
            return (bound, rest);
        }
    }
    (Bound::Exact, text)
}

fn strip_unit(text: &str, kind: FieldKind) -> &str {
    let suffixes: &[&str] = match kind {
        FieldKind::Resistance => &["ohms", "ohm", "Ω"],
        FieldKind::Insulation => &["megohms", "megohm", "mohm", "MΩ", "m"],
        FieldKind::TripTime => &["ms"],
        FieldKind::Outcome => &[],
    };
    let lower = text.to_lowercase();
    for suffix in suffixes {
        let suffix_lower = suffix.to_lowercase();
        if lower.ends_with(&suffix_lower) {
            // Lowercasing can change byte lengths only for non-ASCII input,
            // so trim by the suffix's length in the original text.
            let cut = text.len().saturating_sub(suffix.len());
            if text.is_char_boundary(cut) && text[cut..].to_lowercase() == suffix_lower {
                return &text[..cut];
            }
        }
    }
    text
}

/// Strict decimal: digits with at most one point, nothing else.
fn parse_decimal(text: &str) -> Option<f64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if text.chars().filter(|&c| c == '.').count() > 1 || text == "." {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn exact(value: f64) -> Reading {
        Reading::Value(Measured { value, bound: Bound::Exact })
    }

    #[rstest]
    #[case(None, Reading::Untested)]
    #[case(Some(""), Reading::Untested)]
    #[case(Some("   "), Reading::Untested)]
    #[case(Some("N/A"), Reading::NotApplicable)]
    #[case(Some("lim"), Reading::NotApplicable)]
    #[case(Some("0.42"), exact(0.42))]
    #[case(Some(" 1.09 "), exact(1.09))]
    #[case(Some("0.42Ω"), exact(0.42))]
    #[case(Some("0.42 ohms"), exact(0.42))]
    #[case(Some("1.5k"), Reading::Invalid)]
    #[case(Some("abc"), Reading::Invalid)]
    #[case(Some("-0.3"), Reading::Invalid)]
    #[case(Some("1..2"), Reading::Invalid)]
    #[case(Some("NaN"), Reading::Invalid)]
    fn test_resistance_entries(#[case] raw: Option<&str>, #[case] expected: Reading) {
        assert_eq!(Reading::parse(raw, FieldKind::Resistance), expected);
    }

    #[test]
    fn test_instrument_range_prefixes() {
        assert_eq!(
            Reading::parse(Some(">200"), FieldKind::Insulation),
            Reading::Value(Measured { value: 200.0, bound: Bound::AtLeast })
        );
        assert_eq!(
            Reading::parse(Some("≥999 MΩ"), FieldKind::Insulation),
            Reading::Value(Measured { value: 999.0, bound: Bound::AtLeast })
        );
        assert_eq!(
            Reading::parse(Some("<0.01"), FieldKind::Resistance),
            Reading::Value(Measured { value: 0.01, bound: Bound::AtMost })
        );
    }

    #[test]
    fn test_unit_suffix_must_match_field_kind() {
        assert_eq!(Reading::parse(Some("18ms"), FieldKind::TripTime), exact(18.0));
        assert_eq!(Reading::parse(Some("18ms"), FieldKind::Resistance), Reading::Invalid);
        assert_eq!(Reading::parse(Some("50M"), FieldKind::Insulation), exact(50.0));
    }

    #[rstest]
    #[case(Some("32"), Some(32.0))]
    #[case(Some("32A"), Some(32.0))]
    #[case(Some("30mA"), Some(30.0))]
    #[case(Some("500V"), Some(500.0))]
    #[case(Some("2.5mm²"), Some(2.5))]
    #[case(Some("N/A"), None)]
    #[case(Some("B"), None)]
    #[case(None, None)]
    fn test_leading_number(#[case] raw: Option<&str>, #[case] expected: Option<f64>) {
        assert_eq!(leading_number(raw), expected);
    }
}
