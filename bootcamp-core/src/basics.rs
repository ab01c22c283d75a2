//! Basic types: conversions, string handling and integer/float arithmetic.
//!
//! Everything here is a pure function over primitive values. Conversions
//! that can fail return `Option` instead of panicking or saturating.

/// Render an integer as decimal text.
pub fn int_to_text(value: i64) -> String {
    value.to_string()
}

/// Parse decimal text as an integer. Surrounding whitespace is not accepted.
pub fn parse_int(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// Truncate toward zero. Returns `None` for NaN, infinities and values
/// outside the `i64` range instead of saturating.
pub fn truncate_to_int(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    // i64::MAX is not exactly representable; 2^63 is the first value out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= 9.223_372_036_854_775_808e18 {
        return None;
    }
    Some(truncated as i64)
}

pub fn int_to_float(value: i64) -> f64 {
    value as f64
}

/// Character count and case conversions of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStats {
    pub chars: usize,
    pub upper: String,
    pub lower: String,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        TextStats {
            chars: text.chars().count(),
            upper: text.to_uppercase(),
            lower: text.to_lowercase(),
        }
    }
}

/// Case-sensitive substring search. An empty term is always found.
pub fn contains_term(text: &str, term: &str) -> bool {
    text.contains(term)
}

/// Results of the four integer operations plus remainder on one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerArithmetic {
    pub sum: i64,
    pub difference: i64,
    pub product: i64,
    pub quotient: i64,
    pub remainder: i64,
}

impl IntegerArithmetic {
    /// `None` when `b` is zero or any operation overflows.
    pub fn of(a: i64, b: i64) -> Option<Self> {
        Some(IntegerArithmetic {
            sum: a.checked_add(b)?,
            difference: a.checked_sub(b)?,
            product: a.checked_mul(b)?,
            quotient: a.checked_div(b)?,
            remainder: a.checked_rem(b)?,
        })
    }
}

pub fn float_quotient(a: i64, b: i64) -> Option<f64> {
    if b == 0 {
        return None;
    }
    Some(a as f64 / b as f64)
}

/// True when `text` parses as a floating point number.
pub fn is_numeric(text: &str) -> bool {
    parse_numeric(text).is_some()
}

pub fn parse_numeric(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Round half away from zero to `places` decimal places.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let divisor = 10f64.powi(places as i32);
    (value * divisor).round() / divisor
}

/// One line of the data analysis helper.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericReport {
    pub input: String,
    pub value: Option<f64>,
    pub rounded: Option<f64>,
}

impl NumericReport {
    pub fn is_numeric(&self) -> bool {
        self.value.is_some()
    }
}

/// Decimal places used by [`analyze`].
pub const ANALYSIS_PLACES: u32 = 2;

/// Classify each input and round the numeric ones.
pub fn analyze(inputs: &[&str]) -> Vec<NumericReport> {
    inputs
        .iter()
        .map(|input| {
            let value = parse_numeric(input);
            NumericReport {
                input: (*input).to_string(),
                value,
                rounded: value.map(|v| round_to_places(v, ANALYSIS_PLACES)),
            }
        })
        .collect()
}
