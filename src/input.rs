//! Numeric text coercion for form-style input.
//!
//! Quantities entered as text never produce errors: anything that is not a
//! non-negative whole number becomes 0.

/// Parse a quantity, falling back to 0.
///
/// Surrounding whitespace is ignored. Negative numbers, decimals, empty
/// input and values beyond `u32::MAX` all coerce to 0.
pub fn parse_or_zero(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(value) => value,
        Err(_) => {
            if !text.trim().is_empty() {
                tracing::debug!(input = text, "Non-numeric quantity coerced to 0");
            }
            0
        }
    }
}

/// Parse an optional quantity: blank input yields `None`, anything else is coerced.
pub fn parse_non_blank(text: &str) -> Option<u32> {
    if text.trim().is_empty() {
        None
    } else {
        Some(parse_or_zero(text))
    }
}
