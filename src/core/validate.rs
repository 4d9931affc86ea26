//! Client-side input validation.

use crate::errors::{Error, Result};

/// Parses an area-size input, accepting only finite numbers strictly greater
/// than zero. Leading and trailing whitespace is tolerated.
///
/// # Errors
/// Returns [`Error::InvalidSize`] for non-numeric, non-finite, zero, or
/// negative input.
pub fn parse_area_size(input: &str) -> Result<f64> {
    let rejected = || Error::InvalidSize {
        input: input.to_string(),
    };

    let value: f64 = input.trim().parse().map_err(|_| rejected())?;
    if !value.is_finite() || value <= 0.0 {
        return Err(rejected());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_fractional_size_is_accepted() {
        assert_eq!(parse_area_size("0.5").unwrap(), 0.5);
    }

    #[test]
    fn test_whole_size_with_whitespace_is_accepted() {
        assert_eq!(parse_area_size(" 2 ").unwrap(), 2.0);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(
            parse_area_size("0"),
            Err(Error::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(matches!(
            parse_area_size("-1"),
            Err(Error::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        assert!(matches!(
            parse_area_size("abc"),
            Err(Error::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(matches!(
            parse_area_size("inf"),
            Err(Error::InvalidSize { .. })
        ));
        assert!(matches!(
            parse_area_size("NaN"),
            Err(Error::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(parse_area_size(""), Err(Error::InvalidSize { .. })));
    }
}
