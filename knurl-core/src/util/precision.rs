use num_traits::Float;

/// Rounds `value` to `digits` significant digits.
pub fn to_precision<F: Float>(value: F, digits: u32) -> F {
    assert!(digits > 0);

    if value == F::zero() || !value.is_finite() {
        return value;
    }

    let ten = F::from(10.0).unwrap();
    let magnitude = value.abs().log10().floor();
    let exponent = F::from(digits - 1).unwrap() - magnitude;

    // Scaling up and down are kept separate so the factor stays an exact
    // power of ten in both directions
    if exponent >= F::zero() {
        let factor = ten.powf(exponent);
        (value * factor).round() / factor
    } else {
        let factor = ten.powf(-exponent);
        (value / factor).round() * factor
    }
}

/// Number of digits after the decimal point in the shortest decimal
/// representation of `value`.
pub fn decimal_places(value: f64) -> usize {
    let formatted = format!("{value}");

    match formatted.split_once('.') {
        Some((_, decimals)) => decimals.len(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{decimal_places, to_precision};

    #[test]
    fn rounds_to_significant_digits() {
        assert_eq!(to_precision(0.123, 1), 0.1);
        assert_eq!(to_precision(0.123, 2), 0.12);
        assert_eq!(to_precision(0.07, 1), 0.07);
        assert_eq!(to_precision(1234.0, 2), 1200.0);
        assert_eq!(to_precision(-0.123, 1), -0.1);
        assert_eq!(to_precision(0.2, 1), 0.2);
    }

    #[test]
    fn zero_and_non_finite_values_pass_through() {
        assert_eq!(to_precision(0.0, 1), 0.0);
        assert_eq!(to_precision(f64::INFINITY, 1), f64::INFINITY);
        assert!(to_precision(f64::NAN, 1).is_nan());
    }

    #[test]
    fn counts_decimal_places() {
        assert_eq!(decimal_places(1.0), 0);
        assert_eq!(decimal_places(0.1), 1);
        assert_eq!(decimal_places(0.25), 2);
        assert_eq!(decimal_places(10.0), 0);
        assert_eq!(decimal_places(f64::INFINITY), 0);
    }
}
