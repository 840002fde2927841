//! Scalar math helpers shared by every control.
//!
//! These are the pure, infallible building blocks: bounding, linear remaps,
//! decimal rounding, dB/gain and angle conversions. The fallible range/step
//! functions live in [`crate::range`].

/// Bound `value` to `[min, max]`.
///
/// Defined as `max(min, min(value, max))`, so a degenerate `min > max`
/// returns `min`. This is the documented behavior, not an error case.
///
/// # Example
///
/// ```
/// use dialkit_core::math::clamp;
///
/// assert_eq!(clamp(12.0, 0.0, 100.0), 12.0);
/// assert_eq!(clamp(-50.0, 0.0, 100.0), 0.0);
/// assert_eq!(clamp(123.0, 0.0, 100.0), 100.0);
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(value.min(max))
}

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// No clamping is applied. A degenerate input range (`in_min == in_max`)
/// propagates `Infinity`/`NaN` through the division, which is deliberate.
pub fn map_value(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (out_max - out_min) * ((value - in_min) / (in_max - in_min))
}

/// Round `x` to `fraction_digits` decimal places, returning a number.
///
/// `None` rounds to the nearest integer. The rounding goes through the
/// decimal string representation so that the result matches the value's
/// textual form at that precision rather than a power-of-ten multiply that
/// reintroduces binary error. Non-finite inputs are returned unchanged.
pub fn to_fixed(x: f64, fraction_digits: Option<usize>) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let digits = fraction_digits.unwrap_or(0);
    format!("{:.prec$}", x, prec = digits).parse().unwrap_or(x)
}

/// The fractional digits of a number's decimal representation, as text.
///
/// Returns `None` for integral values, `NaN`, and infinities. Used to infer
/// a "natural" rounding precision from a step value's own textual form
/// (e.g. step `0.25` has a two-digit decimal part).
///
/// ```
/// use dialkit_core::math::decimal_part;
///
/// assert_eq!(decimal_part(3.14).as_deref(), Some("14"));
/// assert_eq!(decimal_part(3.0), None);
/// assert_eq!(decimal_part(f64::NAN), None);
/// ```
pub fn decimal_part(x: f64) -> Option<String> {
    if x.is_nan() {
        return None;
    }
    let text = x.to_string();
    text.split_once('.').map(|(_, frac)| frac.to_string())
}

/// The integer digits of a number's decimal representation, as text.
///
/// `NaN` returns `None`; infinities return their full display form
/// (`"inf"`/`"-inf"`), which has no decimal part.
pub fn integer_part(x: f64) -> Option<String> {
    if x.is_nan() {
        return None;
    }
    let text = x.to_string();
    match text.split_once('.') {
        Some((int, _)) => Some(int.to_string()),
        None => Some(text),
    }
}

/// Convert decibels to linear gain: `10^(db / 20)`.
pub fn db_to_gain(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert linear gain to decibels: `20 * log10(gain)`.
///
/// Gain `0` yields `-Infinity` and negative gain yields `NaN`, per the
/// audio-engineering convention. Not specially handled.
pub fn gain_to_db(gain: f64) -> f64 {
    20.0 * gain.log10()
}

/// Degrees to radians.
pub fn radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Radians to degrees.
pub fn degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// True mathematical modulo: non-negative result for positive `m`, unlike
/// the `%` remainder.
///
/// ```
/// use dialkit_core::math::modulo;
///
/// assert_eq!(modulo(-1.0, 3.0), 2.0);
/// assert_eq!(modulo(5.0, 3.0), 2.0);
/// ```
pub fn modulo(n: f64, m: f64) -> f64 {
    ((n % m) + m) % m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(12.0, 0.0, 100.0), 12.0);
        assert_eq!(clamp(-50.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp(123.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_clamp_degenerate_range_returns_min() {
        // max(min, min(value, max)) semantics
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_map_value_linear() {
        assert_eq!(map_value(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map_value(0.0, -1.0, 1.0, 0.0, 360.0), 180.0);
        // No clamping
        assert_eq!(map_value(20.0, 0.0, 10.0, 0.0, 100.0), 200.0);
    }

    #[test]
    fn test_map_value_degenerate_input_range() {
        assert!(map_value(1.0, 5.0, 5.0, 0.0, 10.0).is_infinite());
        assert!(map_value(5.0, 5.0, 5.0, 0.0, 10.0).is_nan());
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(3.14159, Some(2)), 3.14);
        assert_eq!(to_fixed(3.14159, None), 3.0);
        assert_eq!(to_fixed(2.7, None), 3.0);
        assert_eq!(to_fixed(1.005, Some(1)), 1.0);
    }

    #[test]
    fn test_to_fixed_non_finite() {
        assert!(to_fixed(f64::NAN, Some(2)).is_nan());
        assert_eq!(to_fixed(f64::INFINITY, None), f64::INFINITY);
    }

    #[test]
    fn test_decimal_part() {
        assert_eq!(decimal_part(3.14).as_deref(), Some("14"));
        assert_eq!(decimal_part(0.1).as_deref(), Some("1"));
        assert_eq!(decimal_part(3.0), None);
        assert_eq!(decimal_part(-2.5).as_deref(), Some("5"));
        assert_eq!(decimal_part(f64::NAN), None);
        assert_eq!(decimal_part(f64::INFINITY), None);
    }

    #[test]
    fn test_integer_part() {
        assert_eq!(integer_part(3.14).as_deref(), Some("3"));
        assert_eq!(integer_part(-2.5).as_deref(), Some("-2"));
        assert_eq!(integer_part(7.0).as_deref(), Some("7"));
        assert_eq!(integer_part(f64::NAN), None);
        assert_eq!(integer_part(f64::NEG_INFINITY).as_deref(), Some("-inf"));
    }

    #[test]
    fn test_db_gain_round_trip() {
        assert!((db_to_gain(0.0) - 1.0).abs() < 1e-12);
        assert!((gain_to_db(1.0)).abs() < 1e-12);
        assert!((db_to_gain(-20.0) - 0.1).abs() < 1e-12);
        assert!((gain_to_db(db_to_gain(-6.0)) - -6.0).abs() < 1e-10);
        assert_eq!(gain_to_db(0.0), f64::NEG_INFINITY);
        assert!(gain_to_db(-1.0).is_nan());
    }

    #[test]
    fn test_angle_conversions() {
        assert!((radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((degrees(std::f64::consts::PI) - 180.0).abs() < 1e-12);
        assert!((degrees(radians(135.0)) - 135.0).abs() < 1e-10);
    }

    #[test]
    fn test_modulo_non_negative() {
        assert_eq!(modulo(5.0, 3.0), 2.0);
        assert_eq!(modulo(-1.0, 3.0), 2.0);
        assert_eq!(modulo(-7.0, 12.0), 5.0);
        assert_eq!(modulo(0.0, 12.0), 0.0);
    }
}
