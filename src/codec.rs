//! Fixed-point codec for multi-noise parameter boundaries
//!
//! The server stores every parameter range boundary and hypercube offset as a
//! quantized `i64`: the real value multiplied by [`QUANTIZATION_FACTOR`] and
//! truncated. Decoding divides in `f32`, exactly like the server does when it
//! turns a boundary back into a float.

use serde_json::Number;
use thiserror::Error;

/// Scale factor the server uses to quantize parameter values
pub const QUANTIZATION_FACTOR: f32 = 10000.0;

/// Largest fixed-point magnitude an `f32` holds without losing integer precision
pub const MAX_EXACT_MAGNITUDE: i64 = 1 << 24;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("fixed-point value {0} is outside the exactly representable range (|v| <= {MAX_EXACT_MAGNITUDE})")]
    OutOfRange(i64),

    #[error("value {0} cannot be encoded as JSON")]
    NonFinite(f64),
}

/// Decodes a quantized boundary or offset into the float the server sees.
pub fn decode(value: i64) -> Result<f32, CodecError> {
    if value.unsigned_abs() > MAX_EXACT_MAGNITUDE as u64 {
        return Err(CodecError::OutOfRange(value));
    }
    Ok(value as f32 / QUANTIZATION_FACTOR)
}

/// Quantizes a float the same way the server does when it builds a range.
pub fn quantize(value: f32) -> i64 {
    (value * QUANTIZATION_FACTOR) as i64
}

/// Widens an `f32` to `f64` through its shortest decimal form.
///
/// A plain `as f64` keeps the binary value, so `-0.45f32` would be written as
/// `-0.44999998807907104`. Going through the shortest round-tripping decimal
/// keeps the JSON output identical to what the server prints for the float.
pub fn widen(value: f32) -> f64 {
    value.to_string().parse().unwrap_or(value as f64)
}

/// Decodes a quantized value straight into a JSON number.
pub fn decode_to_json(value: i64) -> Result<Number, CodecError> {
    let widened = widen(decode(value)?);
    Number::from_f64(widened).ok_or(CodecError::NonFinite(widened))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        zero = { 0, 0.0 },
        positive = { 5500, 0.55 },
        negative = { -4500, -0.45 },
        one = { 10000, 1.0 },
        below_minus_one = { -11000, -1.1 },
        smallest_step = { 1, 0.0001 },
    )]
    fn test_decode_known_values(fixed: i64, expected: f32) {
        assert_eq!(decode(fixed).unwrap(), expected);
    }

    #[parameterized(
        zero = { 0.0 },
        half = { 0.5 },
        negative = { -0.45 },
        weirdness_peak = { 0.9333 },
        beyond_one = { 1.1 },
    )]
    fn test_decode_quantize_round_trip(value: f32) {
        let decoded = decode(quantize(value)).unwrap();
        assert!(
            (decoded - value).abs() <= 1.5 / QUANTIZATION_FACTOR,
            "{value} decoded as {decoded}"
        );
    }

    #[test]
    fn test_quantize_truncates_toward_zero() {
        assert_eq!(quantize(0.00019), 1);
        assert_eq!(quantize(-0.00019), -1);
    }

    #[test]
    fn test_decode_preserves_ordering() {
        let values = [-20000, -4500, -1, 0, 1, 3000, 20000];
        let decoded: Vec<f32> = values.iter().map(|v| decode(*v).unwrap()).collect();
        assert!(decoded.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        assert_eq!(decode(MAX_EXACT_MAGNITUDE).unwrap(), 1677.7216);
        assert_eq!(
            decode(MAX_EXACT_MAGNITUDE + 1),
            Err(CodecError::OutOfRange(MAX_EXACT_MAGNITUDE + 1))
        );
        assert_eq!(
            decode(i64::MIN + 1),
            Err(CodecError::OutOfRange(i64::MIN + 1))
        );
    }

    #[test]
    fn test_widen_uses_shortest_decimal() {
        assert_eq!(widen(-0.45), -0.45_f64);
        assert_eq!(widen(0.1), 0.1_f64);
        assert_eq!(widen(1.0), 1.0_f64);
    }

    #[test]
    fn test_decode_to_json_prints_short_form() {
        let number = decode_to_json(-4500).unwrap();
        assert_eq!(number.to_string(), "-0.45");
    }
}
