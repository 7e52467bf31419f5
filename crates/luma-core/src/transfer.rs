//! sRGB decoding (encoded channel value → linear light).
//!
//! Uses the constants from the WCAG 2.x relative luminance definition, which
//! place the linear-segment cutoff at 0.03928 rather than IEC 61966-2-1's
//! 0.04045. The two agree for every 8-bit channel value.

use crate::color::clamp_unit;

/// Encoded value at or below which the linear segment applies.
const LINEAR_CUTOFF: f64 = 0.039_28;
/// Slope of the linear segment.
const LINEAR_SLOPE: f64 = 12.92;
/// Offset of the power segment.
const POWER_OFFSET: f64 = 0.055;
/// Exponent of the power segment.
const POWER_GAMMA: f64 = 2.4;

/// Convert an sRGB-encoded channel to linear light.
///
/// ```text
/// c <= 0.03928 → c / 12.92
/// c >  0.03928 → ((c + 0.055) / 1.055) ^ 2.4
/// ```
///
/// Input is clamped to `[0, 1]` first, so the result is always in `[0, 1]`.
pub fn linearize(encoded: f64) -> f64 {
    let c = clamp_unit(encoded);
    if c <= LINEAR_CUTOFF {
        c / LINEAR_SLOPE
    } else {
        ((c + POWER_OFFSET) / (1.0 + POWER_OFFSET)).powf(POWER_GAMMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_linearize_endpoints() {
        assert_eq!(linearize(0.0), 0.0);
        assert!((linearize(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_linearize_known_values() {
        // Mid-gray sRGB 0.5 decodes to ~0.214 linear
        assert!((linearize(0.5) - 0.214_041).abs() < 1e-6);
        // Linear segment
        assert!((linearize(0.03) - 0.03 / 12.92).abs() < EPSILON);
    }

    #[test]
    fn test_linearize_is_continuous_at_cutoff() {
        let below = linearize(LINEAR_CUTOFF);
        let above = linearize(LINEAR_CUTOFF + 1e-9);
        assert!((below - above).abs() < 1e-6, "below={below}, above={above}");
    }

    #[test]
    fn test_linearize_is_monotonic() {
        let mut prev = linearize(0.0);
        for i in 1..=255 {
            let next = linearize(f64::from(i) / 255.0);
            assert!(next > prev, "not increasing at {i}: {prev} -> {next}");
            prev = next;
        }
    }

    #[test]
    fn test_linearize_clamps_out_of_range_input() {
        assert_eq!(linearize(-0.5), 0.0);
        assert!((linearize(1.7) - 1.0).abs() < EPSILON);
        assert_eq!(linearize(f64::NAN), 0.0);
    }
}
