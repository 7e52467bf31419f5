//! Presentation helpers for the results panel: ratio text, gauge fill and tint.

use serde::{Deserialize, Serialize};

use crate::color::clamp_unit;
use crate::wcag::{AA_LARGE_MIN, AA_NORMAL_MIN};

/// Largest possible contrast ratio (black on white).
pub const MAX_RATIO: f64 = 21.0;

/// Format a ratio as `"N.NN:1"`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}

/// Fill fraction of the contrast gauge, in `[0, 1]`. NaN maps to 0.
pub fn gauge_fraction(ratio: f64) -> f64 {
    clamp_unit(ratio / MAX_RATIO)
}

/// Color band for the contrast gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingTint {
    /// Meets AA for normal text. Shown green.
    Pass,
    /// Meets AA for large text only. Shown orange.
    Caution,
    /// Below every threshold. Shown red.
    Fail,
}

impl RatingTint {
    /// Band for a contrast ratio.
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio >= AA_NORMAL_MIN {
            Self::Pass
        } else if ratio >= AA_LARGE_MIN {
            Self::Caution
        } else {
            Self::Fail
        }
    }

    /// sRGB display color for the tint as `[r, g, b]`.
    pub const fn rgb8(&self) -> [u8; 3] {
        match self {
            Self::Pass => [0x34, 0xC7, 0x59],
            Self::Caution => [0xFF, 0x95, 0x00],
            Self::Fail => [0xFF, 0x3B, 0x30],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(21.0), "21.00:1");
        assert_eq!(format_ratio(4.478_089), "4.48:1");
        assert_eq!(format_ratio(1.0), "1.00:1");
    }

    #[test]
    fn test_gauge_fraction_is_bounded() {
        assert!((gauge_fraction(21.0) - 1.0).abs() < 1e-12);
        assert!((gauge_fraction(10.5) - 0.5).abs() < 1e-12);
        assert_eq!(gauge_fraction(30.0), 1.0);
        assert_eq!(gauge_fraction(-1.0), 0.0);
        assert_eq!(gauge_fraction(f64::NAN), 0.0);
    }

    #[test]
    fn test_tint_bands() {
        assert_eq!(RatingTint::for_ratio(4.5), RatingTint::Pass);
        assert_eq!(RatingTint::for_ratio(4.49), RatingTint::Caution);
        assert_eq!(RatingTint::for_ratio(3.0), RatingTint::Caution);
        assert_eq!(RatingTint::for_ratio(2.99), RatingTint::Fail);
        assert_ne!(RatingTint::Pass.rgb8(), RatingTint::Fail.rgb8());
    }
}
