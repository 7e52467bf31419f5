//! Single entry point that runs the whole contrast pipeline for a color pair.
//!
//! The presentation layer calls [`evaluate`] every time either color changes.
//! Nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::contrast::{luminance, ratio_from_luminance};
use crate::display::{RatingTint, format_ratio, gauge_fraction};
use crate::wcag::{ComplianceResult, Level, classify, level};

/// Everything the results panel needs for one foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    /// Contrast ratio in `[1, 21]`.
    pub ratio: f64,
    pub luminance_foreground: f64,
    pub luminance_background: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
    /// Overall summary. Ignores the AA large-text threshold.
    pub level: Level,
    /// Foreground as `#RRGGBB`.
    pub foreground_hex: String,
    /// Background as `#RRGGBB`.
    pub background_hex: String,
}

impl ContrastReport {
    /// The four check flags as a [`ComplianceResult`].
    pub const fn compliance(&self) -> ComplianceResult {
        ComplianceResult {
            aa_normal: self.aa_normal,
            aa_large: self.aa_large,
            aaa_normal: self.aaa_normal,
            aaa_large: self.aaa_large,
        }
    }

    /// Ratio as display text, e.g. `"4.48:1"`.
    pub fn ratio_text(&self) -> String {
        format_ratio(self.ratio)
    }

    /// Contrast gauge fill in `[0, 1]`.
    pub fn gauge_fraction(&self) -> f64 {
        gauge_fraction(self.ratio)
    }

    /// Contrast gauge color band.
    pub fn tint(&self) -> RatingTint {
        RatingTint::for_ratio(self.ratio)
    }
}

/// Evaluate a foreground/background pair.
pub fn evaluate(foreground: Color, background: Color) -> ContrastReport {
    let luminance_foreground = luminance(foreground);
    let luminance_background = luminance(background);
    let ratio = ratio_from_luminance(luminance_foreground, luminance_background);
    let compliance = classify(ratio);
    let level = level(ratio);

    tracing::trace!(
        %foreground,
        %background,
        ratio,
        level = level.label(),
        "evaluated contrast"
    );

    ContrastReport {
        ratio,
        luminance_foreground,
        luminance_background,
        aa_normal: compliance.aa_normal,
        aa_large: compliance.aa_large,
        aaa_normal: compliance.aaa_normal,
        aaa_large: compliance.aaa_large,
        level,
        foreground_hex: foreground.to_string(),
        background_hex: background.to_string(),
    }
}
