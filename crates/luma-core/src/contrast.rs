//! Relative luminance and WCAG contrast ratio.

use crate::color::Color;
use crate::transfer::linearize;

/// ITU-R BT.709 luminance weights for linear R, G, B.
const LUMA_REC709: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Flare term added to both luminances before taking the ratio.
const FLARE: f64 = 0.05;

/// Relative luminance of an sRGB color, in `[0, 1]`.
///
/// ```text
/// L = 0.2126 × lin(R) + 0.7152 × lin(G) + 0.0722 × lin(B)
/// ```
pub fn luminance(color: Color) -> f64 {
    color
        .channels()
        .iter()
        .zip(LUMA_REC709)
        .map(|(&c, w)| w * linearize(c))
        .sum()
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
///
/// ```text
/// ratio = (max(L1, L2) + 0.05) / (min(L1, L2) + 0.05)
/// ```
///
/// Argument order does not matter.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    ratio_from_luminance(luminance(a), luminance(b))
}

/// Contrast ratio from two precomputed luminances.
pub fn ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + FLARE) / (darker + FLARE)
}
