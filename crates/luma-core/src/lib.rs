//! Luma Core — contrast engine for accessibility checks.
//!
//! This crate contains the colorimetric pipeline (sRGB linearization,
//! relative luminance, contrast ratio) and WCAG 2.x classification.
//! No UI or framework dependencies; every function is pure.

pub mod color;
pub mod contrast;
pub mod display;
pub mod error;
pub mod evaluate;
pub mod transfer;
pub mod wcag;

// Re-exports for convenience.
pub use color::{Color, parse_hex, to_hex};
pub use contrast::{contrast_ratio, luminance};
pub use display::{RatingTint, format_ratio, gauge_fraction};
pub use error::ColorParseError;
pub use evaluate::{ContrastReport, evaluate};
pub use transfer::linearize;
pub use wcag::{ComplianceResult, Level, WcagCheck, classify, level};
