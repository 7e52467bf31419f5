//! WCAG 2.x contrast thresholds and pass/fail classification.
//!
//! | Check           | Threshold |
//! |-----------------|-----------|
//! | AA normal text  | ≥ 4.5     |
//! | AA large text   | ≥ 3.0     |
//! | AAA normal text | ≥ 7.0     |
//! | AAA large text  | ≥ 4.5     |
//!
//! All comparisons are inclusive at the threshold.

use serde::{Deserialize, Serialize};

/// Minimum ratio for AA large text.
pub const AA_LARGE_MIN: f64 = 3.0;
/// Minimum ratio for AA normal text and AAA large text.
pub const AA_NORMAL_MIN: f64 = 4.5;
/// Minimum ratio for AAA normal text.
pub const AAA_NORMAL_MIN: f64 = 7.0;

/// Overall conformance summary for a contrast ratio.
///
/// Only the normal-text thresholds feed the summary: a ratio of 3.0 to 4.5
/// passes AA large text but still reports [`Level::Fail`] here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Fail,
    Aa,
    Aaa,
}

impl Level {
    /// Short label for status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

/// One of the four individual WCAG checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WcagCheck {
    AaNormal,
    AaLarge,
    AaaNormal,
    AaaLarge,
}

impl WcagCheck {
    /// All checks in results-panel order.
    pub const ALL: [Self; 4] = [
        Self::AaNormal,
        Self::AaLarge,
        Self::AaaNormal,
        Self::AaaLarge,
    ];

    /// Minimum contrast ratio this check requires.
    pub const fn threshold(&self) -> f64 {
        match self {
            Self::AaNormal | Self::AaaLarge => AA_NORMAL_MIN,
            Self::AaLarge => AA_LARGE_MIN,
            Self::AaaNormal => AAA_NORMAL_MIN,
        }
    }

    /// Conformance level heading, e.g. `"WCAG AA"`.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AaNormal | Self::AaLarge => "WCAG AA",
            Self::AaaNormal | Self::AaaLarge => "WCAG AAA",
        }
    }

    /// Text size the check applies to.
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::AaNormal | Self::AaaNormal => "Normal Text",
            Self::AaLarge | Self::AaaLarge => "Large Text",
        }
    }

    /// Requirement as shown next to the result, e.g. `"4.5:1"`.
    pub const fn requirement(&self) -> &'static str {
        match self {
            Self::AaNormal | Self::AaaLarge => "4.5:1",
            Self::AaLarge => "3:1",
            Self::AaaNormal => "7:1",
        }
    }

    /// Whether `ratio` meets this check.
    pub fn passes(&self, ratio: f64) -> bool {
        ratio >= self.threshold()
    }
}

/// Pass/fail flags for the four WCAG checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ComplianceResult {
    /// Flag for a single check.
    pub const fn passes(&self, check: WcagCheck) -> bool {
        match check {
            WcagCheck::AaNormal => self.aa_normal,
            WcagCheck::AaLarge => self.aa_large,
            WcagCheck::AaaNormal => self.aaa_normal,
            WcagCheck::AaaLarge => self.aaa_large,
        }
    }

    /// Every check paired with its flag, in results-panel order.
    pub fn checks(&self) -> impl Iterator<Item = (WcagCheck, bool)> + '_ {
        WcagCheck::ALL
            .into_iter()
            .map(|check| (check, self.passes(check)))
    }
}

/// Classify a contrast ratio against all four thresholds.
pub fn classify(ratio: f64) -> ComplianceResult {
    ComplianceResult {
        aa_normal: WcagCheck::AaNormal.passes(ratio),
        aa_large: WcagCheck::AaLarge.passes(ratio),
        aaa_normal: WcagCheck::AaaNormal.passes(ratio),
        aaa_large: WcagCheck::AaaLarge.passes(ratio),
    }
}

/// Overall conformance level for a contrast ratio.
pub fn level(ratio: f64) -> Level {
    if ratio >= AAA_NORMAL_MIN {
        Level::Aaa
    } else if ratio >= AA_NORMAL_MIN {
        Level::Aa
    } else {
        Level::Fail
    }
}
