//! JSON message contracts between a UI and the contrast engine.
//!
//! Messages use `#[serde(tag = "type", content = "data")]` so each line on the
//! bridge looks like `{"type":"SetForeground","data":{"color":"#777"}}`.

use serde::{Deserialize, Serialize};

use luma_core::{Color, ContrastReport, evaluate, parse_hex};

use crate::error::DemoError;

/// Messages from the UI to the engine host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToCore {
    /// Re-send the report for the current colors.
    RequestState,

    /// Replace both colors at once.
    SetColors {
        /// Foreground as hex text.
        foreground: String,
        /// Background as hex text.
        background: String,
    },

    /// Replace the foreground color.
    SetForeground {
        /// Hex text.
        color: String,
    },

    /// Replace the background color.
    SetBackground {
        /// Hex text.
        color: String,
    },

    /// Exchange foreground and background.
    SwapColors,
}

/// Messages from the engine host to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CoreToUi {
    /// Fresh evaluation of the current pair.
    Evaluated {
        /// Full contrast report.
        report: ContrastReport,
    },

    /// The request could not be applied. Colors are unchanged.
    Error {
        /// Error description.
        message: String,
    },
}

/// Current foreground/background pair held on behalf of the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    foreground: Color,
    background: Color,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Color::BLACK, Color::WHITE)
    }
}

impl Session {
    /// Start a session with the given pair.
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Evaluate the current pair.
    pub fn report(&self) -> ContrastReport {
        evaluate(self.foreground, self.background)
    }

    /// Apply one UI message and produce the reply.
    pub fn handle(&mut self, msg: UiToCore) -> CoreToUi {
        match self.apply(msg) {
            Ok(()) => CoreToUi::Evaluated {
                report: self.report(),
            },
            Err(e) => {
                tracing::warn!("rejected UI message: {e}");
                CoreToUi::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Apply one JSON-encoded UI message and produce the JSON reply.
    ///
    /// Malformed input is answered with a `CoreToUi::Error`; only a failure to
    /// encode the reply is returned as `Err`.
    pub fn handle_json(&mut self, line: &str) -> Result<String, DemoError> {
        let reply = match serde_json::from_str::<UiToCore>(line) {
            Ok(msg) => self.handle(msg),
            Err(e) => {
                tracing::warn!("malformed UI message: {e}");
                CoreToUi::Error {
                    message: DemoError::from(e).to_string(),
                }
            }
        };
        Ok(serde_json::to_string(&reply)?)
    }

    fn apply(&mut self, msg: UiToCore) -> Result<(), DemoError> {
        match msg {
            UiToCore::RequestState => {}
            UiToCore::SetColors {
                foreground,
                background,
            } => {
                // Parse both before touching state so a bad background
                // leaves the foreground unchanged too.
                let fg = parse_hex(&foreground)?;
                let bg = parse_hex(&background)?;
                self.foreground = fg;
                self.background = bg;
            }
            UiToCore::SetForeground { color } => self.foreground = parse_hex(&color)?,
            UiToCore::SetBackground { color } => self.background = parse_hex(&color)?,
            UiToCore::SwapColors => {
                std::mem::swap(&mut self.foreground, &mut self.background);
            }
        }
        tracing::debug!(
            foreground = %self.foreground,
            background = %self.background,
            "session colors"
        );
        Ok(())
    }
}
