/// Errors produced when reading a color from hex text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color string is empty")]
    Empty,
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
