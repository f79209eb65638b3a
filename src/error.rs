use thiserror::Error;

/// Errors raised by the contrast core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not `#rrggbb` (or the `#rgb` shorthand).
    #[error("invalid color format: {input:?} (expected #rrggbb)")]
    InvalidColorFormat { input: String },

    /// A suggestion was selected that the current report never offered.
    #[error("{color} is not one of the current suggestions")]
    NotASuggestion { color: String },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        ColorError::InvalidColorFormat {
            input: input.to_string(),
        }
    }
}
