//! Error type shared by the fitting, editor and speech modules.

use thiserror::Error;

use crate::state::EditorAction;

/// Errors that can occur while building a meme.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MemeError {
    /// A canvas or image dimension was zero, negative, NaN or infinite.
    #[error("Invalid {name}: {value} (expected a positive finite number)")]
    InvalidDimension { name: &'static str, value: f64 },

    /// The file picker was changed without a file selected.
    #[error("No image file selected")]
    NoImage,

    /// The control for this action is currently disabled.
    #[error("Cannot {0} in the current state")]
    ActionUnavailable(EditorAction),

    #[error("Volume {0} is outside 0..=100")]
    InvalidVolume(i32),
}

/// Result type for meme operations
pub type Result<T> = std::result::Result<T, MemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = MemeError::InvalidDimension { name: "image width", value: 0.0 };
        assert_eq!(err.to_string(), "Invalid image width: 0 (expected a positive finite number)");
        assert_eq!(
            MemeError::ActionUnavailable(EditorAction::Clear).to_string(),
            "Cannot clear in the current state"
        );
        assert_eq!(MemeError::InvalidVolume(101).to_string(), "Volume 101 is outside 0..=100");
    }
}
