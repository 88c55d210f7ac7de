//! Error types for analysis and configuration
//!
//! [`AnalysisError`] covers everything that can go wrong for a single
//! request. Callers branch on [`AnalysisError::kind()`] to tell an
//! unreadable upload apart from a photo without usable skin or a bad option.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::preference::UnknownPreference;

/// Failure of a single analysis request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No bytes were supplied
    #[error("image data is empty")]
    EmptyInput,

    /// Bytes could not be decoded as a JPEG or PNG image
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Image decoded, but too few pixels fall inside the skin thresholds
    #[error("no skin detected: found {found} skin pixels, need at least {required}")]
    NoSkinDetected { found: usize, required: usize },

    /// Style or formality outside the recognized values
    #[error(transparent)]
    UnknownPreference(#[from] UnknownPreference),
}

impl AnalysisError {
    /// The caller-facing category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::EmptyInput | AnalysisError::Decode(_) => ErrorKind::DecodeError,
            AnalysisError::NoSkinDetected { .. } => ErrorKind::NoSkinDetected,
            AnalysisError::UnknownPreference(_) => ErrorKind::UnknownPreference,
        }
    }
}

/// Distinguishable failure categories exposed to callers.
///
/// Serializes to the variant name, e.g. `"NoSkinDetected"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    DecodeError,
    NoSkinDetected,
    UnknownPreference,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DecodeError => "DecodeError",
            ErrorKind::NoSkinDetected => "NoSkinDetected",
            ErrorKind::UnknownPreference => "UnknownPreference",
        }
    }

    /// Short guidance suitable for showing to the person who uploaded the photo.
    pub fn guidance(&self) -> &'static str {
        match self {
            ErrorKind::DecodeError => "The file could not be read as an image. Upload a JPEG or PNG photo.",
            ErrorKind::NoSkinDetected => {
                "No skin was detected. Use a clearer, well-lit photo of your face."
            }
            ErrorKind::UnknownPreference => {
                "Invalid option. Style must be 'subtle' or 'bold'; formality must be 'casual' or 'professional'."
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invalid analyzer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A threshold range is reversed, non-finite or outside its channel's domain
    #[error("invalid {channel} range [{min}, {max}]")]
    InvalidRange {
        channel: &'static str,
        min: f32,
        max: f32,
    },

    /// Undertone margin must be finite and not negative
    #[error("invalid undertone margin {0} (must be finite and >= 0)")]
    InvalidMargin(f32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::PreferenceAxis;

    #[test]
    fn test_no_skin_message() {
        let error = AnalysisError::NoSkinDetected {
            found: 3,
            required: 50,
        };
        assert_eq!(
            error.to_string(),
            "no skin detected: found 3 skin pixels, need at least 50"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        let decode = AnalysisError::EmptyInput.kind();
        let no_skin = AnalysisError::NoSkinDetected {
            found: 0,
            required: 1,
        }
        .kind();
        let preference = AnalysisError::from(UnknownPreference {
            axis: PreferenceAxis::Style,
            value: "medium".to_string(),
        })
        .kind();

        assert_eq!(decode, ErrorKind::DecodeError);
        assert_eq!(no_skin, ErrorKind::NoSkinDetected);
        assert_eq!(preference, ErrorKind::UnknownPreference);
        assert_ne!(decode, no_skin);
        assert_ne!(no_skin, preference);
    }

    #[test]
    fn test_kind_serializes_to_name() {
        let json = serde_json::to_string(&ErrorKind::NoSkinDetected).unwrap();
        assert_eq!(json, "\"NoSkinDetected\"");
        assert_eq!(ErrorKind::DecodeError.to_string(), "DecodeError");
    }

    #[test]
    fn test_config_error_messages() {
        let error = ConfigError::InvalidRange {
            channel: "saturation",
            min: 0.8,
            max: 0.2,
        };
        assert_eq!(error.to_string(), "invalid saturation range [0.8, 0.2]");
        assert_eq!(
            ConfigError::InvalidMargin(-1.0).to_string(),
            "invalid undertone margin -1 (must be finite and >= 0)"
        );
    }
}
