// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Stack(StackError),
}

/// Specific error types for layer-stack configuration issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// Fewer than two layers were supplied; the comparator refuses to render.
    NotEnoughLayers {
        /// How many layers the caller provided.
        provided: usize,
    },
    /// A supplied image decoded to zero pixels.
    EmptyImage {
        /// Identifier of the offending layer.
        id: String,
    },
}

impl StackError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StackError::NotEnoughLayers { .. } => "error-stack-not-enough-layers",
            StackError::EmptyImage { .. } => "error-stack-empty-image",
        }
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::NotEnoughLayers { provided } => {
                write!(f, "A comparison needs at least 2 layers, got {}", provided)
            }
            StackError::EmptyImage { id } => {
                write!(f, "Layer '{}' decoded to an empty image", id)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Stack(e) => write!(f, "Stack Error: {}", e),
        }
    }
}

impl From<StackError> for Error {
    fn from(err: StackError) -> Self {
        Error::Stack(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn stack_error_converts_into_error() {
        let err: Error = StackError::NotEnoughLayers { provided: 1 }.into();
        match err {
            Error::Stack(StackError::NotEnoughLayers { provided }) => assert_eq!(provided, 1),
            _ => panic!("expected Stack variant"),
        }
    }

    #[test]
    fn stack_error_display_mentions_count() {
        let err = StackError::NotEnoughLayers { provided: 1 };
        assert!(format!("{}", err).contains("got 1"));
    }

    #[test]
    fn stack_error_i18n_keys() {
        assert_eq!(
            StackError::NotEnoughLayers { provided: 0 }.i18n_key(),
            "error-stack-not-enough-layers"
        );
        assert_eq!(
            StackError::EmptyImage { id: "plate".into() }.i18n_key(),
            "error-stack-empty-image"
        );
    }
}
