// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The bytes could not be decoded into a raster image.
    Decode(String),
    /// The composited avatar could not be serialized.
    Encode(String),
    /// The file's MIME type is not in the editor's allow-list.
    UnsupportedType(String),
    /// Fetching a remote avatar failed.
    Network(String),
    /// A `data:` URL was malformed or not base64-encoded.
    InvalidDataUrl(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Decode(_) => "error-decode",
            Error::Encode(_) => "error-encode",
            Error::UnsupportedType(_) => "error-unsupported-type",
            Error::Network(_) => "error-network",
            Error::InvalidDataUrl(_) => "error-invalid-data-url",
        }
    }

    /// Whether the error is a soft validation failure rather than a load failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::UnsupportedType(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Encode(e) => write!(f, "Encode Error: {}", e),
            Error::UnsupportedType(mime) => write!(f, "Unsupported image type: {}", mime),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::InvalidDataUrl(e) => write!(f, "Invalid data URL: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            image_rs::ImageError::Encoding(e) => Error::Encode(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::InvalidDataUrl(err.to_string())
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
    fn unsupported_type_is_validation_error() {
        let err = Error::UnsupportedType("image/gif".into());
        assert!(err.is_validation());
        assert!(format!("{}", err).contains("image/gif"));
        assert!(!Error::Decode("truncated".into()).is_validation());
    }

    #[test]
    fn base64_error_maps_to_invalid_data_url() {
        use base64::Engine;
        let err: Error = base64::engine::general_purpose::STANDARD
            .decode("***")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::InvalidDataUrl(_)));
    }

    #[test]
    fn i18n_keys() {
        assert_eq!(Error::Decode(String::new()).i18n_key(), "error-decode");
        assert_eq!(
            Error::UnsupportedType(String::new()).i18n_key(),
            "error-unsupported-type"
        );
        assert_eq!(Error::Network(String::new()).i18n_key(), "error-network");
    }
}
