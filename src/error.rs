// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! All fallible paths (filesystem, image decoding, TOML parsing) converge on
//! [`Error`]; the string payload carries the underlying cause for display
//! and logging.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Filesystem access failed.
    Io(String),
    /// An image could not be decoded.
    Decode(String),
    /// The settings file is unreadable or unserializable.
    Config(String),
    /// The gallery manifest is invalid.
    Manifest(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn describe(&self) -> (&'static str, &str) {
        match self {
            Error::Io(cause) => ("i/o error", cause),
            Error::Decode(cause) => ("decode error", cause),
            Error::Config(cause) => ("config error", cause),
            Error::Manifest(cause) => ("manifest error", cause),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, cause) = self.describe();
        write!(f, "{kind}: {cause}")
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_cause() {
        let err = Error::Manifest("missing collection".into());
        assert_eq!(err.to_string(), "manifest error: missing collection");

        let err = Error::Decode("truncated jpeg".into());
        assert_eq!(err.to_string(), "decode error: truncated jpeg");
    }

    #[test]
    fn io_errors_convert_with_their_message() {
        let err: Error = std::io::Error::other("boom").into();
        match err {
            Error::Io(cause) => assert!(cause.contains("boom")),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn toml_parse_failures_become_config_errors() {
        let parse_error = toml::from_str::<toml::Value>("not [valid").unwrap_err();
        assert!(matches!(Error::from(parse_error), Error::Config(_)));
    }
}
