//! Error type shared by the configuration use cases.

use std::path::PathBuf;

use bridge_core::document::fields::FieldPath;
use bridge_core::LocaleError;
use thiserror::Error;

/// Everything that can make a configuration load fatal.
///
/// A missing document is not an error: the loader answers it with
/// [`crate::application::LoadOutcome::DefaultsGenerated`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or is not tables of scalar attributes.
    #[error("malformed configuration document {path}: {source}")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An expected element or attribute is absent.
    #[error("missing attribute `{}` on element `{}`", .field.attribute, .field.element)]
    MissingField { field: FieldPath },

    /// An attribute's text could not be converted to the field's type.
    #[error("malformed value {value:?} for `{field}`: expected {expected}")]
    MalformedValue {
        field: FieldPath,
        value: String,
        expected: &'static str,
    },

    /// The `locale` element names no supported culture.
    #[error(transparent)]
    UnsupportedLocale(#[from] LocaleError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::document::fields::{BROADCAST_RED, LOCALE};

    #[test]
    fn test_missing_field_message_names_element_and_attribute() {
        let err = ConfigError::MissingField { field: LOCALE };
        assert_eq!(
            err.to_string(),
            "missing attribute `string` on element `locale`"
        );
    }

    #[test]
    fn test_malformed_value_message_includes_value_and_expectation() {
        let err = ConfigError::MalformedValue {
            field: BROADCAST_RED,
            value: "300".to_string(),
            expected: "an integer from 0 to 255",
        };
        assert_eq!(
            err.to_string(),
            "malformed value \"300\" for `broadcast.red`: expected an integer from 0 to 255"
        );
    }

    #[test]
    fn test_unsupported_locale_is_transparent() {
        let err: ConfigError = LocaleError::Unsupported("xx".to_string()).into();
        assert_eq!(err.to_string(), "unsupported locale identifier \"xx\"");
    }
}
