//! The persisted configuration document.
//!
//! # Layout (for beginners)
//!
//! The configuration is a TOML file.  The root table is the container; each
//! child table is an *element* and each key inside it is an *attribute*:
//!
//! ```toml
//! [broadcast]
//! red = 255
//! green = 215
//! blue = 0
//! ```
//!
//! Attribute values are kept as text.  TOML strings are used verbatim, and
//! TOML integers, floats and booleans keep the exact spelling they have in the
//! file.  Conversion to typed values happens later, under the document's
//! locale, so `red = 300` and `red = "300"` fail in exactly the same way, and
//! `red = 255.0`, `interval = 3e2` or `interval = 1_000` are malformed
//! integers rather than silently accepted numbers.
//!
//! TOML integers are signed 64-bit, so an id above `i64::MAX` must be quoted.
//! Unquoted it is rejected by the TOML parser as a malformed document.
//!
//! Unknown elements and attributes are ignored.

pub mod fields;
pub mod template;

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use toml::Spanned;

use fields::FieldPath;

/// Errors produced while reading the document structure.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not valid TOML, or is not shaped as tables of scalars.
    #[error("malformed configuration document: {0}")]
    Malformed(#[from] toml::de::Error),

    /// An expected element or attribute is absent.
    #[error("missing attribute `{}` on element `{}`", .0.attribute, .0.element)]
    MissingField(FieldPath),
}

/// A scalar attribute value as it appears in TOML.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AttributeValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl AttributeValue {
    /// Textual form of the value.  `literal` is the value's source text, used
    /// for every non-string scalar so its spelling survives unchanged.
    fn into_text(self, literal: Option<&str>) -> String {
        match (self, literal) {
            (AttributeValue::Text(s), _) => s,
            (_, Some(literal)) => literal.to_string(),
            (AttributeValue::Integer(i), None) => i.to_string(),
            (AttributeValue::Float(f), None) => toml::Value::Float(f).to_string(),
            (AttributeValue::Boolean(b), None) => b.to_string(),
        }
    }
}

/// Parsed document: element name → attribute name → textual value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    elements: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigDocument {
    /// Parses document text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] for invalid TOML, a scalar at the
    /// root, or a non-scalar attribute value.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let raw: BTreeMap<String, BTreeMap<String, Spanned<AttributeValue>>> =
            toml::from_str(text)?;
        let elements = raw
            .into_iter()
            .map(|(element, attributes)| {
                let attributes = attributes
                    .into_iter()
                    .map(|(name, value)| {
                        let literal = text.get(value.span()).map(str::trim);
                        (name, value.into_inner().into_text(literal))
                    })
                    .collect();
                (element, attributes)
            })
            .collect();
        Ok(Self { elements })
    }

    /// Returns the textual value at `field`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingField`] if the element or the attribute
    /// is absent.
    pub fn attribute(&self, field: FieldPath) -> Result<&str, DocumentError> {
        self.elements
            .get(field.element)
            .and_then(|attributes| attributes.get(field.attribute))
            .map(String::as_str)
            .ok_or(DocumentError::MissingField(field))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
