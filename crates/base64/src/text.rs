//! Text bridge: conversion between bytes and strings.
//!
//! UTF-8 is built in. Other character sets are supported by handing a custom
//! [`TextDecoder`] or [`TextEncoder`] to the `*_with` functions.

use crate::Base64Error;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// WHATWG Encoding Standard labels for UTF-8.
const UTF8_LABELS: [&str; 6] = [
    "unicode-1-1-utf-8",
    "unicode11utf8",
    "unicode20utf8",
    "utf-8",
    "utf8",
    "x-unicode20utf8",
];

/// Converts bytes to a string.
pub trait TextDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String, Base64Error>;
}

/// Converts a string to bytes.
pub trait TextEncoder {
    fn encode(&self, text: &str) -> Result<Vec<u8>, Base64Error>;
}

/// UTF-8 text codec.
///
/// The default instance mirrors a default web `TextDecoder`: malformed
/// sequences are replaced with U+FFFD and one leading byte order mark is
/// dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8 {
    fatal: bool,
    ignore_bom: bool,
}

impl Utf8 {
    /// A decoder that fails on malformed input instead of substituting.
    pub fn fatal() -> Self {
        Self {
            fatal: true,
            ignore_bom: false,
        }
    }

    /// Keep a leading byte order mark in the decoded text.
    pub fn ignore_bom(self) -> Self {
        Self {
            ignore_bom: true,
            ..self
        }
    }

    /// Resolves an encoding label, failing for anything other than UTF-8.
    ///
    /// ```
    /// use b64web::Utf8;
    ///
    /// assert!(Utf8::for_label(" UTF8 ").is_ok());
    /// assert!(Utf8::for_label("latin1").is_err());
    /// ```
    pub fn for_label(label: &str) -> Result<Self, Base64Error> {
        let normalized = label
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .to_ascii_lowercase();
        if UTF8_LABELS.contains(&normalized.as_str()) {
            Ok(Self::default())
        } else {
            tracing::trace!(label, "unsupported text encoding label");
            Err(Base64Error::UnsupportedEncoding(label.to_string()))
        }
    }
}

impl TextDecoder for Utf8 {
    fn decode(&self, bytes: &[u8]) -> Result<String, Base64Error> {
        let bytes = match bytes.strip_prefix(BOM) {
            Some(rest) if !self.ignore_bom => rest,
            _ => bytes,
        };
        if self.fatal {
            return std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|err| {
                    tracing::trace!(valid_up_to = err.valid_up_to(), "malformed utf-8");
                    Base64Error::InvalidUtf8 {
                        valid_up_to: err.valid_up_to(),
                    }
                });
        }
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

impl TextEncoder for Utf8 {
    fn encode(&self, text: &str) -> Result<Vec<u8>, Base64Error> {
        Ok(text.as_bytes().to_vec())
    }
}

/// Converts bytes to a string, UTF-8 by default.
///
/// # Errors
///
/// Returns [`Base64Error::UnsupportedEncoding`] when `label` does not name UTF-8.
///
/// # Example
///
/// ```
/// use b64web::bytes_to_text;
///
/// assert_eq!(bytes_to_text(b"hello", None).unwrap(), "hello");
/// assert_eq!(bytes_to_text(b"\xFFok", Some("utf-8")).unwrap(), "\u{FFFD}ok");
/// ```
pub fn bytes_to_text(bytes: &[u8], label: Option<&str>) -> Result<String, Base64Error> {
    let decoder = match label {
        Some(label) => Utf8::for_label(label)?,
        None => Utf8::default(),
    };
    decoder.decode(bytes)
}

/// Converts a string to bytes, UTF-8 by default.
///
/// # Errors
///
/// Returns [`Base64Error::UnsupportedEncoding`] when `label` does not name UTF-8.
pub fn text_to_bytes(text: &str, label: Option<&str>) -> Result<Vec<u8>, Base64Error> {
    let encoder = match label {
        Some(label) => Utf8::for_label(label)?,
        None => Utf8::default(),
    };
    encoder.encode(text)
}
