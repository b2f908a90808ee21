//! BASE64 and BASE64URL encoding, decoding and validation (RFC 4648).
//!
//! This crate provides:
//! - Canonical validation, rejecting stray bits in the final symbol
//! - Decoding with automatic BASE64 / BASE64URL alphabet detection
//! - Encoding with configurable alphabet and padding
//! - A text bridge for decoding straight to (and encoding from) strings
//!
//! # Example
//!
//! ```
//! use b64web::{decode_text, encode_text, validate, Options};
//!
//! let opt = Options::url();
//! let encoded = encode_text("hello?", &opt);
//! assert_eq!(encoded, "aGVsbG8_");
//! assert!(validate(&encoded, &opt));
//! assert_eq!(decode_text(&encoded).unwrap(), "hello?");
//! ```

mod constants;
mod decode;
mod encode;
mod from_base64;
mod options;
mod text;
mod to_base64;
mod validate;

pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, PAD};
pub use decode::{decode, decode_text, decode_with, decode_with_label};
pub use encode::{encode, encode_text, encode_text_with, encode_text_with_label};
pub use from_base64::from_base64;
pub use options::Options;
pub use text::{bytes_to_text, text_to_bytes, TextDecoder, TextEncoder, Utf8};
pub use to_base64::to_base64;
pub use validate::validate;

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input string contains invalid base64 characters.
    #[error("INVALID_BASE64_STRING")]
    InvalidBase64String,
    /// The input leaves a single symbol that cannot encode a byte.
    #[error("Base64 string length must not leave a dangling symbol")]
    InvalidLength,
    /// The decoded bytes are not valid UTF-8.
    #[error("invalid utf-8 sequence after {valid_up_to} bytes")]
    InvalidUtf8 { valid_up_to: usize },
    /// The label does not name a supported character encoding.
    #[error("unsupported text encoding: {0:?}")]
    UnsupportedEncoding(String),
}
