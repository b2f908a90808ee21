//! BASE64 / BASE64URL encoding.

use crate::text::{TextEncoder, Utf8};
use crate::to_base64::encode_into;
use crate::{Base64Error, Options};

/// Encodes bytes to a BASE64 or BASE64URL string.
///
/// Unset options encode standard BASE64 with `=` padding.
///
/// # Example
///
/// ```
/// use b64web::{encode, Options};
///
/// assert_eq!(encode(b"hello", &Options::default()), "aGVsbG8=");
/// assert_eq!(encode(b"hello", &Options::url()), "aGVsbG8");
/// assert_eq!(encode(&[0xfb, 0xff], &Options::default().with_url_safe(true)), "-_8=");
/// ```
pub fn encode(data: &[u8], opt: &Options) -> String {
    encode_into(data, opt.uses_url_alphabet(), opt.pads())
}

/// Encodes the UTF-8 bytes of `text` to a BASE64 or BASE64URL string.
///
/// # Example
///
/// ```
/// use b64web::{encode_text, Options};
///
/// assert_eq!(encode_text("hello", &Options::default()), "aGVsbG8=");
/// ```
pub fn encode_text(text: &str, opt: &Options) -> String {
    encode(text.as_bytes(), opt)
}

/// Converts `text` to bytes with `encoder`, then encodes them.
///
/// # Errors
///
/// Propagates any error raised by `encoder`.
pub fn encode_text_with(
    text: &str,
    opt: &Options,
    encoder: &dyn TextEncoder,
) -> Result<String, Base64Error> {
    let bytes = encoder.encode(text)?;
    Ok(encode(&bytes, opt))
}

/// Encodes `text` using the character encoding named by `label`.
///
/// # Errors
///
/// Returns [`Base64Error::UnsupportedEncoding`] for labels other than UTF-8.
pub fn encode_text_with_label(
    text: &str,
    opt: &Options,
    label: &str,
) -> Result<String, Base64Error> {
    encode_text_with(text, opt, &Utf8::for_label(label)?)
}
