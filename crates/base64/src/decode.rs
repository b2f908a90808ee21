//! BASE64 / BASE64URL decoding with alphabet auto-detection.

use std::borrow::Cow;

use crate::from_base64::from_base64;
use crate::text::{TextDecoder, Utf8};
use crate::{Base64Error, PAD};

/// Rewrites URL-safe symbols to standard ones and pads to a quartet boundary.
///
/// The input is treated as BASE64URL only when it carries no standard
/// `+`/`/` symbols; mixed input is left for the decoder to reject or accept.
fn normalize(b64s: &str) -> Cow<'_, str> {
    let mut b64s = Cow::Borrowed(b64s);
    if !b64s.contains(['+', '/']) && b64s.contains(['-', '_']) {
        tracing::trace!("decoding as base64url");
        b64s = Cow::Owned(b64s.replace('-', "+").replace('_', "/"));
    }
    let missing = b64s.len().wrapping_neg() & 3;
    if missing > 0 {
        b64s.to_mut().extend(std::iter::repeat(PAD).take(missing));
    }
    b64s
}

/// Decodes a BASE64 or BASE64URL string to bytes.
///
/// The alphabet is detected automatically and missing padding is restored.
/// Decoding is permissive: run [`validate`](crate::validate) first when
/// canonical input must be enforced.
///
/// # Errors
///
/// Fails when the normalized input is not decodable, see [`from_base64`].
///
/// # Example
///
/// ```
/// use b64web::decode;
///
/// assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(decode("-_8").unwrap(), [0xfb, 0xff]);
/// ```
pub fn decode(b64s: &str) -> Result<Vec<u8>, Base64Error> {
    from_base64(&normalize(b64s)).map_err(|err| {
        tracing::trace!(%err, length = b64s.len(), "base64 decode failed");
        err
    })
}

/// Decodes a BASE64 or BASE64URL string to UTF-8 text.
///
/// Malformed UTF-8 is replaced with U+FFFD. Use [`decode_with`] and
/// [`Utf8::fatal`] to reject it instead.
///
/// # Example
///
/// ```
/// use b64web::decode_text;
///
/// assert_eq!(decode_text("aGVsbG8=").unwrap(), "hello");
/// ```
pub fn decode_text(b64s: &str) -> Result<String, Base64Error> {
    decode_with(b64s, &Utf8::default())
}

/// Decodes a BASE64 or BASE64URL string and converts the bytes with `decoder`.
pub fn decode_with(b64s: &str, decoder: &dyn TextDecoder) -> Result<String, Base64Error> {
    let bytes = decode(b64s)?;
    decoder.decode(&bytes)
}

/// Decodes a BASE64 or BASE64URL string to text in the encoding named by `label`.
///
/// # Errors
///
/// Returns [`Base64Error::UnsupportedEncoding`] for labels other than UTF-8,
/// checked before the input is decoded.
pub fn decode_with_label(b64s: &str, label: &str) -> Result<String, Base64Error> {
    let decoder = Utf8::for_label(label)?;
    decode_with(b64s, &decoder)
}
