//! Canonical BASE64 / BASE64URL validation.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::{TAIL_ONE_BYTE, TAIL_TWO_BYTES};
use crate::Options;

/// Quartets of data symbols followed by an optional partial quartet whose
/// unused low bits are zero ([RFC 4648 §3.5](https://tools.ietf.org/html/rfc4648#section-3.5)).
fn canonical_base64() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let grammar = format!(
            "^(?:[A-Za-z0-9+/]{{4}})*\
             (?:[A-Za-z0-9+/][{TAIL_ONE_BYTE}](?:==)?\
             |[A-Za-z0-9+/]{{2}}[{TAIL_TWO_BYTES}]=?)?$"
        );
        Regex::new(&grammar).expect("canonical base64 grammar compiles")
    })
}

/// Validates a BASE64 or BASE64URL encoded string.
///
/// Only canonical encodings pass: the bits left over in the final symbol of
/// a partial quartet must be zero. Strings mixing the standard (`+`, `/`)
/// and URL-safe (`-`, `_`) symbols never pass.
///
/// See [`Options`] for how `no_padding` and `url_safe` constrain the input.
///
/// # Example
///
/// ```
/// use b64web::{validate, Options};
///
/// assert!(validate("Zg==", &Options::default()));
/// assert!(!validate("Zh==", &Options::default()));
/// assert!(!validate("YQ", &Options::default().with_no_padding(false)));
/// assert!(!validate("ab+/ab-_", &Options::default()));
/// ```
pub fn validate(b64s: &str, opt: &Options) -> bool {
    if opt.no_padding == Some(false) && b64s.len() % 4 != 0 {
        return false;
    }
    if opt.no_padding == Some(true) && b64s.ends_with('=') {
        return false;
    }

    let mut b64s = Cow::Borrowed(b64s);
    if opt.url_safe != Some(false) {
        let standard = b64s.contains(['+', '/']);
        let url = b64s.contains(['-', '_']);
        if standard && (url || opt.url_safe == Some(true)) {
            return false;
        }
        if url {
            b64s = Cow::Owned(b64s.replace('-', "+").replace('_', "/"));
        }
    }

    canonical_base64().is_match(&b64s)
}
