//! Forgiving standard base64 decoding, the `atob` equivalent.

use crate::constants::ALPHABET_BYTES;
use crate::Base64Error;

const PADDING_CHAR: u8 = b'=';

/// Reverse lookup: byte value to sextet, `-1` for bytes outside the alphabet.
static TABLE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
};

#[inline]
fn sextet(c: u8) -> Result<u8, Base64Error> {
    match TABLE[c as usize] {
        -1 => Err(Base64Error::InvalidBase64String),
        v => Ok(v as u8),
    }
}

/// Decodes a standard-alphabet base64 string to bytes.
///
/// Decoding is forgiving in the same places the host `atob` is: ASCII
/// whitespace is ignored, padding is optional, and the unused bits of the
/// final symbol are discarded rather than checked. Use
/// [`validate`](crate::validate) for strict canonical checking.
///
/// # Errors
///
/// * [`Base64Error::InvalidLength`] if the unpadded length leaves a single
///   dangling symbol.
/// * [`Base64Error::InvalidBase64String`] on any character outside
///   `[A-Za-z0-9+/]`, including `=` anywhere but the trailing padding.
///
/// # Example
///
/// ```
/// use b64web::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(from_base64("aGVs bG8").unwrap(), b"hello");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let mut data: Vec<u8> = encoded
        .bytes()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if data.len() % 4 == 0 {
        for _ in 0..2 {
            if data.last() == Some(&PADDING_CHAR) {
                data.pop();
            }
        }
    }

    if data.len() % 4 == 1 {
        tracing::trace!(length = data.len(), "dangling base64 symbol");
        return Err(Base64Error::InvalidLength);
    }

    let mut buf = Vec::with_capacity(data.len() / 4 * 3 + 2);

    let mut quartets = data.chunks_exact(4);
    for quartet in &mut quartets {
        let sextet0 = sextet(quartet[0])?;
        let sextet1 = sextet(quartet[1])?;
        let sextet2 = sextet(quartet[2])?;
        let sextet3 = sextet(quartet[3])?;

        buf.push((sextet0 << 2) | (sextet1 >> 4));
        buf.push((sextet1 << 4) | (sextet2 >> 2));
        buf.push((sextet2 << 6) | sextet3);
    }

    match *quartets.remainder() {
        [c0, c1] => {
            let sextet0 = sextet(c0)?;
            let sextet1 = sextet(c1)?;
            buf.push((sextet0 << 2) | (sextet1 >> 4));
        }
        [c0, c1, c2] => {
            let sextet0 = sextet(c0)?;
            let sextet1 = sextet(c1)?;
            let sextet2 = sextet(c2)?;
            buf.push((sextet0 << 2) | (sextet1 >> 4));
            buf.push((sextet1 << 4) | (sextet2 >> 2));
        }
        _ => {}
    }

    Ok(buf)
}
