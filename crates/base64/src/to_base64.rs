//! Standard base64 encoding, the `btoa` equivalent.

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL};

/// Two-character lookup table: entry `i * 64 + j` holds symbols `i` and `j`.
type Table2 = [[u8; 2]; 4096];

const fn build_table2(alphabet: &[u8; 64]) -> Table2 {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            table[i * 64 + j] = [alphabet[i], alphabet[j]];
            j += 1;
        }
        i += 1;
    }
    table
}

const fn url_alphabet() -> [u8; 64] {
    let src = ALPHABET_URL.as_bytes();
    let mut out = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        out[i] = src[i];
        i += 1;
    }
    out
}

const URL_ALPHABET_BYTES: [u8; 64] = url_alphabet();

static TABLE2: Table2 = build_table2(ALPHABET_BYTES);
static TABLE2_URL: Table2 = build_table2(&URL_ALPHABET_BYTES);

/// Encodes a byte slice to a standard base64 string with `=` padding.
///
/// # Example
///
/// ```
/// use b64web::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    encode_into(uint8, false, true)
}

/// Encodes `uint8` choosing the alphabet and whether to pad the last quartet.
pub(crate) fn encode_into(uint8: &[u8], url_safe: bool, pad: bool) -> String {
    let (table2, alphabet) = if url_safe {
        (&TABLE2_URL, &URL_ALPHABET_BYTES)
    } else {
        (&TABLE2, ALPHABET_BYTES)
    };

    let mut out = Vec::with_capacity(uint8.len().div_ceil(3) * 4);

    let mut chunks = uint8.chunks_exact(3);
    for chunk in &mut chunks {
        let (o1, o2, o3) = (chunk[0] as usize, chunk[1] as usize, chunk[2] as usize);
        let v1 = (o1 << 4) | (o2 >> 4);
        let v2 = ((o2 & 0b1111) << 8) | o3;
        out.extend_from_slice(&table2[v1]);
        out.extend_from_slice(&table2[v2]);
    }

    match *chunks.remainder() {
        [o1] => {
            out.extend_from_slice(&table2[(o1 as usize) << 4]);
            if pad {
                out.extend_from_slice(b"==");
            }
        }
        [o1, o2] => {
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            out.extend_from_slice(&table2[v1]);
            out.push(alphabet[v2]);
            if pad {
                out.push(b'=');
            }
        }
        _ => {}
    }

    // Every pushed byte comes from an ASCII alphabet or is `=`.
    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_base64(b""), "");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(to_base64(b"f"), "Zg==");
        assert_eq!(to_base64(b"fo"), "Zm8=");
        assert_eq!(to_base64(b"foo"), "Zm9v");
        assert_eq!(to_base64(b"foob"), "Zm9vYg==");
        assert_eq!(to_base64(b"fooba"), "Zm9vYmE=");
        assert_eq!(to_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_url_alphabet_without_padding() {
        assert_eq!(encode_into(&[0xfb, 0xff], true, false), "-_8");
        assert_eq!(encode_into(&[0xfb, 0xff], false, true), "+/8=");
        assert_eq!(encode_into(b"f", true, false), "Zg");
    }

    #[test]
    fn test_binary_data() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = to_base64(&data);
        assert_eq!(encoded.len(), 344);
        for c in encoded.chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=',
                "Invalid base64 character: {}",
                c
            );
        }
    }
}
