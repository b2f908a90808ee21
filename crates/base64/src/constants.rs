/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: char = '=';

/*
      xxxx= 0123 4567 89AB CDEF
    00xxxx: ABCD EFGH IJKL MNOP
    01xxxx: QRST UVWX YZab cdef
    10xxxx: ghij klmn opqr stuv
    11xxxx: wxyz 0123 4567 89+/
*/

/// Symbols allowed as the second character of a one-byte tail (low 4 bits zero).
pub(crate) const TAIL_ONE_BYTE: &str = "AQgw";

/// Symbols allowed as the third character of a two-byte tail (low 2 bits zero).
pub(crate) const TAIL_TWO_BYTES: &str = "AEIMQUYcgkosw048";

#[cfg(test)]
mod tests {
    use super::*;

    fn sextet(c: char) -> usize {
        ALPHABET.find(c).unwrap()
    }

    #[test]
    fn tail_one_byte_has_four_zero_bits() {
        assert_eq!(TAIL_ONE_BYTE.len(), 4);
        for c in TAIL_ONE_BYTE.chars() {
            assert_eq!(sextet(c) & 0b1111, 0, "{c}");
        }
    }

    #[test]
    fn tail_two_bytes_has_two_zero_bits() {
        assert_eq!(TAIL_TWO_BYTES.len(), 16);
        for c in TAIL_TWO_BYTES.chars() {
            assert_eq!(sextet(c) & 0b11, 0, "{c}");
        }
    }

    #[test]
    fn alphabets_differ_only_in_last_two() {
        assert_eq!(ALPHABET[..62], ALPHABET_URL[..62]);
        assert_eq!(ALPHABET.as_bytes(), ALPHABET_BYTES);
    }
}
