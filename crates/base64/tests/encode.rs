//! Tests for encoding (encode, encode_text).

use b64web::{encode, encode_text, encode_text_with, to_base64, Base64Error, Options, TextEncoder};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let expected = base64_encode(&blob);
        assert_eq!(to_base64(&blob), expected, "Failed for blob of length {}", blob.len());
        assert_eq!(
            encode(&blob, &Options::default()),
            expected,
            "Failed for blob of length {}",
            blob.len()
        );
    }
}

#[test]
fn url_safe_rewrites_symbols_and_no_padding_strips() {
    for _ in 0..100 {
        let blob = generate_blob();
        let expected = base64_encode(&blob)
            .replace('+', "-")
            .replace('/', "_")
            .replace('=', "");
        assert_eq!(encode(&blob, &Options::url()), expected);
    }
}

#[test]
fn empty_input() {
    assert_eq!(encode(b"", &Options::default()), "");
    assert_eq!(encode(b"", &Options::url()), "");
    assert_eq!(encode_text("", &Options::default()), "");
}

#[test]
fn hello_scenarios() {
    let padded = Options::default()
        .with_url_safe(false)
        .with_no_padding(false);
    assert_eq!(encode_text("hello", &padded), "aGVsbG8=");
    assert_eq!(encode(b"hello", &Options::url()), "aGVsbG8");
}

#[test]
fn url_safe_keeps_padding_unless_asked() {
    let opt = Options::default().with_url_safe(true);
    assert_eq!(encode(&[0xfb, 0xff], &opt), "-_8=");
    assert_eq!(encode(&[0xff], &opt), "_w==");
}

#[test]
fn encodes_text_as_utf8() {
    assert_eq!(encode_text("żółw", &Options::default()), "xbzDs8WCdw==");
    assert_eq!(encode_text("żółw", &Options::url()), "xbzDs8WCdw");
}

struct Latin1;

impl TextEncoder for Latin1 {
    fn encode(&self, text: &str) -> Result<Vec<u8>, Base64Error> {
        text.chars()
            .map(|c| u8::try_from(c).map_err(|_| Base64Error::UnsupportedEncoding("latin1".into())))
            .collect()
    }
}

#[test]
fn custom_text_encoder() {
    assert_eq!(
        encode_text_with("é", &Options::default(), &Latin1).unwrap(),
        "6Q=="
    );
    assert!(encode_text_with("ż", &Options::default(), &Latin1).is_err());
}

/// Simple base64 encoding for test verification (no external dependency)
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::new();
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        result.push(ALPHABET[(b0 >> 2) as usize] as char);
        result.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            result.push(ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            result.push('=');
        }

        if chunk.len() > 2 {
            result.push(ALPHABET[(b2 & 0x3f) as usize] as char);
        } else {
            result.push('=');
        }
    }

    result
}
