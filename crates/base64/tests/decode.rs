//! Tests for base64 decoding (decode).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;
use strict_base64::{decode, encode, DecodeError};

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        assert_eq!(decode(&encoded).unwrap(), blob);
        assert_eq!(decode(&STANDARD.encode(&blob)).unwrap(), blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let mut blob = generate_blob();
        // Unpadded, so the appended quartet is the first problem.
        blob.truncate(blob.len() - blob.len() % 3);
        let encoded = encode(&blob);
        let invalid = format!("{}!!!!", encoded);
        assert_eq!(
            decode(&invalid),
            Err(DecodeError::InvalidCharacter {
                index: encoded.len(),
                character: '!'
            })
        );
    }
}

#[test]
fn rejects_appended_padding() {
    for _ in 0..100 {
        let mut blob = generate_blob();
        blob.push(0);
        let encoded = encode(&blob);
        let invalid = format!("{}====", encoded);
        let err = decode(&invalid).unwrap_err();
        assert!(
            matches!(err, DecodeError::InvalidPadding { index } if index < invalid.len() - 2),
            "unexpected {err:?} for {invalid}"
        );
    }
}

#[test]
fn empty_input() {
    assert_eq!(decode("").unwrap(), b"");
}

#[test]
fn known_vectors() {
    assert_eq!(decode("TWFu").unwrap(), [77, 97, 110]);
    assert_eq!(decode("/w==").unwrap(), [255]);
    assert_eq!(decode("//8=").unwrap(), [255, 255]);
    assert_eq!(decode("Zm9vYmFy").unwrap(), b"foobar");
}

#[test]
fn rejects_line_breaks() {
    assert_eq!(
        decode("Zm9v\nYmFy"),
        Err(DecodeError::MalformedLength { length: 9 })
    );
    assert_eq!(
        decode("Zm9\nYmFy"),
        Err(DecodeError::InvalidCharacter {
            index: 3,
            character: '\n'
        })
    );
}

#[test]
fn rejects_url_safe_symbols() {
    assert_eq!(
        decode("-_-_"),
        Err(DecodeError::InvalidCharacter {
            index: 0,
            character: '-'
        })
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        DecodeError::MalformedLength { length: 5 }.to_string(),
        "base64 input length 5 is not a multiple of 4"
    );
    assert_eq!(
        DecodeError::InvalidCharacter {
            index: 3,
            character: '!'
        }
        .to_string(),
        "invalid base64 character '!' at index 3"
    );
    assert_eq!(
        DecodeError::InvalidPadding { index: 1 }.to_string(),
        "misplaced base64 padding at index 1"
    );
}
