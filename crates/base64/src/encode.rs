//! Standard base64 encoding.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};

/// Symbol pairs indexed by 12 bits of input, so each half of a 3-byte group
/// (see `encode_group`) costs one lookup.
static SYMBOL_PAIRS: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Returns the length of the padded encoding of `length` input bytes.
///
/// # Example
///
/// ```
/// use strict_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub const fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Symbols for a complete group of three bytes.
#[inline]
fn encode_group(o1: u8, o2: u8, o3: u8) -> [u8; 4] {
    let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
    let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);
    [SYMBOL_PAIRS[v1][0], SYMBOL_PAIRS[v1][1], SYMBOL_PAIRS[v2][0], SYMBOL_PAIRS[v2][1]]
}

/// Symbols for the one or two bytes left after the last complete group, padded to four.
#[inline]
fn encode_tail(o1: u8, o2: Option<u8>) -> [u8; 4] {
    match o2 {
        None => {
            let v1 = (o1 as usize) << 4;
            [SYMBOL_PAIRS[v1][0], SYMBOL_PAIRS[v1][1], PAD_BYTE, PAD_BYTE]
        }
        Some(o2) => {
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            [SYMBOL_PAIRS[v1][0], SYMBOL_PAIRS[v1][1], ALPHABET_BYTES[v2], PAD_BYTE]
        }
    }
}

/// Encodes a byte slice to a standard base64 string.
///
/// Every input is encodable; the result is `encoded_len(uint8.len())` characters long.
///
/// # Example
///
/// ```
/// use strict_base64::encode;
///
/// assert_eq!(encode(b"Man"), "TWFu");
/// assert_eq!(encode(&[255]), "/w==");
/// ```
pub fn encode(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(uint8.len()));

    let mut groups = uint8.chunks_exact(3);
    for group in &mut groups {
        let symbols = encode_group(group[0], group[1], group[2]);
        out.extend(symbols.iter().map(|&b| b as char));
    }

    if let [o1, rest @ ..] = groups.remainder() {
        out.extend(encode_tail(*o1, rest.first().copied()).iter().map(|&b| b as char));
    }

    out
}

/// Encodes bytes into the front of `dest` as ASCII, returning the number of bytes written.
///
/// # Panics
///
/// Panics if `dest` is shorter than `encoded_len(uint8.len())`.
///
/// # Example
///
/// ```
/// use strict_base64::encode_into;
///
/// let data = b"hello";
/// let mut dest = vec![0u8; 100];
/// let len = encode_into(data, &mut dest);
/// assert_eq!(&dest[..len], b"aGVsbG8=");
/// ```
pub fn encode_into(uint8: &[u8], dest: &mut [u8]) -> usize {
    let length = encoded_len(uint8.len());
    let dest = &mut dest[..length];
    let (body, tail) = uint8.split_at(uint8.len() - uint8.len() % 3);

    for (group, quad) in body.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
        quad.copy_from_slice(&encode_group(group[0], group[1], group[2]));
    }

    if let [o1, rest @ ..] = tail {
        dest[length - 4..].copy_from_slice(&encode_tail(*o1, rest.first().copied()));
    }

    length
}
