/// The 64 symbols of RFC 4648 §4, in sextet order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// [`ALPHABET`] as bytes, for const evaluation of the lookup tables.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Fills the last one or two positions of an encoding whose input is not a multiple of 3 long.
pub const PAD: char = '=';

/// [`PAD`] as a byte.
pub const PAD_BYTE: u8 = b'=';
