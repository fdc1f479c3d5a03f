//! Symbol <-> sextet translation over the standard alphabet.

use crate::constants::ALPHABET_BYTES;

/// Marks bytes with no place in the alphabet. The padding byte is one of them.
pub(crate) const INVALID: u8 = 0xFF;

/// Reverse lookup table, total over every byte value.
pub(crate) static INVERSE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the alphabet symbol for a sextet. Only the low 6 bits of `index` are used.
///
/// # Example
///
/// ```
/// use strict_base64::symbol_at;
///
/// assert_eq!(symbol_at(0), b'A');
/// assert_eq!(symbol_at(63), b'/');
/// ```
#[inline]
pub fn symbol_at(index: u8) -> u8 {
    ALPHABET_BYTES[(index & 0b11_1111) as usize]
}

/// Returns the sextet value of an alphabet symbol, or `None` for anything else.
///
/// The padding byte `=` is not an alphabet symbol and resolves to `None`.
///
/// # Example
///
/// ```
/// use strict_base64::index_of;
///
/// assert_eq!(index_of(b'T'), Some(19));
/// assert_eq!(index_of(b'='), None);
/// ```
#[inline]
pub fn index_of(symbol: u8) -> Option<u8> {
    match INVERSE[symbol as usize] {
        INVALID => None,
        sextet => Some(sextet),
    }
}
