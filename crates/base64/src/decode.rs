//! Strict standard base64 decoding.

use tracing::debug;

use crate::alphabet::{index_of, INVALID, INVERSE};
use crate::constants::{PAD, PAD_BYTE};
use crate::DecodeError;

/// Shape of the last quartet, decided by its trailing padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FinalGroup {
    /// No padding: the last quartet decodes like any other.
    Full,
    /// `xxx=`: three sextets, two bytes.
    Pad1,
    /// `xx==`: two sextets, one byte.
    Pad2,
}

impl FinalGroup {
    /// Reads the padding window of a non-empty input whose length is a multiple of 4.
    ///
    /// Only the last two positions are considered. A longer run of `=` leaves the
    /// earlier ones among the data positions, where they are rejected as misplaced.
    fn of(encoded: &[u8]) -> Self {
        match encoded {
            [.., PAD_BYTE, PAD_BYTE] => FinalGroup::Pad2,
            [.., PAD_BYTE] => FinalGroup::Pad1,
            _ => FinalGroup::Full,
        }
    }

    fn padding(self) -> usize {
        match self {
            FinalGroup::Full => 0,
            FinalGroup::Pad1 => 1,
            FinalGroup::Pad2 => 2,
        }
    }
}

/// Resolves the data symbol at `index`. Padding is never accepted here.
#[inline]
fn sextet(encoded: &[u8], index: usize) -> Result<u8, DecodeError> {
    let byte = encoded[index];
    match INVERSE[byte as usize] {
        INVALID if byte == PAD_BYTE => Err(DecodeError::InvalidPadding { index }),
        INVALID => Err(DecodeError::InvalidCharacter {
            index,
            character: char::from(byte),
        }),
        sextet => Ok(sextet),
    }
}

/// Checks the length and reads the padding window.
fn final_group(encoded: &[u8]) -> Result<FinalGroup, DecodeError> {
    let length = encoded.len();
    if length % 4 != 0 {
        return Err(DecodeError::MalformedLength { length });
    }
    if length == 0 {
        return Ok(FinalGroup::Full);
    }
    Ok(FinalGroup::of(encoded))
}

fn decode_groups(encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let last = final_group(encoded)?;
    let length = encoded.len();
    let padding = last.padding();
    let main_end = if padding > 0 { length - 4 } else { length };

    let mut buf = Vec::with_capacity((length >> 2) * 3 - padding);

    let mut i = 0;
    while i < main_end {
        let sextet0 = sextet(encoded, i)?;
        let sextet1 = sextet(encoded, i + 1)?;
        let sextet2 = sextet(encoded, i + 2)?;
        let sextet3 = sextet(encoded, i + 3)?;

        buf.push((sextet0 << 2) | (sextet1 >> 4));
        buf.push((sextet1 << 4) | (sextet2 >> 2));
        buf.push((sextet2 << 6) | sextet3);
        i += 4;
    }

    match last {
        FinalGroup::Full => {}
        FinalGroup::Pad1 => {
            let sextet0 = sextet(encoded, main_end)?;
            let sextet1 = sextet(encoded, main_end + 1)?;
            let sextet2 = sextet(encoded, main_end + 2)?;

            buf.push((sextet0 << 2) | (sextet1 >> 4));
            buf.push((sextet1 << 4) | (sextet2 >> 2));
        }
        FinalGroup::Pad2 => {
            let sextet0 = sextet(encoded, main_end)?;
            let sextet1 = sextet(encoded, main_end + 1)?;

            buf.push((sextet0 << 2) | (sextet1 >> 4));
        }
    }

    Ok(buf)
}

/// Finds the first problem in text holding non-ASCII characters, counting in characters.
///
/// Such text never decodes, so for a length that is a multiple of 4 the scan
/// always stops at a misplaced `=` or a foreign character.
fn reject_text(text: &str) -> Option<DecodeError> {
    let length = text.chars().count();
    if length % 4 != 0 {
        return Some(DecodeError::MalformedLength { length });
    }
    let padding = text.chars().rev().take(2).take_while(|&c| c == PAD).count();
    text.chars()
        .take(length - padding)
        .enumerate()
        .find_map(|(index, character)| match character {
            PAD => Some(DecodeError::InvalidPadding { index }),
            c if c.is_ascii() && index_of(c as u8).is_some() => None,
            character => Some(DecodeError::InvalidCharacter { index, character }),
        })
}

fn log_rejection(length: usize, err: &DecodeError) {
    debug!(
        length,
        index = ?err.index(),
        error = %err,
        "rejected base64 input"
    );
}

/// Decodes base64 from a byte slice of ASCII symbols.
///
/// The input must be a multiple of 4 long, hold only alphabet symbols at data
/// positions, and may end in one or two `=`. The empty input decodes to no bytes.
/// An offending non-ASCII byte is reported as the `char` with the same code point.
///
/// # Errors
///
/// Returns the first problem found, scanning left to right after the length check.
///
/// # Example
///
/// ```
/// use strict_base64::decode_bin;
///
/// let decoded = decode_bin(b"aGVsbG8=").unwrap();
/// assert_eq!(decoded, b"hello");
/// ```
pub fn decode_bin(encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_groups(encoded).inspect_err(|err| log_rejection(encoded.len(), err))
}

/// Decodes a standard base64 string.
///
/// Lengths and indices in errors count characters, so a non-ASCII character is
/// one position and is reported whole.
///
/// # Example
///
/// ```
/// use strict_base64::{decode, DecodeError};
///
/// assert_eq!(decode("TWFu").unwrap(), [77, 97, 110]);
/// assert_eq!(
///     decode("TW=u"),
///     Err(DecodeError::InvalidPadding { index: 2 })
/// );
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    if !text.is_ascii() {
        if let Some(err) = reject_text(text) {
            log_rejection(text.chars().count(), &err);
            return Err(err);
        }
    }
    decode_bin(text.as_bytes())
}

/// Returns the number of bytes `decode_bin(encoded)` would produce.
///
/// Runs the same validation as decoding without allocating the output.
///
/// # Example
///
/// ```
/// use strict_base64::decoded_len;
///
/// assert_eq!(decoded_len(b"Zm9vYg==").unwrap(), 4);
/// assert!(decoded_len(b"Zm9").is_err());
/// ```
pub fn decoded_len(encoded: &[u8]) -> Result<usize, DecodeError> {
    validate(encoded).inspect_err(|err| log_rejection(encoded.len(), err))
}

fn validate(encoded: &[u8]) -> Result<usize, DecodeError> {
    let padding = final_group(encoded)?.padding();
    let data_end = encoded.len() - padding;
    for index in 0..data_end {
        sextet(encoded, index)?;
    }
    Ok((encoded.len() >> 2) * 3 - padding)
}
