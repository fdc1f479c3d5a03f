//! Standard base64 (RFC 4648 §4) encoding and strictly validating decoding.
//!
//! Encoding is total: every byte sequence maps to a padded string over
//! `A–Z a–z 0–9 + /`. Decoding rejects anything that [`encode`] could not have
//! produced in shape: lengths that are not a multiple of 4, symbols outside the
//! alphabet, and `=` anywhere but the last one or two positions.
//!
//! # Example
//!
//! ```
//! use strict_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod constants;
mod decode;
mod encode;
mod error;

pub use alphabet::{index_of, symbol_at};
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, PAD_BYTE};
pub use decode::{decode, decode_bin, decoded_len};
pub use encode::{encode, encode_into, encoded_len};
pub use error::DecodeError;
