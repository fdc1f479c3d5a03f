use thiserror::Error;

/// Reasons a base64 input is rejected by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input length is not a multiple of 4.
    #[error("base64 input length {length} is not a multiple of 4")]
    MalformedLength { length: usize },
    /// A byte outside the alphabet was found at a data position.
    #[error("invalid base64 character {character:?} at index {index}")]
    InvalidCharacter { index: usize, character: char },
    /// The padding character appears outside the trailing one or two positions.
    #[error("misplaced base64 padding at index {index}")]
    InvalidPadding { index: usize },
}

impl DecodeError {
    /// Byte offset of the offending symbol, if the error points at one.
    pub fn index(&self) -> Option<usize> {
        match self {
            DecodeError::MalformedLength { .. } => None,
            DecodeError::InvalidCharacter { index, .. } | DecodeError::InvalidPadding { index } => {
                Some(*index)
            }
        }
    }
}
