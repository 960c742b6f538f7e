use std::fmt::{Display, Formatter};

/// Failure modes of the codec. Encode and decode are all-or-nothing: any
/// error means no partial output was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Encode or decode was handed an empty buffer.
    NullInput,
    /// The text front end met a character that does not fit in one byte.
    NonAsciiByte(char),
    /// The frame header, code table, or payload is inconsistent with the
    /// bytes actually present.
    FrameFormat(&'static str),
    /// Two code table entries map to the same code. The table came from a
    /// corrupt or foreign frame.
    DuplicateCode(u8, u8),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::NullInput => write!(f, "input data is empty"),
            CodecError::NonAsciiByte(c) => {
                write!(f, "character {:?} does not fit in one byte", c)
            }
            CodecError::FrameFormat(msg) => write!(f, "invalid frame: {}", msg),
            CodecError::DuplicateCode(a, b) => {
                write!(f, "code table maps byte values {} and {} to the same code", a, b)
            }
        }
    }
}

impl std::error::Error for CodecError {}

impl From<CodecError> for std::io::Error {
    fn from(err: CodecError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string())
    }
}
