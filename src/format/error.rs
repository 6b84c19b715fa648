use std::fmt;

#[derive(Debug)]
pub enum CodecError {
    /// Compress was called with zero bytes.
    EmptyInput,
    /// Container shorter than the 4-byte tree length header.
    TruncatedHeader,
    /// Tree region shorter than declared, or the serialized tree is malformed.
    CorruptTree,
    /// Payload ended mid-code or its padding accounting is inconsistent.
    CorruptPayload,
    Io(std::io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::EmptyInput =>
                write!(f, "cannot compress empty input"),
            CodecError::TruncatedHeader =>
                write!(f, "container truncated before tree length header"),
            CodecError::CorruptTree =>
                write!(f, "corrupt serialized tree"),
            CodecError::CorruptPayload =>
                write!(f, "corrupt payload"),
            CodecError::Io(e) =>
                write!(f, "i/o failure: {}", e),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(e: std::io::Error) -> Self {
        CodecError::Io(e)
    }
}
