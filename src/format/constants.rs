//! Container layout constants

/// `tree_bit_length` header, big-endian u32
pub const HEADER_LEN: usize = 4;

/// `payload_padding` field
pub const PADDING_FIELD_LEN: usize = 1;

/// Payload padding is always less than one byte
pub const MAX_PAYLOAD_PADDING: u8 = 7;

/// Default file extension for containers
pub const DEFAULT_EXTENSION: &str = "huff";
