use tracing::error;

use crate::format::constants::{HEADER_LEN, MAX_PAYLOAD_PADDING, PADDING_FIELD_LEN};
use crate::format::error::CodecError;
use crate::utils::bits;
use crate::utils::limits::MAX_TREE_BITS;

/// On-disk layout:
///
/// ```text
/// tree_bit_length  4 bytes, big-endian
/// tree_bytes       ceil(tree_bit_length / 8) bytes, zero-padded
/// payload_padding  1 byte (0..=7)
/// payload_bytes    remainder
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub tree_bit_length: u32,
    pub tree_bytes: Vec<u8>,
    pub payload_padding: u8,
    pub payload_bytes: Vec<u8>,
}

impl Container {
    pub fn decode(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() < HEADER_LEN {
            error!("Container too short for header: {} bytes", buf.len());
            return Err(CodecError::TruncatedHeader);
        }

        let tree_bit_length = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);
        if tree_bit_length > MAX_TREE_BITS {
            error!("Declared tree length {} bits exceeds {}", tree_bit_length, MAX_TREE_BITS);
            return Err(CodecError::CorruptTree);
        }

        let tree_byte_count = (tree_bit_length as usize).div_ceil(8);
        let rest = &buf[HEADER_LEN..];
        if rest.len() < tree_byte_count {
            error!(
                "Tree region truncated: {} bytes needed, {} available",
                tree_byte_count,
                rest.len()
            );
            return Err(CodecError::CorruptTree);
        }
        let (tree_bytes, rest) = rest.split_at(tree_byte_count);

        if rest.len() < PADDING_FIELD_LEN {
            error!("Container ends before payload padding field");
            return Err(CodecError::CorruptPayload);
        }
        let payload_padding = rest[0];
        let payload_bytes = &rest[PADDING_FIELD_LEN..];

        if payload_padding > MAX_PAYLOAD_PADDING
            || payload_padding as usize > payload_bytes.len() * 8
        {
            error!(
                "Invalid payload padding {} for {} payload bytes",
                payload_padding,
                payload_bytes.len()
            );
            return Err(CodecError::CorruptPayload);
        }

        Ok(Self {
            tree_bit_length,
            tree_bytes: tree_bytes.to_vec(),
            payload_padding,
            payload_bytes: payload_bytes.to_vec(),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.extend_from_slice(&self.tree_bit_length.to_be_bytes());
        buf.extend_from_slice(&self.tree_bytes);
        buf.push(self.payload_padding);
        buf.extend_from_slice(&self.payload_bytes);
        buf
    }

    /// Serialized tree with its byte padding removed.
    pub fn tree_bits(&self) -> Vec<bool> {
        let mut tree_bits = bits::unpack(&self.tree_bytes);
        tree_bits.truncate(self.tree_bit_length as usize);
        tree_bits
    }

    /// Payload bits with the trailing padding removed.
    pub fn payload_bits(&self) -> Vec<bool> {
        let mut payload_bits = bits::unpack(&self.payload_bytes);
        let len = payload_bits.len().saturating_sub(self.payload_padding as usize);
        payload_bits.truncate(len);
        payload_bits
    }

    /// Total encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.tree_bytes.len() + PADDING_FIELD_LEN + self.payload_bytes.len()
    }
}
