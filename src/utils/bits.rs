//! Bit-level packing between `Vec<bool>` bit strings and bytes.
//!
//! Bit order within a byte is most-significant-bit first everywhere.

/// Group bits into bytes, left to right.
///
/// No padding decisions are made here; callers pad to a byte boundary first
/// (see [`pad_to_byte`]). A trailing partial group ends up left-aligned.
pub fn pack(bits: &[bool]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));

    for chunk in bits.chunks(8) {
        let mut current_byte = 0u8;
        for (bit_pos, &bit) in chunk.iter().enumerate() {
            if bit {
                current_byte |= 1 << (7 - bit_pos);
            }
        }
        bytes.push(current_byte);
    }

    bytes
}

/// Expand every byte into its 8 bits.
pub fn unpack(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        push_byte(&mut bits, byte);
    }
    bits
}

/// Number of zero bits needed to bring `bit_len` up to a byte boundary (0..=7).
pub fn padding_for(bit_len: usize) -> u8 {
    ((8 - bit_len % 8) % 8) as u8
}

/// Append zero bits up to the next byte boundary and return how many were added.
pub fn pad_to_byte(bits: &mut Vec<bool>) -> u8 {
    let padding = padding_for(bits.len());
    bits.resize(bits.len() + padding as usize, false);
    padding
}

pub fn push_byte(bits: &mut Vec<bool>, byte: u8) {
    for bit_pos in 0..8 {
        bits.push((byte >> (7 - bit_pos)) & 1 == 1);
    }
}

/// Read 8 bits as a byte. Returns `None` if fewer than 8 bits are given.
pub fn read_byte(bits: &[bool]) -> Option<u8> {
    let group = bits.get(..8)?;
    Some(group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
}
