/// Deepest leaf a tree over a 256-symbol alphabet can have
pub const MAX_TREE_DEPTH: usize = 255;

/// Longest serialized tree: 256 leaves of 9 bits plus 255 internal-node bits
pub const MAX_TREE_BITS: u32 = 256 * 9 + 255;

/// Size of the byte alphabet
pub const ALPHABET_SIZE: usize = 256;
