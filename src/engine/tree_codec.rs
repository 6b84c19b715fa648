//! Pre-order tree serialization.
//!
//! ```text
//! Tree := '0' Tree Tree     internal node, left subtree first
//!       | '1' Byte8         leaf, symbol MSB-first
//! ```

use tracing::error;

use crate::engine::huffman::{HuffmanNode, HuffmanTree};
use crate::format::error::CodecError;
use crate::utils::bits;
use crate::utils::limits::MAX_TREE_DEPTH;

pub fn serialize(tree: &HuffmanTree) -> Vec<bool> {
    fn write_node(node: &HuffmanNode, out: &mut Vec<bool>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                out.push(true);
                bits::push_byte(out, *symbol);
            }
            HuffmanNode::Internal { left, right, .. } => {
                out.push(false);
                write_node(left, out);
                write_node(right, out);
            }
        }
    }

    let mut out = Vec::new();
    write_node(tree.root(), &mut out);
    out
}

/// Rebuild a tree from the front of `input`. Returns the tree and the number
/// of bits consumed; anything after that is left to the caller.
pub fn deserialize(input: &[bool]) -> Result<(HuffmanTree, usize), CodecError> {
    let mut reader = TreeReader { bits: input, pos: 0 };
    let root = reader.read_node(0)?;
    Ok((HuffmanTree::from_root(root), reader.pos))
}

struct TreeReader<'a> {
    bits: &'a [bool],
    pos: usize,
}

impl TreeReader<'_> {
    fn read_bit(&mut self) -> Result<bool, CodecError> {
        let bit = *self.bits.get(self.pos).ok_or_else(|| {
            error!("Tree bits exhausted at bit {}", self.pos);
            CodecError::CorruptTree
        })?;
        self.pos += 1;
        Ok(bit)
    }

    fn read_symbol(&mut self) -> Result<u8, CodecError> {
        let symbol = bits::read_byte(&self.bits[self.pos..]).ok_or_else(|| {
            error!("Leaf symbol truncated at bit {}", self.pos);
            CodecError::CorruptTree
        })?;
        self.pos += 8;
        Ok(symbol)
    }

    fn read_node(&mut self, depth: usize) -> Result<HuffmanNode, CodecError> {
        if self.read_bit()? {
            let symbol = self.read_symbol()?;
            return Ok(HuffmanNode::Leaf { symbol, weight: 0 });
        }

        // Children of this node would sit deeper than any real tree allows
        if depth >= MAX_TREE_DEPTH {
            error!("Tree nesting exceeds depth {}", MAX_TREE_DEPTH);
            return Err(CodecError::CorruptTree);
        }

        let left = self.read_node(depth + 1)?;
        let right = self.read_node(depth + 1)?;
        Ok(HuffmanNode::Internal {
            weight: 0,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
