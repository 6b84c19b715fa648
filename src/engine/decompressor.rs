use tracing::{debug, error};

use crate::engine::{
    config::EngineConfig,
    huffman::{HuffmanNode, HuffmanTree},
    progress::{NoProgress, Progress, ProgressTracker},
    tree_codec,
};
use crate::format::{container::Container, error::CodecError};

#[derive(Debug, Clone, Default)]
pub struct Decompressor {
    config: EngineConfig,
}

impl Decompressor {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn decompress<P: Progress + ?Sized>(
        &self,
        data: &[u8],
        progress: &mut P,
    ) -> Result<Vec<u8>, CodecError> {
        let container = Container::decode(data)?;
        let tree = read_tree(&container)?;
        let payload_bits = container.payload_bits();

        let mut tracker =
            ProgressTracker::new(progress, self.config.progress_step, payload_bits.len());
        let out = walk(&tree, &payload_bits, &mut tracker)?;
        tracker.finish();

        debug!(
            "Decompressed {} bytes ({} payload bits) into {} bytes",
            data.len(),
            payload_bits.len(),
            out.len()
        );

        Ok(out)
    }
}

/// Deserialize the container's tree, which must use exactly its declared bits.
pub fn read_tree(container: &Container) -> Result<HuffmanTree, CodecError> {
    let tree_bits = container.tree_bits();
    let (tree, consumed) = tree_codec::deserialize(&tree_bits)?;
    if consumed != tree_bits.len() {
        error!(
            "Tree used {} of {} declared bits",
            consumed,
            tree_bits.len()
        );
        return Err(CodecError::CorruptTree);
    }
    Ok(tree)
}

/// Walk the tree once per payload bit, emitting a symbol at every leaf and
/// restarting at the root. Running out of bits away from the root means the
/// last code was cut short.
fn walk<P: Progress + ?Sized>(
    tree: &HuffmanTree,
    payload_bits: &[bool],
    tracker: &mut ProgressTracker<'_, P>,
) -> Result<Vec<u8>, CodecError> {
    let root = tree.root();
    let mut out = Vec::new();

    // Lone-leaf tree: every symbol is the single bit 0
    if let HuffmanNode::Leaf { symbol, .. } = root {
        for (i, &bit) in payload_bits.iter().enumerate() {
            tracker.advance(i);
            if bit {
                error!("Unexpected 1 bit at {} for single-symbol tree", i);
                return Err(CodecError::CorruptPayload);
            }
            out.push(*symbol);
        }
        return Ok(out);
    }

    let mut current = root;
    let mut at_root = true;
    for (i, &bit) in payload_bits.iter().enumerate() {
        tracker.advance(i);

        let HuffmanNode::Internal { left, right, .. } = current else {
            return Err(CodecError::CorruptPayload);
        };
        let next: &HuffmanNode = if bit { right } else { left };

        if let HuffmanNode::Leaf { symbol, .. } = next {
            out.push(*symbol);
            current = root;
            at_root = true;
        } else {
            current = next;
            at_root = false;
        }
    }

    if !at_root {
        error!("Payload ended mid-code after {} symbols", out.len());
        return Err(CodecError::CorruptPayload);
    }

    Ok(out)
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    Decompressor::default().decompress(data, &mut NoProgress)
}

pub fn decompress_with_progress<P: Progress + ?Sized>(
    data: &[u8],
    progress: &mut P,
) -> Result<Vec<u8>, CodecError> {
    Decompressor::default().decompress(data, progress)
}
