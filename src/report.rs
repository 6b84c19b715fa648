use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::{
    decompressor::read_tree, huffman::CodeTable, Compressor, Decompressor, EngineConfig,
    NoProgress,
};
use crate::format::{container::Container, error::CodecError};
use crate::utils::crc::crc32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Compress,
    Decompress,
}

/// Sizes before and after one file job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobReport {
    pub operation: Operation,
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// output / input
    pub ratio: f64,
}

impl JobReport {
    pub fn new(operation: Operation, input_bytes: usize, output_bytes: usize) -> Self {
        let ratio = if input_bytes > 0 {
            output_bytes as f64 / input_bytes as f64
        } else {
            0.0
        };
        Self {
            operation,
            input_bytes: input_bytes as u64,
            output_bytes: output_bytes as u64,
            ratio,
        }
    }
}

/// In-memory compress + decompress of one buffer, compared by CRC32.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyReport {
    pub original_bytes: u64,
    pub container_bytes: u64,
    pub original_crc32: u32,
    pub restored_crc32: u32,
    pub matches: bool,
}

impl VerifyReport {
    pub fn run(original: &[u8], config: &EngineConfig) -> Result<Self, CodecError> {
        let container = Compressor::new(config.clone()).compress(original, &mut NoProgress)?;
        let restored = Decompressor::new(config.clone()).decompress(&container, &mut NoProgress)?;

        let original_crc32 = crc32(original);
        let restored_crc32 = crc32(&restored);
        Ok(Self {
            original_bytes: original.len() as u64,
            container_bytes: container.len() as u64,
            original_crc32,
            restored_crc32,
            matches: original.len() == restored.len() && original_crc32 == restored_crc32,
        })
    }
}

/// Header-level view of a container; the payload is not decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub tree_bit_length: u32,
    pub alphabet_size: usize,
    pub max_code_length: usize,
    pub payload_padding: u8,
    pub payload_bytes: u64,
    pub payload_bits: u64,
    pub code_lengths: BTreeMap<u8, usize>,
}

impl InspectReport {
    pub fn from_container(data: &[u8]) -> Result<Self, CodecError> {
        let container = Container::decode(data)?;
        let tree = read_tree(&container)?;
        let code_lengths = CodeTable::build(&tree).code_lengths();

        let payload_bytes = container.payload_bytes.len() as u64;
        Ok(Self {
            tree_bit_length: container.tree_bit_length,
            alphabet_size: code_lengths.len(),
            max_code_length: code_lengths.values().copied().max().unwrap_or(0),
            payload_padding: container.payload_padding,
            payload_bytes,
            payload_bits: payload_bytes * 8 - container.payload_padding as u64,
            code_lengths,
        })
    }
}
