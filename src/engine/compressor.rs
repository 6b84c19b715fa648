use tracing::debug;

use crate::engine::{
    config::EngineConfig,
    frequency::FrequencyTable,
    huffman::{CodeTable, HuffmanTree},
    progress::{NoProgress, Progress, ProgressTracker},
    tree_codec,
};
use crate::format::{container::Container, error::CodecError};
use crate::utils::bits;

#[derive(Debug, Clone, Default)]
pub struct Compressor {
    config: EngineConfig,
}

impl Compressor {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn compress<P: Progress + ?Sized>(
        &self,
        input: &[u8],
        progress: &mut P,
    ) -> Result<Vec<u8>, CodecError> {
        let freq = FrequencyTable::build(input)?;
        let tree = HuffmanTree::build(&freq)?;
        let codes = CodeTable::build(&tree);

        let mut tree_bits = tree_codec::serialize(&tree);
        // Bounded by MAX_TREE_BITS
        let tree_bit_length = tree_bits.len() as u32;
        bits::pad_to_byte(&mut tree_bits);
        let tree_bytes = bits::pack(&tree_bits);

        let mut payload_bits = Vec::with_capacity(codes.encoded_bit_len(&freq) as usize + 7);
        let mut tracker = ProgressTracker::new(progress, self.config.progress_step, input.len());
        for (i, &symbol) in input.iter().enumerate() {
            tracker.advance(i);
            if let Some(code) = codes.get(symbol) {
                payload_bits.extend_from_slice(code);
            }
        }
        let payload_bit_count = payload_bits.len();
        let payload_padding = bits::pad_to_byte(&mut payload_bits);

        let container = Container {
            tree_bit_length,
            tree_bytes,
            payload_padding,
            payload_bytes: bits::pack(&payload_bits),
        };
        let output = container.encode();
        tracker.finish();

        debug!(
            "Compressed {} bytes ({} symbols, tree {} bits, payload {} bits + {} padding) into {} bytes",
            input.len(),
            freq.len(),
            tree_bit_length,
            payload_bit_count,
            payload_padding,
            output.len()
        );

        Ok(output)
    }
}

pub fn compress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    Compressor::default().compress(input, &mut NoProgress)
}

pub fn compress_with_progress<P: Progress + ?Sized>(
    input: &[u8],
    progress: &mut P,
) -> Result<Vec<u8>, CodecError> {
    Compressor::default().compress(input, progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_layout() {
        let input = b"Hello, World! ";
        let out = compress(input).unwrap();

        let container = Container::decode(&out).unwrap();
        let freq = FrequencyTable::build(input).unwrap();
        let codes = CodeTable::build(&HuffmanTree::build(&freq).unwrap());
        let payload_bits = codes.encoded_bit_len(&freq) as usize;

        assert_eq!(container.payload_padding, bits::padding_for(payload_bits));
        assert_eq!(container.payload_bytes.len(), payload_bits.div_ceil(8));
        // 10 distinct symbols: 10 leaves of 9 bits plus 9 internal bits
        assert_eq!(container.tree_bit_length, 99);
        assert_eq!(container.tree_bytes.len(), 13);
    }

    #[test]
    fn single_symbol_payload_is_one_bit_per_byte() {
        let out = compress(b"AAAA").unwrap();
        let container = Container::decode(&out).unwrap();
        assert_eq!(container.tree_bit_length, 9);
        assert_eq!(container.payload_padding, 4);
        assert_eq!(container.payload_bytes, vec![0x00]);
    }

    #[test]
    fn output_is_deterministic() {
        let input = b"abracadabra, abracadabra";
        assert_eq!(compress(input).unwrap(), compress(input).unwrap());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(compress(b""), Err(CodecError::EmptyInput)));
    }

    #[test]
    fn progress_ends_with_single_100() {
        let mut seen = Vec::new();
        compress_with_progress(&[b'A'; 1000], &mut |p: u8| seen.push(p)).unwrap();
        assert!(seen.len() > 10);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(seen.last(), Some(&100));
    }
}
