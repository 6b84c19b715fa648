use huffpack::engine::frequency::FrequencyTable;
use huffpack::engine::huffman::{CodeTable, HuffmanTree};
use huffpack::engine::tree_codec;
use huffpack::utils::bits;
use huffpack::{compress, decompress};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_round_trip(input in prop::collection::vec(any::<u8>(), 1..2000)) {
        let data = compress(&input).unwrap();
        prop_assert_eq!(decompress(&data).unwrap(), input);
    }

    #[test]
    fn test_small_alphabet_round_trip(input in prop::collection::vec(0..3u8, 1..500)) {
        let data = compress(&input).unwrap();
        prop_assert_eq!(decompress(&data).unwrap(), input);
    }

    #[test]
    fn test_codes_prefix_free(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let tree = HuffmanTree::build(&FrequencyTable::build(&input).unwrap()).unwrap();
        let codes = CodeTable::build(&tree);
        prop_assert_eq!(codes.len(), tree.leaf_count());
        for (a, code_a) in codes.iter() {
            prop_assert!(!code_a.is_empty());
            for (b, code_b) in codes.iter() {
                if a != b {
                    prop_assert!(!code_b.starts_with(code_a));
                }
            }
        }
    }

    #[test]
    fn test_frequency_conservation(input in prop::collection::vec(any::<u8>(), 1..1000)) {
        let freq = FrequencyTable::build(&input).unwrap();
        prop_assert_eq!(freq.total(), input.len() as u64);
        let tree = HuffmanTree::build(&freq).unwrap();
        prop_assert_eq!(tree.total_weight(), input.len() as u64);
    }

    #[test]
    fn test_tree_round_trip(input in prop::collection::vec(any::<u8>(), 1..1000)) {
        let tree = HuffmanTree::build(&FrequencyTable::build(&input).unwrap()).unwrap();
        let serialized = tree_codec::serialize(&tree);
        let (decoded, consumed) = tree_codec::deserialize(&serialized).unwrap();
        prop_assert_eq!(consumed, serialized.len());
        prop_assert_eq!(
            CodeTable::build(&decoded).code_lengths(),
            CodeTable::build(&tree).code_lengths()
        );
    }

    #[test]
    fn test_pack_round_trip(bytes in prop::collection::vec(any::<bool>(), 0..64)) {
        let mut input = bytes;
        bits::pad_to_byte(&mut input);
        prop_assert_eq!(bits::unpack(&bits::pack(&input)), input);
    }

    #[test]
    fn test_deterministic(input in prop::collection::vec(any::<u8>(), 1..500)) {
        prop_assert_eq!(compress(&input).unwrap(), compress(&input).unwrap());
    }

    #[test]
    fn test_garbage_never_panics(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let _ = decompress(&data);
    }
}
