use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use crate::engine::frequency::FrequencyTable;
use crate::format::error::CodecError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Combined frequency below this node. Trees read back from a container
    /// carry weight 0 everywhere.
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Priority queue entry. `order` breaks weight ties: leaves get their
/// first-seen position, merged nodes get increasing numbers after the leaves.
struct QueueEntry {
    weight: u64,
    order: usize,
    node: HuffmanNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.order == other.order
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.order.cmp(&self.order))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    pub fn build(freq: &FrequencyTable) -> Result<Self, CodecError> {
        let mut heap = BinaryHeap::with_capacity(freq.len());
        for (order, (symbol, count)) in freq.symbols().enumerate() {
            heap.push(QueueEntry {
                weight: count,
                order,
                node: HuffmanNode::Leaf {
                    symbol,
                    weight: count,
                },
            });
        }

        let mut next_order = heap.len();
        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
                break;
            };
            let node = HuffmanNode::merge(left.node, right.node);
            heap.push(QueueEntry {
                weight: node.weight(),
                order: next_order,
                node,
            });
            next_order += 1;
        }

        let root = heap.pop().ok_or(CodecError::EmptyInput)?.node;
        Ok(Self { root })
    }

    pub fn from_root(root: HuffmanNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Sum of leaf weights; equals the input length for a freshly built tree.
    pub fn total_weight(&self) -> u64 {
        fn sum(node: &HuffmanNode) -> u64 {
            match node {
                HuffmanNode::Leaf { weight, .. } => *weight,
                HuffmanNode::Internal { left, right, .. } => sum(left) + sum(right),
            }
        }
        sum(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        fn count(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 1,
                HuffmanNode::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }

    /// Length of the longest root-to-leaf path (0 for a lone leaf).
    pub fn depth(&self) -> usize {
        fn depth(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 0,
                HuffmanNode::Internal { left, right, .. } => 1 + depth(left).max(depth(right)),
            }
        }
        depth(&self.root)
    }
}

/// Symbol to bit pattern, `false` for a left edge and `true` for a right edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Vec<bool>>,
}

impl CodeTable {
    pub fn build(tree: &HuffmanTree) -> Self {
        fn build_codes(node: &HuffmanNode, code: Vec<bool>, table: &mut BTreeMap<u8, Vec<bool>>) {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    // Lone-leaf tree still needs a decodable code
                    table.insert(*symbol, if code.is_empty() { vec![false] } else { code });
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut left_code = code.clone();
                    left_code.push(false);
                    build_codes(left, left_code, table);

                    let mut right_code = code;
                    right_code.push(true);
                    build_codes(right, right_code, table);
                }
            }
        }

        let mut codes = BTreeMap::new();
        build_codes(tree.root(), Vec::new(), &mut codes);
        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs ordered by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_slice()))
    }

    pub fn code_lengths(&self) -> BTreeMap<u8, usize> {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.len()))
            .collect()
    }

    /// Payload bits needed to encode an input with these frequencies.
    pub fn encoded_bit_len(&self, freq: &FrequencyTable) -> u64 {
        freq.symbols()
            .map(|(symbol, count)| count * self.get(symbol).map_or(0, |c| c.len() as u64))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(input: &[u8]) -> (FrequencyTable, HuffmanTree, CodeTable) {
        let freq = FrequencyTable::build(input).unwrap();
        let tree = HuffmanTree::build(&freq).unwrap();
        let codes = CodeTable::build(&tree);
        (freq, tree, codes)
    }

    fn code(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let (_, tree, codes) = table_for(b"AABBCCC");
        assert_eq!(codes.len(), 3);
        let lengths = codes.code_lengths();
        assert_eq!(lengths[&b'A'], lengths[&b'B']);
        assert!(lengths[&b'C'] < lengths[&b'B']);
        assert_eq!(tree.total_weight(), 7);
        assert_eq!(tree.root().weight(), 7);
    }

    #[test]
    fn ties_break_by_first_appearance() {
        // a and b merge first, then c pairs with that subtree
        let (_, _, codes) = table_for(b"abc");
        assert_eq!(codes.get(b'c'), Some(code("0").as_slice()));
        assert_eq!(codes.get(b'a'), Some(code("10").as_slice()));
        assert_eq!(codes.get(b'b'), Some(code("11").as_slice()));

        let (_, _, codes) = table_for(b"cab");
        assert_eq!(codes.get(b'b'), Some(code("0").as_slice()));
        assert_eq!(codes.get(b'c'), Some(code("10").as_slice()));
        assert_eq!(codes.get(b'a'), Some(code("11").as_slice()));
    }

    #[test]
    fn single_symbol_gets_one_bit_code() {
        let (_, tree, codes) = table_for(b"AAAA");
        assert!(tree.root().is_leaf());
        assert_eq!(tree.depth(), 0);
        assert_eq!(codes.get(b'A'), Some([false].as_slice()));
    }

    #[test]
    fn codes_are_prefix_free() {
        let (_, tree, codes) = table_for(b"the quick brown fox jumps over the lazy dog");
        assert_eq!(tree.leaf_count(), codes.len());
        for (a, code_a) in codes.iter() {
            for (b, code_b) in codes.iter() {
                if a != b {
                    assert!(!code_b.starts_with(code_a), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn encoded_bit_len_matches_codes() {
        let (freq, _, codes) = table_for(b"mississippi");
        let expected: u64 = b"mississippi"
            .iter()
            .map(|&s| codes.get(s).unwrap().len() as u64)
            .sum();
        assert_eq!(codes.encoded_bit_len(&freq), expected);
    }
}
