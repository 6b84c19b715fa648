use crate::format::error::CodecError;
use crate::utils::limits::ALPHABET_SIZE;

/// Occurrence counts per byte value, plus the order in which symbols first
/// appeared in the input. The first-seen order is the tree's tie-break key.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
    first_seen: Vec<u8>,
}

impl FrequencyTable {
    pub fn build(input: &[u8]) -> Result<Self, CodecError> {
        if input.is_empty() {
            return Err(CodecError::EmptyInput);
        }

        let mut counts = [0u64; ALPHABET_SIZE];
        let mut first_seen = Vec::new();
        for &symbol in input {
            let count = &mut counts[symbol as usize];
            if *count == 0 {
                first_seen.push(symbol);
            }
            *count += 1;
        }

        Ok(Self { counts, first_seen })
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Alphabet size.
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Sum of all counts, equal to the input length.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(symbol, count)` pairs in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.first_seen
            .iter()
            .map(move |&symbol| (symbol, self.counts[symbol as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_first_seen_order() {
        let table = FrequencyTable::build(b"banana").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 6);
        assert_eq!(
            table.symbols().collect::<Vec<_>>(),
            vec![(b'b', 1), (b'a', 3), (b'n', 2)]
        );
        assert_eq!(table.count(b'z'), 0);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(FrequencyTable::build(b""), Err(CodecError::EmptyInput)));
    }
}
