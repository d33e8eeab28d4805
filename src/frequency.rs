//! Byte frequency counting.

/// Occurrence counts for each of the 256 byte values.
///
/// Only bytes that actually occur are reported by [`FrequencyTable::iter`];
/// absent bytes are not treated as zero-weight symbols.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; 256],
    total: u64,
    distinct: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
            distinct: 0,
        }
    }

    /// Count every byte of `input`.
    pub fn count(input: &[u8]) -> Self {
        let mut table = Self::new();
        for &b in input {
            table.counts[b as usize] += 1;
        }
        table.total = input.len() as u64;
        table.distinct = table.counts.iter().filter(|&&c| c > 0).count();
        table
    }

    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct byte values present.
    pub fn distinct(&self) -> usize {
        self.distinct
    }

    pub fn is_empty(&self) -> bool {
        self.distinct == 0
    }

    /// Present bytes and their counts, ascending by byte value.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(b, &c)| (b as u8, c))
    }

    /// Shannon entropy in bits per symbol, 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.iter()
            .map(|(_, c)| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
