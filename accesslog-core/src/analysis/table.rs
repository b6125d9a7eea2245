use crate::analysis::dimension::Dimension;
use crate::analysis::error::AnalysisError;

/// Fixed-size hit counter keyed by one [`Dimension`].
///
/// The length is chosen at construction and never changes. Cells start at zero
/// and only grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    dimension: Dimension,
    counts: Vec<u64>,
}

impl FrequencyTable {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            counts: vec![0; dimension.slots()],
        }
    }

    /// Build a table with preset cells. Missing cells are zero, extra ones
    /// are ignored.
    pub fn from_counts(dimension: Dimension, counts: &[u64]) -> Self {
        let mut table = Self::new(dimension);
        for (cell, count) in table.counts.iter_mut().zip(counts) {
            *cell = *count;
        }
        table
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.counts.get(index).copied()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }

    pub(crate) fn record(&mut self, index: usize) -> Result<(), AnalysisError> {
        let len = self.counts.len();
        let Some(cell) = self.counts.get_mut(index) else {
            return Err(AnalysisError::IndexOutOfRange {
                dimension: self.dimension,
                index,
                len,
            });
        };
        *cell += 1;
        Ok(())
    }

    /// Add every cell of `other` into this table.
    pub(crate) fn absorb(&mut self, other: &FrequencyTable) {
        for (cell, count) in self.counts.iter_mut().zip(&other.counts) {
            *cell += *count;
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Index of the largest cell. Ties go to the lowest index, so a table of
    /// equal cells (all zero included) reports 0.
    pub fn busiest(&self) -> usize {
        let mut busiest = 0;
        for (index, count) in self.iter().skip(1) {
            if count > self.counts[busiest] {
                busiest = index;
            }
        }
        busiest
    }

    /// Index of the smallest cell. Ties go to the lowest index.
    pub fn quietest(&self) -> usize {
        let mut quietest = 0;
        for (index, count) in self.iter().skip(1) {
            if count < self.counts[quietest] {
                quietest = index;
            }
        }
        quietest
    }

    /// Start index of the `width`-cell window with the largest sum.
    ///
    /// Every index is a candidate start. Cells inside a window are read at
    /// `(start + offset) % modulus`, so a modulus smaller than the table makes
    /// late windows fold back onto early cells. The modulus is clamped to the
    /// table length.
    ///
    /// Only windows with a positive sum qualify, and ties go to the lowest
    /// start. Returns `None` when every window sums to zero.
    pub fn busiest_window(&self, width: usize, modulus: usize) -> Option<usize> {
        let modulus = modulus.clamp(1, self.counts.len().max(1));
        let mut max_total = 0;
        let mut busiest = None;

        for start in 0..self.counts.len() {
            let total: u64 = (0..width)
                .map(|offset| self.counts[(start + offset) % modulus])
                .sum();

            if total > max_total {
                max_total = total;
                busiest = Some(start);
            }
        }

        busiest
    }
}
