use crate::{
    alg::Statistic,
    error::FilterError,
    rows::{zeroed, PaddedRows},
};

/// Reusable `size * size` scratch for one neighborhood at a time.
pub struct Neighborhood {
    size: usize,
    statistic: Statistic,
    values: Vec<u8>,
}

impl Neighborhood {
    pub fn new(size: usize, statistic: Statistic) -> Result<Self, FilterError> {
        Ok(Self {
            size,
            statistic,
            values: zeroed(size, size)?,
        })
    }

    pub fn gather(&mut self, rows: &PaddedRows, col: usize) -> &[u8] {
        debug_assert_eq!(rows.size(), self.size);
        for (dst, src) in self
            .values
            .chunks_exact_mut(self.size)
            .zip(rows.window_rows(col))
        {
            dst.copy_from_slice(src);
        }
        &self.values
    }

    pub fn compute(&mut self, rows: &PaddedRows, col: usize) -> u8 {
        self.gather(rows, col);
        self.statistic.apply(&mut self.values)
    }
}
