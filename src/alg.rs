#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
}

impl Default for Statistic {
    fn default() -> Self {
        Statistic::Mean
    }
}

impl Statistic {
    pub fn apply(self, values: &mut [u8]) -> u8 {
        match self {
            Statistic::Mean => truncated_mean(values),
            Statistic::Median => median(values),
        }
    }
}

pub fn truncated_mean(values: &[u8]) -> u8 {
    let sum = values.iter().map(|&v| u64::from(v)).sum::<u64>();
    (sum / values.len() as u64) as u8
}

// reorders `values`
pub fn median(values: &mut [u8]) -> u8 {
    let idx = values.len() / 2;
    *values.select_nth_unstable(idx).1
}
