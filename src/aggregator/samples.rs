//! Keyed accumulation of samples.
//!
//! Samples sharing a size are folded into one bucket as they arrive, so
//! memory grows with the number of distinct sizes rather than the number of
//! samples. Buckets keep first-seen order until [`SampleAggregator::finalize`]
//! sorts them by size.

use super::counters::Dump;
use crate::parser::schema::PerfCtrDump;
use crate::utils::error::ConsistencyError;
use log::debug;
use std::collections::HashMap;

/// Owned map from sample size to summed counters
///
/// **Public** - one instance per log being processed
#[derive(Debug, Default)]
pub struct SampleAggregator {
    /// Buckets in first-seen order
    buckets: Vec<Dump>,

    /// size -> position in `buckets`
    index: HashMap<i32, usize>,

    ingested: usize,
}

impl SampleAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the bucket for its size
    ///
    /// **Public** - main entry point for aggregation
    ///
    /// The first sample of a size becomes the bucket as-is. Later samples are
    /// summed element-wise into it.
    ///
    /// # Errors
    /// Any shape mismatch against the existing bucket; the bucket is left
    /// untouched in that case.
    pub fn ingest(&mut self, dump: Dump) -> Result<(), ConsistencyError> {
        match self.index.get(&dump.size) {
            Some(&pos) => self.buckets[pos].add(&dump)?,
            None => {
                debug!("New bucket for size {}", dump.size);
                self.index.insert(dump.size, self.buckets.len());
                self.buckets.push(dump);
            }
        }

        self.ingested += 1;
        Ok(())
    }

    /// Convenience wrapper taking a decoded sample
    pub fn ingest_raw(&mut self, raw: &PerfCtrDump) -> Result<(), ConsistencyError> {
        self.ingest(Dump::from_raw(raw))
    }

    /// Bucket for `size`, if any sample of that size was seen
    pub fn get(&self, size: i32) -> Option<&Dump> {
        self.index.get(&size).map(|&pos| &self.buckets[pos])
    }

    /// Buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Dump> {
        self.buckets.iter()
    }

    /// Number of distinct sizes
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of samples folded in so far
    pub fn samples_ingested(&self) -> usize {
        self.ingested
    }

    /// Consume the aggregator, returning `(size, bucket)` sorted by size
    pub fn finalize(self) -> Vec<(i32, Dump)> {
        let mut sorted: Vec<(i32, Dump)> = self
            .buckets
            .into_iter()
            .map(|dump| (dump.size, dump))
            .collect();

        sorted.sort_by_key(|(size, _)| *size);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(size: i32, target: &[u64], pirates: &[&[u64]]) -> Dump {
        Dump::new(
            size,
            target.to_vec().into(),
            pirates.iter().map(|p| p.to_vec().into()).collect(),
        )
    }

    #[test]
    fn test_first_sample_becomes_bucket() {
        let mut agg = SampleAggregator::new();
        agg.ingest(dump(5, &[1, 2], &[&[3]])).unwrap();

        assert_eq!(agg.len(), 1);
        assert_eq!(agg.get(5).unwrap(), &dump(5, &[1, 2], &[&[3]]));
    }

    #[test]
    fn test_iter_keeps_first_seen_order() {
        let mut agg = SampleAggregator::new();
        for size in [9, 2, 9, 4] {
            agg.ingest(dump(size, &[1], &[])).unwrap();
        }

        let order: Vec<i32> = agg.iter().map(|d| d.size).collect();
        assert_eq!(order, vec![9, 2, 4]);
        assert_eq!(agg.samples_ingested(), 4);
    }

    #[test]
    fn test_finalize_sorted() {
        let mut agg = SampleAggregator::new();
        for size in [30, -1, 10, 20, 10] {
            agg.ingest(dump(size, &[1], &[])).unwrap();
        }

        let sizes: Vec<i32> = agg.finalize().into_iter().map(|(s, _)| s).collect();
        assert_eq!(sizes, vec![-1, 10, 20, 30]);
    }

    #[test]
    fn test_mismatch_does_not_count() {
        let mut agg = SampleAggregator::new();
        agg.ingest(dump(5, &[1, 2], &[])).unwrap();
        assert!(agg.ingest(dump(5, &[1], &[])).is_err());

        assert_eq!(agg.samples_ingested(), 1);
        assert_eq!(agg.get(5).unwrap().target.values(), &[1, 2]);
    }
}
