//! Fixed-length counter vectors and the per-sample dump view.

use crate::parser::schema::{PerfCtrDump, PerfCtrSample};
use crate::utils::error::ConsistencyError;

/// Ordered counter readings for one process
///
/// **Public** - the unit of element-wise aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterVector {
    values: Vec<u64>,
}

impl CounterVector {
    pub fn new(values: Vec<u64>) -> Self {
        Self { values }
    }

    /// Copy the counter list out of a decoded sample
    pub fn from_sample(sample: &PerfCtrSample) -> Self {
        Self::new(sample.ctr.clone())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Element-wise sum of two vectors of equal length
    ///
    /// # Errors
    /// * `ConsistencyError::LengthMismatch` - lengths differ
    pub fn add(&self, other: &CounterVector) -> Result<CounterVector, ConsistencyError> {
        self.check_len(other)?;

        Ok(Self::new(
            self.values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a.saturating_add(*b))
                .collect(),
        ))
    }

    /// In-place version of [`CounterVector::add`]; unchanged on error
    pub fn accumulate(&mut self, other: &CounterVector) -> Result<(), ConsistencyError> {
        self.check_len(other)?;

        for (a, b) in self.values.iter_mut().zip(&other.values) {
            *a = a.saturating_add(*b);
        }
        Ok(())
    }

    fn check_len(&self, other: &CounterVector) -> Result<(), ConsistencyError> {
        if self.len() != other.len() {
            return Err(ConsistencyError::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<u64>> for CounterVector {
    fn from(values: Vec<u64>) -> Self {
        Self::new(values)
    }
}

/// One sample as seen by the aggregator and the CSV renderer
///
/// **Public** - built from a raw [`PerfCtrDump`], also used as an
/// aggregation bucket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dump {
    /// Aggregation key (target cache size)
    pub size: i32,

    pub target: CounterVector,

    /// One vector per pirate, in pirate order
    pub pirates: Vec<CounterVector>,
}

impl Dump {
    pub fn new(size: i32, target: CounterVector, pirates: Vec<CounterVector>) -> Self {
        Self {
            size,
            target,
            pirates,
        }
    }

    /// Build the dump view of a decoded sample
    pub fn from_raw(raw: &PerfCtrDump) -> Self {
        let target = raw
            .t_sample
            .as_ref()
            .map(CounterVector::from_sample)
            .unwrap_or_default();

        Self {
            size: raw.size(),
            target,
            pirates: raw.p_sample.iter().map(CounterVector::from_sample).collect(),
        }
    }

    /// Sum `other` into this dump
    ///
    /// Every shape check runs before any counter is touched, so a failed
    /// merge leaves `self` exactly as it was.
    ///
    /// # Errors
    /// * `ConsistencyError::KeyMismatch` - different sizes
    /// * `ConsistencyError::TargetLength` - target vectors differ in length
    /// * `ConsistencyError::PirateCount` - different number of pirates
    /// * `ConsistencyError::PirateLength` - a pirate vector differs in length
    pub fn add(&mut self, other: &Dump) -> Result<(), ConsistencyError> {
        self.check_shape(other)?;

        self.target.accumulate(&other.target)?;
        for (mine, theirs) in self.pirates.iter_mut().zip(&other.pirates) {
            mine.accumulate(theirs)?;
        }
        Ok(())
    }

    fn check_shape(&self, other: &Dump) -> Result<(), ConsistencyError> {
        if self.size != other.size {
            return Err(ConsistencyError::KeyMismatch {
                expected: self.size,
                found: other.size,
            });
        }

        if self.target.len() != other.target.len() {
            return Err(ConsistencyError::TargetLength {
                size: self.size,
                expected: self.target.len(),
                found: other.target.len(),
            });
        }

        if self.pirates.len() != other.pirates.len() {
            return Err(ConsistencyError::PirateCount {
                size: self.size,
                expected: self.pirates.len(),
                found: other.pirates.len(),
            });
        }

        for (i, (mine, theirs)) in self.pirates.iter().zip(&other.pirates).enumerate() {
            if mine.len() != theirs.len() {
                return Err(ConsistencyError::PirateLength {
                    size: self.size,
                    pirate: i,
                    expected: mine.len(),
                    found: theirs.len(),
                });
            }
        }

        Ok(())
    }
}
