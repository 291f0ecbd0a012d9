use crate::interval::Interval;
use hashbrown::HashMap;
use std::fmt;

/// Error returned when a chromosome is not in the store.
#[derive(Debug, PartialEq, Eq)]
pub enum LookupError {
    MissingChromosome(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupError::MissingChromosome(c) => write!(f, "chromosome not in store: {}", c),
        }
    }
}

impl std::error::Error for LookupError {}

/// IntervalStore holds the intervals of a single annotation category, grouped by chromosome.
/// Intervals are appended with `add` and sorted by start once with `finalize`.
/// Within a chromosome intervals may overlap.
#[derive(Debug, Default, Clone)]
pub struct IntervalStore {
    intervals: HashMap<String, Vec<Interval>>,
    finalized: bool,
}

impl IntervalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interval to `chrom`. No sorting happens here.
    /// Empty intervals (`start >= stop`) can never overlap a query and are dropped.
    pub fn add(&mut self, chrom: &str, start: u64, stop: u64, label: &str) {
        self.push(chrom, Interval::new(start, stop, label));
    }

    /// Like `add`, for an already built interval.
    pub fn push(&mut self, chrom: &str, interval: Interval) {
        debug_assert!(!self.finalized, "add called after finalize");
        if interval.start >= interval.stop {
            log::debug!(
                "skipping empty interval {}:{}-{} for {}",
                chrom,
                interval.start,
                interval.stop,
                interval.label
            );
            return;
        }
        match self.intervals.get_mut(chrom) {
            Some(v) => v.push(interval),
            None => {
                self.intervals.insert(String::from(chrom), vec![interval]);
            }
        }
    }

    /// Sort every chromosome by start. Ties keep their insertion order.
    pub fn finalize(&mut self) {
        for v in self.intervals.values_mut() {
            v.sort_by_key(|iv| iv.start);
        }
        self.finalized = true;
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    #[inline]
    pub fn contains(&self, chrom: &str) -> bool {
        self.intervals.contains_key(chrom)
    }

    /// The start-sorted intervals on `chrom`. Callers are expected to have checked `contains`.
    pub fn get(&self, chrom: &str) -> Result<&[Interval], LookupError> {
        debug_assert!(self.finalized, "get called before finalize");
        self.intervals
            .get(chrom)
            .map(|v| v.as_slice())
            .ok_or_else(|| LookupError::MissingChromosome(String::from(chrom)))
    }

    /// Total number of intervals over all chromosomes.
    pub fn len(&self) -> usize {
        self.intervals.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.values().all(|v| v.is_empty())
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.intervals.keys().map(|k| k.as_str())
    }
}
