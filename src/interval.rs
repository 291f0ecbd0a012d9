use crate::position::Positioned;
use std::fmt::Debug;

/// Interval is an annotated, half-open `[start, stop)` span on a chromosome.
/// The chromosome is implied by the store that holds it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Interval {
    pub start: u64,
    pub stop: u64,
    /// transcript name that produced this interval.
    pub label: String,
    /// doubled center of the span before `start` was clipped at 0.
    /// Distances are measured from here when set.
    pub unclipped_center: Option<u64>,
}

impl Interval {
    pub fn new<S: Into<String>>(start: u64, stop: u64, label: S) -> Self {
        Interval {
            start,
            stop,
            label: label.into(),
            unclipped_center: None,
        }
    }

    /// A window of `half_width` on either side of `center`. The stored start is clipped
    /// at 0, the midpoint stays at `center`. None if the window end overflows.
    pub fn around<S: Into<String>>(center: u64, half_width: u64, label: S) -> Option<Self> {
        let stop = center.checked_add(half_width)?;
        let doubled = center.checked_mul(2)?;
        let mut iv = Interval::new(center.saturating_sub(half_width), stop, label);
        if half_width > center {
            iv.unclipped_center = Some(doubled);
        }
        Some(iv)
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Positioned for Interval {
    #[inline]
    fn start(&self) -> u64 {
        self.start
    }
    #[inline]
    fn stop(&self) -> u64 {
        self.stop
    }
    #[inline]
    fn doubled_midpoint(&self) -> u64 {
        self.unclipped_center.unwrap_or(self.start + self.stop)
    }
}
