use std::fmt::Debug;

/// A Positioned has a position on a chromosome. It is a bed-like (half-open) interval.
pub trait Positioned: Debug + Sync + Send {
    /// 0-based start position.
    fn start(&self) -> u64;

    /// non-inclusive end.
    fn stop(&self) -> u64;

    /// Twice the midpoint. Kept doubled so distances stay in integers.
    #[inline]
    fn doubled_midpoint(&self) -> u64 {
        self.start() + self.stop()
    }

    /// True if the two half-open intervals share at least one base.
    #[inline]
    fn overlaps<P: Positioned + ?Sized>(&self, other: &P) -> bool
    where
        Self: Sized,
    {
        other.start() < self.stop() && other.stop() > self.start()
    }
}

/// Distance between the midpoints of `a` and `b`, rounded down.
/// `|(a.start + a.stop) - (b.start + b.stop)| >> 1`
#[inline]
pub fn midpoint_distance<A: Positioned + ?Sized, B: Positioned + ?Sized>(a: &A, b: &B) -> u64 {
    a.doubled_midpoint().abs_diff(b.doubled_midpoint()) >> 1
}
