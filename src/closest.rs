use crate::interval::Interval;
use crate::position::{midpoint_distance, Positioned};

/// The winning interval of one category for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// distance between query and interval midpoints, rounded down.
    pub distance: u64,
    pub label: String,
}

/// Whether the sweep over a chromosome should go on after a candidate was considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    Continue,
    Stop,
}

/// Compare `candidate` against the current best match for `query`.
///
/// The first candidate always wins. After that a strictly closer candidate replaces
/// the best and scanning continues; an equal or farther one ends the scan and the
/// current best is final. Intervals arrive in start order, not distance order, so a
/// closer interval after the first worsening is never seen.
pub fn select_closest<Q: Positioned + ?Sized>(
    current: Option<Match>,
    query: &Q,
    candidate: &Interval,
) -> (Option<Match>, Scan) {
    let distance = midpoint_distance(query, candidate);
    match current {
        Some(best) if distance >= best.distance => (Some(best), Scan::Stop),
        _ => (
            Some(Match {
                distance,
                label: candidate.label.clone(),
            }),
            Scan::Continue,
        ),
    }
}

/// Keep whichever of `current` and `candidate` is nearest; the earlier one wins ties.
/// Never asks to stop.
pub fn select_nearest<Q: Positioned + ?Sized>(
    current: Option<Match>,
    query: &Q,
    candidate: &Interval,
) -> (Option<Match>, Scan) {
    let distance = midpoint_distance(query, candidate);
    match current {
        Some(best) if distance >= best.distance => (Some(best), Scan::Continue),
        _ => (
            Some(Match {
                distance,
                label: candidate.label.clone(),
            }),
            Scan::Continue,
        ),
    }
}
