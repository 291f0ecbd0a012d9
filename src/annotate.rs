//! Region annotation: the per-category sweep and the priority dispatch over categories.
use crate::annotate_options::SelectionMode;
use crate::annotation_index::AnnotationIndex;
use crate::category::Category;
use crate::closest::{select_closest, select_nearest, Match, Scan};
use crate::interval_store::IntervalStore;
use crate::query::QueryRegion;
use std::fmt;

/// Result of annotating a single query region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Hit { category: Category, best: Match },
    Intergenic,
}

impl fmt::Display for Annotation {
    /// The three tab-separated columns appended to the query line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Hit { category, best } => {
                write!(f, "{}\t{}\t{}", category, best.label, best.distance)
            }
            Annotation::Intergenic => f.write_str("intergenic\tNA\tNA"),
        }
    }
}

/// Find the best interval in `store` for `query`.
///
/// The intervals of `query.chrom` are walked in start order: intervals ending at or
/// before the query start are skipped, overlapping ones are offered to the selector and
/// the walk ends at the first interval starting at or after the query stop.
/// Returns None if the chromosome is absent or nothing overlaps.
pub fn annotate_region(
    store: &IntervalStore,
    query: &QueryRegion,
    mode: SelectionMode,
) -> Option<Match> {
    if !store.contains(query.chrom()) {
        return None;
    }
    let intervals = store.get(query.chrom()).ok()?;

    let mut best = None;
    for iv in intervals {
        if iv.stop <= query.start {
            continue;
        }
        if iv.start >= query.stop {
            break;
        }
        let (b, scan) = match mode {
            SelectionMode::Greedy => select_closest(best, query, iv),
            SelectionMode::Nearest => select_nearest(best, query, iv),
        };
        best = b;
        if scan == Scan::Stop {
            break;
        }
    }
    best
}

/// Annotate `query` with the first category, in priority order, that has a match.
pub fn annotate(index: &AnnotationIndex, query: &QueryRegion, mode: SelectionMode) -> Annotation {
    Category::PRIORITY
        .iter()
        .find_map(|&category| {
            annotate_region(index.store(category), query, mode)
                .map(|best| Annotation::Hit { category, best })
        })
        .unwrap_or(Annotation::Intergenic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Positioned;
    use crate::tests::helpers::{index_from, query, store_from};

    #[test]
    fn test_absent_chromosome_is_none() {
        let store = store_from(&[("chr1", 0, 100, "a")]);
        assert_eq!(
            annotate_region(&store, &query("chr2", 10, 20), SelectionMode::Greedy),
            None
        );
    }

    #[test]
    fn test_none_iff_no_overlap() {
        let store = store_from(&[
            ("chr1", 0, 100, "a"),
            ("chr1", 50, 60, "b"),
            ("chr1", 300, 400, "c"),
            ("chr1", 1000, 1001, "d"),
        ]);
        let intervals = store.get("chr1").unwrap();
        for (s, e) in [
            (0, 1),
            (99, 100),
            (100, 300),
            (100, 301),
            (399, 1000),
            (400, 1000),
            (1000, 1001),
            (1001, 5000),
            (55, 56),
        ] {
            let q = query("chr1", s, e);
            let any = intervals.iter().any(|iv| iv.overlaps(&q));
            for mode in [SelectionMode::Greedy, SelectionMode::Nearest] {
                assert_eq!(
                    annotate_region(&store, &q, mode).is_some(),
                    any,
                    "query {}-{} mode {:?}",
                    s,
                    e,
                    mode
                );
            }
        }
    }

    #[test]
    fn test_greedy_stops_at_first_worsening() {
        // query midpoint 1000 (doubled 2000). distances in start order: 10, 20, 5.
        let store = store_from(&[
            ("chr1", 900, 1120, "d10"),
            ("chr1", 910, 1130, "d20"),
            ("chr1", 920, 1090, "d5"),
        ]);
        let q = query("chr1", 950, 1050);
        let m = annotate_region(&store, &q, SelectionMode::Greedy).unwrap();
        assert_eq!(m.distance, 10);
        assert_eq!(m.label, "d10");

        let m = annotate_region(&store, &q, SelectionMode::Nearest).unwrap();
        assert_eq!(m.distance, 5);
        assert_eq!(m.label, "d5");
    }

    #[test]
    fn test_greedy_follows_improving_candidates() {
        let store = store_from(&[
            ("chr1", 0, 1400, "d150"),
            ("chr1", 300, 1000, "d100"),
            ("chr1", 480, 620, "d0"),
        ]);
        let m = annotate_region(&store, &query("chr1", 500, 600), SelectionMode::Greedy).unwrap();
        assert_eq!(m.label, "d0");
        assert_eq!(m.distance, 0);
    }

    #[test]
    fn test_skips_intervals_before_query() {
        let store = store_from(&[("chr1", 0, 10, "before"), ("chr1", 15, 25, "hit")]);
        let m = annotate_region(&store, &query("chr1", 10, 20), SelectionMode::Greedy).unwrap();
        assert_eq!(m.label, "hit");
        assert_eq!(m.distance, 5);
    }

    #[test]
    fn test_promoter_wins_over_exon() {
        let index = index_from(&[
            (Category::Exon, "chr1", 100, 200, "exonic"),
            (Category::Promoter, "chr1", 0, 1000, "prom"),
            (Category::Intron, "chr1", 100, 200, "intronic"),
        ]);
        let a = annotate(&index, &query("chr1", 150, 160), SelectionMode::Greedy);
        assert_eq!(
            a,
            Annotation::Hit {
                category: Category::Promoter,
                best: Match {
                    distance: 345,
                    label: String::from("prom")
                }
            }
        );
        assert_eq!(a.to_string(), "promoter\tprom\t345");
    }

    #[test]
    fn test_falls_through_to_later_categories() {
        let index = index_from(&[
            (Category::Promoter, "chr1", 0, 100, "prom"),
            (Category::Intron, "chr1", 500, 900, "intronic"),
            (Category::Enhancer, "chr1", 0, 2000, "enh"),
        ]);
        let a = annotate(&index, &query("chr1", 600, 700), SelectionMode::Greedy);
        assert_eq!(a.to_string(), "intron\tintronic\t50");
        let a = annotate(&index, &query("chr1", 1500, 1600), SelectionMode::Greedy);
        assert_eq!(a.to_string(), "enhancer\tenh\t550");
    }

    #[test]
    fn test_intergenic() {
        let index = index_from(&[(Category::Promoter, "chr1", 0, 100, "prom")]);
        let a = annotate(&index, &query("chrUn", 10, 20), SelectionMode::Greedy);
        assert_eq!(a, Annotation::Intergenic);
        assert_eq!(a.to_string(), "intergenic\tNA\tNA");
    }

    #[test]
    fn test_annotate_is_idempotent() {
        let index = index_from(&[
            (Category::Exon, "chr1", 100, 200, "e1"),
            (Category::Exon, "chr1", 150, 400, "e2"),
        ]);
        let q = query("chr1", 180, 260);
        let first = annotate(&index, &q, SelectionMode::Greedy);
        for _ in 0..5 {
            assert_eq!(annotate(&index, &q, SelectionMode::Greedy), first);
        }
    }
}
