use crate::annotation_index::AnnotationIndex;
use crate::category::Category;
use crate::interval_store::IntervalStore;
use crate::query::QueryRegion;

/// A finalized store from `(chrom, start, stop, label)` tuples.
pub(crate) fn store_from(intervals: &[(&str, u64, u64, &str)]) -> IntervalStore {
    let mut store = IntervalStore::new();
    for (chrom, start, stop, label) in intervals {
        store.add(chrom, *start, *stop, label);
    }
    store.finalize();
    store
}

pub(crate) fn index_from(intervals: &[(Category, &str, u64, u64, &str)]) -> AnnotationIndex {
    let mut builder = AnnotationIndex::builder();
    for (category, chrom, start, stop, label) in intervals {
        builder.add(*category, chrom, *start, *stop, label);
    }
    builder.build()
}

pub(crate) fn query(chrom: &'static str, start: u64, stop: u64) -> QueryRegion<'static> {
    QueryRegion {
        chrom,
        start,
        stop,
        line: "",
    }
}
