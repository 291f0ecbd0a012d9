use crate::category::Category;
use crate::interval::Interval;
use crate::interval_store::IntervalStore;

/// AnnotationIndex holds one finalized IntervalStore per category.
/// It is read-only once built.
#[derive(Debug, Default, Clone)]
pub struct AnnotationIndex {
    promoter: IntervalStore,
    exon: IntervalStore,
    intron: IntervalStore,
    enhancer: IntervalStore,
}

impl AnnotationIndex {
    pub fn builder() -> AnnotationIndexBuilder {
        AnnotationIndexBuilder::default()
    }

    #[inline]
    pub fn store(&self, category: Category) -> &IntervalStore {
        match category {
            Category::Promoter => &self.promoter,
            Category::Exon => &self.exon,
            Category::Intron => &self.intron,
            Category::Enhancer => &self.enhancer,
        }
    }
}

/// Collects intervals per category. `build` sorts every store.
#[derive(Debug, Default)]
pub struct AnnotationIndexBuilder {
    index: AnnotationIndex,
}

impl AnnotationIndexBuilder {
    pub fn add(&mut self, category: Category, chrom: &str, start: u64, stop: u64, label: &str) {
        self.store_mut(category).add(chrom, start, stop, label);
    }

    pub fn push(&mut self, category: Category, chrom: &str, interval: Interval) {
        self.store_mut(category).push(chrom, interval);
    }

    fn store_mut(&mut self, category: Category) -> &mut IntervalStore {
        match category {
            Category::Promoter => &mut self.index.promoter,
            Category::Exon => &mut self.index.exon,
            Category::Intron => &mut self.index.intron,
            Category::Enhancer => &mut self.index.enhancer,
        }
    }

    pub fn build(mut self) -> AnnotationIndex {
        for store in [
            &mut self.index.promoter,
            &mut self.index.exon,
            &mut self.index.intron,
            &mut self.index.enhancer,
        ] {
            store.finalize();
        }
        for category in Category::PRIORITY {
            let store = self.index.store(category);
            log::info!(
                "loaded {} {} intervals on {} chromosomes",
                store.len(),
                category,
                store.chromosomes().count()
            );
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_finalizes_every_store() {
        let mut b = AnnotationIndex::builder();
        b.add(Category::Exon, "chr1", 50, 60, "b");
        b.add(Category::Exon, "chr1", 10, 20, "a");
        b.add(Category::Enhancer, "chr2", 0, 5, "c");
        let index = b.build();
        for c in Category::PRIORITY {
            assert!(index.store(c).is_finalized());
        }
        assert_eq!(index.store(Category::Exon).get("chr1").unwrap()[0].label, "a");
        assert!(index.store(Category::Promoter).is_empty());
        assert!(index.store(Category::Enhancer).contains("chr2"));
    }
}
