use crate::annotate::{annotate, Annotation};
use crate::annotate_options::SelectionMode;
use crate::annotation_index::AnnotationIndex;
use crate::category::Category;
use crate::query::{parse_query_line, QueryLine};
use crate::writer::Writer;
use std::fmt;
use std::io::{self, BufRead};

/// How many query regions fell into each category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportCounts {
    pub promoter: usize,
    pub exon: usize,
    pub intron: usize,
    pub enhancer: usize,
    pub intergenic: usize,
}

impl ReportCounts {
    fn record(&mut self, annotation: &Annotation) {
        match annotation {
            Annotation::Hit { category, .. } => match category {
                Category::Promoter => self.promoter += 1,
                Category::Exon => self.exon += 1,
                Category::Intron => self.intron += 1,
                Category::Enhancer => self.enhancer += 1,
            },
            Annotation::Intergenic => self.intergenic += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.promoter + self.exon + self.intron + self.enhancer + self.intergenic
    }
}

impl fmt::Display for ReportCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "promoter: {}, exon: {}, intron: {}, enhancer: {}, intergenic: {}",
            self.promoter, self.exon, self.intron, self.enhancer, self.intergenic
        )
    }
}

/// Annotate every region of a BED file, writing each line with its annotation appended.
/// Header lines are copied, blank lines dropped. A malformed line stops the run.
pub fn annotate_bed<R: BufRead>(
    mut reader: R,
    output: &mut Writer,
    index: &AnnotationIndex,
    mode: SelectionMode,
) -> io::Result<ReportCounts> {
    let mut counts = ReportCounts::default();
    let mut buf = String::new();
    let mut line_number = 0u64;
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_number += 1;
        match parse_query_line(&buf, line_number)? {
            QueryLine::Empty => continue,
            QueryLine::Header(h) => output.write_line(h)?,
            QueryLine::Region(region) => {
                let annotation = annotate(index, &region, mode);
                counts.record(&annotation);
                output.write_annotated(region.line, &annotation)?;
            }
        }
    }
    output.flush()?;
    Ok(counts)
}
