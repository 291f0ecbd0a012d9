//! Gene-model tables (genePredExt, refGene, refSeq) and the annotation index built from them.
//!
//! The three formats carry the same information at different column offsets, so each
//! format maps to a [`ColumnLayout`] and a single parser reads all of them.
use crate::annotate_options::AnnotateOptions;
use crate::annotation_index::{AnnotationIndex, AnnotationIndexBuilder};
use crate::category::Category;
use crate::interval::Interval;
use clap::ValueEnum;
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Supported gene-model table formats.
#[derive(Eq, PartialEq, Debug, Clone, Copy, ValueEnum, Default)]
pub enum GeneModelFormat {
    /// UCSC genePredExt: name chrom strand txStart txEnd ... exonStarts exonEnds score name2
    #[default]
    #[value(name = "genePredExt")]
    GenePredExt,
    /// UCSC refGene: genePredExt with a leading bin column.
    #[value(name = "refGene")]
    RefGene,
    /// BED12 transcripts: exons given as block sizes and offsets from txStart.
    #[value(name = "refSeq")]
    RefSeq,
}

impl fmt::Display for GeneModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneModelFormat::GenePredExt => write!(f, "genePredExt"),
            GeneModelFormat::RefGene => write!(f, "refGene"),
            GeneModelFormat::RefSeq => write!(f, "refSeq"),
        }
    }
}

impl FromStr for GeneModelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Where the exon coordinates live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExonColumns {
    /// comma separated absolute starts and ends.
    StartsEnds { starts: usize, ends: usize },
    /// BED12 blocks, relative to txStart.
    Blocks {
        count: usize,
        sizes: usize,
        starts: usize,
    },
}

/// 0-based column offsets for one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub name2: Option<usize>,
    pub chrom: usize,
    pub strand: usize,
    pub tx_start: usize,
    pub tx_end: usize,
    pub exons: ExonColumns,
}

impl ColumnLayout {
    /// Fewest columns a line must have.
    fn min_columns(&self) -> usize {
        let exon_max = match self.exons {
            ExonColumns::StartsEnds { starts, ends } => starts.max(ends),
            ExonColumns::Blocks {
                count,
                sizes,
                starts,
            } => count.max(sizes).max(starts),
        };
        [self.name, self.chrom, self.strand, self.tx_start, self.tx_end, exon_max]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}

const GENE_PRED_EXT: ColumnLayout = ColumnLayout {
    name: 0,
    name2: Some(11),
    chrom: 1,
    strand: 2,
    tx_start: 3,
    tx_end: 4,
    exons: ExonColumns::StartsEnds { starts: 8, ends: 9 },
};

const REF_GENE: ColumnLayout = ColumnLayout {
    name: 1,
    name2: Some(12),
    chrom: 2,
    strand: 3,
    tx_start: 4,
    tx_end: 5,
    exons: ExonColumns::StartsEnds {
        starts: 9,
        ends: 10,
    },
};

const REF_SEQ: ColumnLayout = ColumnLayout {
    name: 3,
    name2: None,
    chrom: 0,
    strand: 5,
    tx_start: 1,
    tx_end: 2,
    exons: ExonColumns::Blocks {
        count: 9,
        sizes: 10,
        starts: 11,
    },
};

impl GeneModelFormat {
    pub fn layout(&self) -> &'static ColumnLayout {
        match self {
            GeneModelFormat::GenePredExt => &GENE_PRED_EXT,
            GeneModelFormat::RefGene => &REF_GENE,
            GeneModelFormat::RefSeq => &REF_SEQ,
        }
    }
}

/// One transcript from a gene-model table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub chrom: String,
    pub strand: char,
    pub name: String,
    pub tx_start: u64,
    pub tx_end: u64,
    /// half-open exon spans in file order.
    pub exons: Vec<(u64, u64)>,
}

impl Transcript {
    /// Transcription start site: txStart on the + strand, txEnd otherwise.
    #[inline]
    pub fn tss(&self) -> u64 {
        if self.strand == '+' {
            self.tx_start
        } else {
            self.tx_end
        }
    }

    /// Gaps between consecutive exons.
    pub fn introns(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.exons.windows(2).map(|w| (w[0].1, w[1].0))
    }

    /// The TSS as a single-base BED6 line (without newline).
    pub fn tss_bed_line(&self) -> String {
        let tss = self.tss();
        format!(
            "{}\t{}\t{}\t{}\t0\t{}",
            self.chrom,
            tss,
            tss + 1,
            self.name,
            self.strand
        )
    }
}

/// Parse a comma separated list of integers; a trailing comma is allowed.
fn parse_list(s: &str) -> Result<Vec<u64>, std::num::ParseIntError> {
    let s = s.strip_suffix(',').unwrap_or(s);
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(|v| v.trim().parse::<u64>()).collect()
}

/// Parse one line of a gene-model table with the given layout.
pub fn parse_transcript(
    line: &str,
    layout: &ColumnLayout,
    use_name2: bool,
) -> Result<Transcript, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < layout.min_columns() {
        return Err(format!(
            "expected at least {} columns, found {}",
            layout.min_columns(),
            fields.len()
        ));
    }
    let int = |i: usize, what: &str| -> Result<u64, String> {
        fields[i]
            .parse::<u64>()
            .map_err(|e| format!("{} {:?}: {}", what, fields[i], e))
    };
    let list = |i: usize, what: &str| -> Result<Vec<u64>, String> {
        parse_list(fields[i]).map_err(|e| format!("{} {:?}: {}", what, fields[i], e))
    };

    let name_col = match (use_name2, layout.name2) {
        (true, Some(c)) => c,
        _ => layout.name,
    };
    if name_col >= fields.len() {
        return Err(format!("no name2 column ({}) on line", name_col + 1));
    }
    let tx_start = int(layout.tx_start, "txStart")?;
    let tx_end = int(layout.tx_end, "txEnd")?;

    let exons: Vec<(u64, u64)> = match layout.exons {
        ExonColumns::StartsEnds { starts, ends } => {
            let s = list(starts, "exonStarts")?;
            let e = list(ends, "exonEnds")?;
            if s.len() != e.len() {
                return Err(format!(
                    "{} exon starts but {} exon ends",
                    s.len(),
                    e.len()
                ));
            }
            s.into_iter().zip(e).collect()
        }
        ExonColumns::Blocks {
            count,
            sizes,
            starts,
        } => {
            let n = int(count, "blockCount")? as usize;
            let sz = list(sizes, "blockSizes")?;
            let st = list(starts, "blockStarts")?;
            if sz.len() < n || st.len() < n {
                return Err(format!(
                    "blockCount is {} but found {} sizes and {} starts",
                    n,
                    sz.len(),
                    st.len()
                ));
            }
            st.iter()
                .zip(sz.iter())
                .take(n)
                .map(|(&s, &l)| {
                    let start = tx_start.checked_add(s);
                    match start.and_then(|start| start.checked_add(l).map(|stop| (start, stop))) {
                        Some(block) => Ok(block),
                        None => Err(format!(
                            "block at txStart {} + {} of size {} overflows",
                            tx_start, s, l
                        )),
                    }
                })
                .collect::<Result<_, _>>()?
        }
    };

    Ok(Transcript {
        chrom: String::from(fields[layout.chrom]),
        strand: fields[layout.strand].chars().next().unwrap_or('.'),
        name: String::from(fields[name_col]),
        tx_start,
        tx_end,
        exons,
    })
}

/// Iterates over the transcripts of a gene-model table.
/// Blank lines and lines starting with `#` are skipped.
pub struct TranscriptReader<R>
where
    R: BufRead,
{
    reader: R,
    layout: &'static ColumnLayout,
    use_name2: bool,
    buf: String,
    line_number: u64,
}

impl<R> TranscriptReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R, format: GeneModelFormat, use_name2: bool) -> Self {
        if use_name2 && format.layout().name2.is_none() {
            log::warn!(
                "--name2 is not supported for {} format; using the name column",
                format
            );
        }
        TranscriptReader {
            reader,
            layout: format.layout(),
            use_name2,
            buf: String::new(),
            line_number: 0,
        }
    }
}

impl<R> Iterator for TranscriptReader<R>
where
    R: BufRead,
{
    type Item = io::Result<Transcript>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            self.line_number += 1;
            return match self.reader.read_line(&mut self.buf) {
                Ok(0) => None,
                Ok(_) => {
                    let line = self.buf.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    Some(
                        parse_transcript(line, self.layout, self.use_name2).map_err(|e| {
                            io::Error::new(
                                io::ErrorKind::InvalidData,
                                format!(
                                    "annotation line#{}:{:?} error: {}",
                                    self.line_number, line, e
                                ),
                            )
                        }),
                    )
                }
                Err(e) => Some(Err(e)),
            };
        }
    }
}

/// Add the promoter, exon, intron and (when enabled) enhancer intervals of `tx`.
/// The promoter is clipped at 0. The enhancer start is clipped too, but its distances
/// are taken from the TSS.
fn add_transcript(
    builder: &mut AnnotationIndexBuilder,
    tx: &Transcript,
    options: &AnnotateOptions,
) -> Result<(), String> {
    let tss = tx.tss();
    let promoter_end = tss
        .checked_add(options.promoter_range)
        .ok_or_else(|| format!("promoter end {} + {} overflows", tss, options.promoter_range))?;
    builder.add(
        Category::Promoter,
        &tx.chrom,
        tss.saturating_sub(options.promoter_range),
        promoter_end,
        &tx.name,
    );
    for &(start, stop) in &tx.exons {
        builder.add(Category::Exon, &tx.chrom, start, stop, &tx.name);
    }
    for (start, stop) in tx.introns() {
        builder.add(Category::Intron, &tx.chrom, start, stop, &tx.name);
    }
    if options.enhancers_enabled() {
        let enhancer = Interval::around(tss, options.enhancer_range, tx.name.as_str())
            .ok_or_else(|| format!("enhancer end {} + {} overflows", tss, options.enhancer_range))?;
        builder.push(Category::Enhancer, &tx.chrom, enhancer);
    }
    Ok(())
}

/// Read a gene-model table and build the annotation index.
/// Any malformed line aborts the load with an `InvalidData` error.
pub fn load_annotation<R: BufRead>(
    reader: R,
    options: &AnnotateOptions,
) -> io::Result<AnnotationIndex> {
    let mut builder = AnnotationIndex::builder();
    let mut n = 0usize;
    for tx in TranscriptReader::new(reader, options.format, options.use_name2) {
        let tx = tx?;
        add_transcript(&mut builder, &tx, options).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("transcript {} on {} error: {}", tx.name, tx.chrom, e),
            )
        })?;
        n += 1;
    }
    log::info!("read {} transcripts ({} format)", n, options.format);
    Ok(builder.build())
}
