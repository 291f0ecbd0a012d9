//! bedanno annotates BED regions with the closest promoter, exon, intron or enhancer
//! of a gene model.

/// Position trait and midpoint distance.
pub mod position;

/// Annotated interval type.
pub mod interval;

/// Per-chromosome, start-sorted interval storage.
pub mod interval_store;

/// Choosing the best interval for a query.
pub mod closest;

/// Annotation categories and their priority.
pub mod category;

/// The four category stores.
pub mod annotation_index;

/// Per-category sweep and priority dispatch.
pub mod annotate;

/// Options for annotation.
pub mod annotate_options;

/// Gene-model table parsing.
pub mod gene_model;

/// BED query lines.
pub mod query;

/// Annotating a whole BED file.
pub mod report;

/// Compression detection for inputs.
pub mod sniff;

/// Output files.
pub mod writer;

#[cfg(test)]
mod tests;
