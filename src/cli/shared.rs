use bedanno::annotate_options::SelectionMode;
use bedanno::gene_model::GeneModelFormat;
use clap::Parser;
use std::path::PathBuf;

pub const HELP_TEMPLATE: &str =
    "{name} v{version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}{after-help}";

#[derive(Parser, Debug)]
pub struct GeneModelArgs {
    #[arg(help = "gene-model annotation file (may be gzipped)", short = 'a', long = "ann")]
    pub annotation_path: PathBuf,

    #[arg(
        help = "annotation file format",
        short = 'f',
        long = "format",
        default_value = "genePredExt"
    )]
    pub format: GeneModelFormat,

    #[arg(
        long = "name2",
        help = "label regions with the name2 (gene name) column instead of the transcript name. Not available for refSeq."
    )]
    pub name2: bool,
}

#[derive(Parser, Debug)]
pub struct RangeArgs {
    #[arg(
        help = "promoter range from the TSS",
        short = 'p',
        long = "promoter",
        default_value_t = 3000
    )]
    pub promoter: u64,

    #[arg(
        help = "enhancer range from the TSS. 0 means enhancers are not annotated. Must be larger than the promoter range if not zero.",
        short = 'e',
        long = "enhancer",
        default_value_t = 0
    )]
    pub enhancer: u64,

    #[arg(
        long = "selection",
        short = 's',
        default_value = "greedy",
        help = "how the best interval in a category is chosen.
greedy stops at the first overlapping interval that is not closer than the current best.
nearest checks every overlapping interval."
    )]
    pub selection: SelectionMode,
}
