use crate::cli::shared::{GeneModelArgs, RangeArgs};
use bedanno::annotate_options::AnnotateOptions;
use bedanno::gene_model::load_annotation;
use bedanno::report::annotate_bed;
use bedanno::writer::{default_output_path, Writer};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "annotate a bed file with promoter, exon, intron and enhancer hits", long_about=None, rename_all = "kebab-case", help_template = crate::cli::shared::HELP_TEMPLATE, arg_required_else_help = true)]
pub struct AnnotateCmdArgs {
    #[arg(help = "bed file to be annotated (may be gzipped, - for stdin)", short = 'b', long = "bed")]
    pub bed_path: PathBuf,

    #[command(flatten)]
    pub gene_model: GeneModelArgs,

    #[command(flatten)]
    pub ranges: RangeArgs,

    #[arg(
        help = "output file. default is <bed>_annotation.txt next to the input; - for stdout",
        short = 'o',
        long = "output"
    )]
    pub output_path: Option<PathBuf>,
}

pub fn annotate_command(args: AnnotateCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = AnnotateOptions::builder()
        .format(args.gene_model.format)
        .promoter_range(args.ranges.promoter)
        .enhancer_range(args.ranges.enhancer)
        .use_name2(args.gene_model.name2)
        .selection(args.ranges.selection)
        .build();
    if let Err(e) = options.validate() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    log::info!("options: {:?}", options);

    let index = load_annotation(
        bedanno::sniff::open(&args.gene_model.annotation_path)?,
        &options,
    )?;

    let output_path = args.output_path.unwrap_or_else(|| {
        if args.bed_path.as_os_str() == "-" {
            PathBuf::from("-")
        } else {
            default_output_path(&args.bed_path)
        }
    });
    log::info!("writing annotation to {}", output_path.display());
    let mut output = Writer::init(&output_path)?;

    let counts = annotate_bed(
        bedanno::sniff::open(&args.bed_path)?,
        &mut output,
        &index,
        options.selection,
    )?;
    log::info!("annotated {} regions ({})", counts.total(), counts);
    Ok(())
}
