use crate::cli::shared::GeneModelArgs;
use bedanno::gene_model::TranscriptReader;
use bedanno::writer::Writer;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "write the transcription start site of every transcript as bed6", long_about=None, rename_all = "kebab-case", help_template = crate::cli::shared::HELP_TEMPLATE, arg_required_else_help = true)]
pub struct TssCmdArgs {
    #[command(flatten)]
    pub gene_model: GeneModelArgs,

    #[arg(
        help = "output file (default: stdout)",
        short = 'o',
        long = "output",
        default_value = "-"
    )]
    pub output_path: PathBuf,
}

pub fn tss_command(args: TssCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let reader = bedanno::sniff::open(&args.gene_model.annotation_path)?;
    let mut output = Writer::init(&args.output_path)?;
    let mut n = 0usize;
    for tx in TranscriptReader::new(reader, args.gene_model.format, args.gene_model.name2) {
        output.write_line(&tx?.tss_bed_line())?;
        n += 1;
    }
    output.flush()?;
    log::info!("wrote {} transcription start sites", n);
    Ok(())
}
