mod cli;

use clap::{Parser, Subcommand};
use cli::annotate::{annotate_command, AnnotateCmdArgs};
use cli::tss::{tss_command, TssCmdArgs};
use std::env;

#[derive(Parser, Debug)]
#[command(author, version, about = "annotate genomic regions against a gene model", long_about=None, rename_all = "kebab-case", help_template = cli::shared::HELP_TEMPLATE, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Annotate each bed region with its promoter, exon, intron or enhancer hit.
    Annotate(AnnotateCmdArgs),
    /// Write transcription start sites of a gene model as bed6.
    Tss(TssCmdArgs),
}

#[cfg(feature = "mimalloc_allocator")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "bedanno=info");
    }
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Annotate(args) => annotate_command(args),
        Commands::Tss(args) => tss_command(args),
    }
}
