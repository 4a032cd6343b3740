extern crate lumimask;
use clap::{Parser, Subcommand};
use std::env;

mod cli;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about=None, rename_all = "kebab-case", help_template = cli::shared::HELP_TEMPLATE, arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pretty-print a json lumi mask
    Format(cli::format::FormatCmdArgs),
    /// Build a lumi mask from a run/lumi listing
    Mask(cli::mask::MaskCmdArgs),
    /// Print DAS links for datasets
    DasLink(cli::das::DasLinkCmdArgs),
    /// Print the release name of release paths
    Release(cli::das::ReleaseCmdArgs),
}

#[cfg(feature = "mimalloc_allocator")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "lumimask=info");
    }
    env_logger::init();
    let args = Args::parse();
    log::debug!("args: {:?}", args);

    let result = match args.command {
        Commands::Format(args) => cli::format::format_command(args),
        Commands::Mask(args) => cli::mask::mask_command(args),
        Commands::DasLink(args) => cli::das::das_link_command(args),
        Commands::Release(args) => cli::das::release_command(args),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
