use crate::cli::shared::{write_mask, OutputArgs};
use clap::Parser;
use lumimask::lumi_map::LumiMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "pretty-print a json lumi mask", long_about=None, rename_all = "kebab-case", help_template = crate::cli::shared::HELP_TEMPLATE)]
pub struct FormatCmdArgs {
    #[arg(
        help = "json lumi mask or null, may be gzipped (default: stdin)",
        short = 'i',
        long = "input",
        default_value = "-"
    )]
    pub input_path: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn format_command(args: FormatCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let reader = lumimask::sniff::open(&args.input_path)?;
    let mask = LumiMap::from_reader_nullable(reader)?;
    match &mask {
        Some(m) => log::info!("read {} runs from {}", m.len(), args.input_path.display()),
        None => log::warn!("{} holds a null lumi mask", args.input_path.display()),
    }
    write_mask(mask.as_ref(), &args.output)
}
