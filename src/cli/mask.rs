use crate::cli::shared::{write_mask, OutputArgs};
use clap::Parser;
use lumimask::lumi_map::LumiMap;
use lumimask::run_lumis::{build_mask, parse_run_lumis};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "build a lumi mask from a run/lumi listing", long_about=None, rename_all = "kebab-case", help_template = crate::cli::shared::HELP_TEMPLATE)]
pub struct MaskCmdArgs {
    #[arg(
        help = "run/lumi listing, one record per line: <run> <lumi>[,<lumi>...] (default: stdin)",
        short = 'i',
        long = "input",
        default_value = "-"
    )]
    pub input_path: PathBuf,

    #[arg(
        help = "certification json. records with any lumi outside of it are dropped",
        short = 'g',
        long = "golden"
    )]
    pub golden_path: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn mask_command(args: MaskCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let golden = match &args.golden_path {
        Some(p) => {
            let golden = LumiMap::from_reader(lumimask::sniff::open(p)?)?;
            log::info!(
                "golden mask {} has {} runs ({} lumis)",
                p.display(),
                golden.len(),
                golden.lumi_count()
            );
            Some(golden)
        }
        None => None,
    };

    let records = parse_run_lumis(lumimask::sniff::open(&args.input_path)?)?;
    let mask = build_mask(&records, golden.as_ref());
    write_mask(Some(&mask), &args.output)
}
