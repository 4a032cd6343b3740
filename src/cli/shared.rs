use clap::{Parser, ValueEnum};
use lumimask::formatting::{stringify_lumis_with, FormatOptions, DEFAULT_PER_LINE};
use lumimask::lumi_map::LumiMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const HELP_TEMPLATE: &str =
    "{name} v{version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}{after-help}";

/// How a lumi mask is written out.
#[derive(Eq, PartialEq, Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text, one run per line
    #[value(name = "text")]
    Text,
    /// Compact json
    #[value(name = "json")]
    Json,
    /// Indented json
    #[value(name = "pretty")]
    Pretty,
}

#[derive(Parser, Debug)]
pub struct OutputArgs {
    #[arg(
        help = "output file (default: stdout)",
        short = 'o',
        long = "output",
        default_value = "-"
    )]
    pub output_path: PathBuf,

    #[arg(
        help = "output format",
        short = 'O',
        long = "output-format",
        default_value = "text"
    )]
    pub output_format: OutputFormat,

    #[arg(
        help = "ranges per line in text output. 0 never wraps.",
        short = 'n',
        long = "per-line",
        default_value_t = DEFAULT_PER_LINE
    )]
    pub per_line: usize,
}

pub fn open_output(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

/// Write `mask` in the requested format. A missing mask is an empty line in text
/// output and `null` in json.
pub fn write_mask(
    mask: Option<&LumiMap>,
    args: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = open_output(&args.output_path)?;
    match args.output_format {
        OutputFormat::Text => {
            let options = FormatOptions::builder().per_line(args.per_line).build();
            writeln!(out, "{}", stringify_lumis_with(mask, &options))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, &mask)?;
            writeln!(out)?;
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut out, &mask)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    match mask {
        Some(mask) => log::info!(
            "wrote {} runs ({} lumis) to {}",
            mask.len(),
            mask.lumi_count(),
            args.output_path.display()
        ),
        None => log::info!("null lumi mask written to {}", args.output_path.display()),
    }
    Ok(())
}
