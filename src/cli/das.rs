use clap::Parser;
use lumimask::utils::{clean_split, das_link, parse_release};

#[derive(Parser, Debug)]
#[command(author, version, about = "print DAS links for datasets", long_about=None, rename_all = "kebab-case", help_template = crate::cli::shared::HELP_TEMPLATE, arg_required_else_help = true)]
pub struct DasLinkCmdArgs {
    #[arg(help = "datasets; comma or newline separated lists are split", required = true)]
    pub datasets: Vec<String>,
}

pub fn das_link_command(args: DasLinkCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    for dataset in args.datasets.iter().flat_map(|d| clean_split(d)) {
        println!("{}", das_link(&dataset));
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(author, version, about = "print the release name of release paths", long_about=None, rename_all = "kebab-case", help_template = crate::cli::shared::HELP_TEMPLATE, arg_required_else_help = true)]
pub struct ReleaseCmdArgs {
    #[arg(help = "release paths, e.g. el8_amd64_gcc11/CMSSW_13_0_0", required = true)]
    pub paths: Vec<String>,
}

pub fn release_command(args: ReleaseCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    for path in &args.paths {
        println!("{}", parse_release(path));
    }
    Ok(())
}
