use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use circle_icon_gen::icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "circle-icon-gen",
    about = "Generate the black circle icon set (16, 48 and 128 px) for the browser extension"
)]
struct Args {
    /// Output directory. Defaults to the current working directory.
    #[clap(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Can't create output directory {}", dir.display()))?;
    }

    let specs = icon_gen::default_specs(args.output.as_deref());
    icon_gen::run(&specs)
}
