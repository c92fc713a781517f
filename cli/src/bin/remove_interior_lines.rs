use clap::Parser;
use color_eyre::eyre::Result;
use floorplan::WallExtractorConfig;
use floorplan_cli::{init_tracing, load_config, parse_args};
use std::path::PathBuf;
use tracing::debug;

/// Strip thin lines, text and furniture from a blueprint, keeping the walls
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Blueprint image to clean up
    input: PathBuf,
    /// Where to write the walls-only image
    output: PathBuf,
    /// Optional .toml or .json file overriding the wall extraction tuning
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    _extra: Vec<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli: Cli = parse_args();
    let config: WallExtractorConfig = load_config(cli.config.as_deref())?;
    debug!(?config, "wall extraction tuning");

    floorplan::remove_interior_lines(&cli.input, &cli.output, &config)?;
    println!("Walls-only image saved to: {}", cli.output.display());
    Ok(())
}
