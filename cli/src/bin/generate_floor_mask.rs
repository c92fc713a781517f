use clap::Parser;
use color_eyre::eyre::Result;
use floorplan::FloorFillerConfig;
use floorplan_cli::{default_texture_path, init_tracing, load_config, parse_args};
use std::path::PathBuf;
use tracing::debug;

/// Fill the rooms of a walls-only image with a tiled floor texture
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Walls-only image, as written by remove_interior_lines
    walls_only: PathBuf,
    /// Where to write the filled floor image
    output: PathBuf,
    /// Floor texture tiled over every room; defaults to
    /// components/textures/wooden_floor.jpg at the program root
    #[arg(short, long)]
    texture: Option<PathBuf>,
    /// Optional .toml or .json file overriding the floor fill tuning
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
    let config: FloorFillerConfig = load_config(cli.config.as_deref())?;
    let texture = cli.texture.unwrap_or_else(default_texture_path);
    debug!(?config, texture = %texture.display(), "floor fill tuning");

    floorplan::generate_floor_mask(&cli.walls_only, &cli.output, &texture, &config)?;
    println!("Filled floor image saved to: {}", cli.output.display());
    Ok(())
}
