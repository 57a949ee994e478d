//! Cryptforge - Entry Point
//!
//! Generates one dungeon from a config file and command-line overrides,
//! then prints it and/or exports it as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cryptforge::data::{DataLoader, GenerationConfig, DEFAULT_CONFIG_PATH};
use cryptforge::save;
use cryptforge::world::generate_level;

#[derive(Debug, Parser)]
#[command(name = "cryptforge", version, about = "Generate an autotiled dungeon")]
struct Cli {
    /// RON config file; defaults apply when it does not exist
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed override. Without a config file a random seed is drawn; a
    /// config file without a `seed` field uses the default seed.
    #[arg(short, long)]
    seed: Option<u32>,

    /// Number of rooms to request
    #[arg(short, long)]
    rooms: Option<usize>,

    /// Pre-inflation level width
    #[arg(long)]
    width: Option<i32>,

    /// Pre-inflation level height
    #[arg(long)]
    height: Option<i32>,

    /// Let rooms overlap
    #[arg(long)]
    overlap: bool,

    /// Write the level as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the level as ASCII
    #[arg(long)]
    ascii: bool,

    /// Write the default config to this path and exit
    #[arg(long)]
    write_default_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    let cli = Cli::parse();

    if let Some(path) = &cli.write_default_config {
        DataLoader::export_default(path)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        return Ok(());
    }

    let config = build_config(&cli)?;
    log::info!("Starting Cryptforge v{} with seed {}", env!("CARGO_PKG_VERSION"), config.seed);

    let level = generate_level(&config);

    if let Some(path) = &cli.json {
        save::write_json(&level, path)
            .with_context(|| format!("exporting level to {}", path.display()))?;
    }

    if cli.ascii || cli.json.is_none() {
        print!("{}", level.grid.to_ascii());
    }

    let stats = &level.stats;
    println!(
        "seed {} | {} rooms | {} corridors{} | {} walkable tiles",
        level.seed,
        stats.room_count,
        stats.corridor_count,
        if stats.chain_complete { "" } else { " (chain broken)" },
        stats.walkable_tiles
    );

    Ok(())
}

/// Config file first, then command-line overrides
fn build_config(cli: &Cli) -> Result<GenerationConfig> {
    let mut config = if cli.config.exists() {
        DataLoader::load_config(&cli.config)
            .with_context(|| format!("loading config {}", cli.config.display()))?
    } else {
        log::debug!("No config at {}, drawing a random seed", cli.config.display());
        GenerationConfig::default().with_seed(rand::random())
    };

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(rooms) = cli.rooms {
        config.rooms = rooms;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if cli.overlap {
        config.allow_overlap = true;
    }

    config.validate().context("invalid generation parameters")?;
    Ok(config)
}
