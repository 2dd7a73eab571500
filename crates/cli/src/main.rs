use anyhow::{anyhow, Context};
use config::{Config, File};
use hexmap::{
    cost_estimate, grid_distance, world_distance, AxialPoint, HasHexPosition,
    HexMap, MapConfig, TileRef,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;

/// CLI for querying hex maps. Points are written as `q,r`.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexmap")]
struct Opt {
    /// Path to a config file that defines the map. Supported formats: JSON,
    /// TOML. If not given, the default config is used, with a random seed.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Distance between two tiles, in steps and in world space
    Distance {
        #[structopt(allow_hyphen_values = true)]
        from: AxialPoint,
        #[structopt(allow_hyphen_values = true)]
        to: AxialPoint,
    },
    /// List the tiles adjacent to a tile
    Neighbors {
        #[structopt(allow_hyphen_values = true)]
        point: AxialPoint,
    },
    /// Cost for a unit to move onto a tile
    Cost {
        #[structopt(allow_hyphen_values = true)]
        point: AxialPoint,
    },
    /// Human-readable summary of a tile
    Describe {
        #[structopt(allow_hyphen_values = true)]
        point: AxialPoint,
    },
}

fn load_config(config_path: &Path) -> anyhow::Result<MapConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn get_tile(map: &HexMap, point: AxialPoint) -> anyhow::Result<TileRef<'_>> {
    map.tile(point).ok_or_else(|| {
        anyhow!("{} is off the map ({} rows)", point, map.row_count())
    })
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => {
            info!("No config given, using defaults");
            MapConfig::default()
        }
    };
    let map = HexMap::new(config)?;
    let columns = map.column_count();

    match opt.command {
        Command::Distance { from, to } => {
            // Make sure both ends are on the map before measuring
            let from = get_tile(&map, from)?.position();
            let to = get_tile(&map, to)?.position();
            let displacement = world_distance(from, to, columns);
            println!("Steps: {}", grid_distance(from, to, columns));
            println!(
                "World: ({:.3}, {:.3}, {:.3}), length {:.3}",
                displacement.x,
                displacement.y,
                displacement.z,
                displacement.norm()
            );
            println!("Estimate: {}", cost_estimate(from, to, columns));
        }
        Command::Neighbors { point } => {
            for neighbor in get_tile(&map, point)?.neighbors() {
                println!("{}", neighbor);
            }
        }
        Command::Cost { point } => {
            println!("{}", get_tile(&map, point)?.entry_cost());
        }
        Command::Describe { point } => {
            let tile = get_tile(&map, point)?;
            println!("{}\n{}", tile, tile.description());
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
