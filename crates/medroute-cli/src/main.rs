mod nearest;

use clap::{Args, Parser, Subcommand};
use medroute_core::{Coordinate, ManualLocation};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "medroute")]
#[command(about = "Find the hospitals nearest to a location")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Query live map data for nearby hospitals, falling back to the built-in list
    Nearest {
        #[command(flatten)]
        location: LocationArgs,
        /// Search radius in metres (defaults to MEDROUTE_SEARCH_RADIUS_M)
        #[arg(long)]
        radius: Option<u32>,
        /// Maximum number of hospitals (defaults to MEDROUTE_RESULT_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
        /// Print the full resolution result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Great-circle distance between two points, in kilometres
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },
    /// Rank the built-in hospital list from a location without any network call
    Fallback {
        #[command(flatten)]
        location: LocationArgs,
        #[arg(long)]
        json: bool,
    },
}

/// Optional reference point; absent means "no position available".
#[derive(Debug, Clone, Copy, Args)]
struct LocationArgs {
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
}

impl LocationArgs {
    fn provider(self) -> anyhow::Result<ManualLocation> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(ManualLocation(Some(Coordinate::new(lat, lon)?))),
            _ => Ok(ManualLocation(None)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = medroute_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Nearest {
            location,
            radius,
            limit,
            json,
        } => {
            nearest::run_nearest(&config, &location.provider()?, radius, limit, json).await?;
        }
        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            let km = medroute_core::haversine_km(lat1, lon1, lat2, lon2);
            println!("{km:.3} km");
        }
        Commands::Fallback { location, json } => {
            nearest::run_fallback(&config, &location.provider()?, json)?;
        }
    }

    Ok(())
}
