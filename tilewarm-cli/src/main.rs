//! TileWarm CLI - Command-line interface
//!
//! Warms a tile server's cache over a bounding box and zoom range:
//!
//! ```bash
//! tilewarm --west -74.03 --south 40.69 --east -73.96 --north 40.75 \
//!   --layer basemap --filename tile.png --filename utfgrid.json \
//!   --min-zoom 10 --max-zoom 14 --server-url http://localhost:8080
//! ```

mod error;

use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;

use tilewarm::backend::HttpTileBackend;
use tilewarm::coord::TileCoord;
use tilewarm::geom::BBox;
use tilewarm::logging::{default_log_dir, default_log_file, init_logging};
use tilewarm::progress::{ConsoleProgress, NoopProgress, ProgressReporter};
use tilewarm::warmer::{Warmer, WarmerConfig, WarmerError};

use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "tilewarm", version)]
#[command(about = "Warm a tile server's cache across a bounding box", long_about = None)]
struct Args {
    /// Western longitude of the bounding box (degrees)
    #[arg(long, allow_negative_numbers = true)]
    west: f64,

    /// Southern latitude of the bounding box (degrees)
    #[arg(long, allow_negative_numbers = true)]
    south: f64,

    /// Eastern longitude of the bounding box (degrees)
    #[arg(long, allow_negative_numbers = true)]
    east: f64,

    /// Northern latitude of the bounding box (degrees)
    #[arg(long, allow_negative_numbers = true)]
    north: f64,

    /// Layer name to warm
    #[arg(long)]
    layer: String,

    /// Filename to request per tile (repeat for multiple)
    #[arg(long = "filename", required = true)]
    filenames: Vec<String>,

    /// Zoom level of the starting tile
    #[arg(long, default_value_t = 0)]
    min_zoom: u8,

    /// Deepest zoom level to warm
    #[arg(long)]
    max_zoom: u8,

    /// Base URL of the tile server
    #[arg(long)]
    server_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Disable the progress bar
    #[arg(long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn warmer_config(&self) -> WarmerConfig {
        WarmerConfig {
            bbox: BBox::new(self.west, self.south, self.east, self.north),
            layer_name: self.layer.clone(),
            filenames: self.filenames.clone(),
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        e.exit();
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let _guard = init_logging(default_log_dir(), default_log_file(), args.debug)
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    info!(
        version = tilewarm::VERSION,
        server_url = %args.server_url,
        layer = %args.layer,
        min_zoom = args.min_zoom,
        max_zoom = args.max_zoom,
        "Starting tilewarm"
    );

    let backend =
        HttpTileBackend::with_timeout(&args.server_url, Duration::from_secs(args.timeout));
    let config = args.warmer_config();

    let started = Instant::now();
    let processed = if args.quiet {
        warm(config, backend, NoopProgress).await?
    } else {
        warm(config, backend, ConsoleProgress::new()).await?
    };

    let elapsed = started.elapsed();
    info!(
        tiles = processed.len(),
        elapsed_secs = elapsed.as_secs_f64(),
        "Cache warming complete"
    );
    println!(
        "Warmed {} tiles ({} requests) in {:.1}s",
        processed.len(),
        processed.len() * args.filenames.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

async fn warm<P: ProgressReporter>(
    config: WarmerConfig,
    backend: HttpTileBackend,
    progress: P,
) -> Result<Vec<TileCoord>, WarmerError> {
    let warmer = Warmer::new(config, backend, progress)?;
    warmer.initialize().await?;
    warmer.warm().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn base_args() -> Vec<&'static str> {
        vec![
            "tilewarm",
            "--west",
            "-74.03",
            "--south",
            "40.69",
            "--east",
            "-73.96",
            "--north",
            "40.75",
            "--layer",
            "basemap",
            "--filename",
            "tile.png",
            "--max-zoom",
            "14",
            "--server-url",
            "http://localhost:8080",
        ]
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_coordinates() {
        let args = Args::try_parse_from(base_args()).unwrap();
        assert_eq!(args.west, -74.03);
        assert_eq!(args.east, -73.96);
        assert_eq!(args.min_zoom, 0);
        assert_eq!(args.max_zoom, 14);
        assert_eq!(args.timeout, 30);
        assert!(!args.quiet);
    }

    #[test]
    fn test_repeated_filenames_accumulate() {
        let mut argv = base_args();
        argv.extend(["--filename", "utfgrid.json"]);
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.filenames, vec!["tile.png", "utfgrid.json"]);
    }

    #[test]
    fn test_filename_is_required() {
        let argv: Vec<_> = base_args()
            .into_iter()
            .filter(|a| !matches!(*a, "--filename" | "tile.png"))
            .collect();
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_warmer_config_mapping() {
        let args = Args::try_parse_from(base_args()).unwrap();
        let config = args.warmer_config();
        assert_eq!(config.bbox, BBox::new(-74.03, 40.69, -73.96, 40.75));
        assert_eq!(config.layer_name, "basemap");
        assert_eq!(config.filenames, vec!["tile.png"]);
    }
}
