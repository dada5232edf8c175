use clap::{Parser, Subcommand};
use log::LevelFilter;
use nearcity_core::summary::{DEFAULT_NEARBY_K, DEFAULT_NEARBY_RADIUS_KM};

/// CLI arguments for nearcity-cli
#[derive(Debug, Parser)]
#[command(
    name = "nearcity",
    version,
    about = "Find the large cities nearest to a point or a city"
)]
pub struct CliArgs {
    /// Path to the large-cities JSON file (default: the bundled large_cities.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Log level (error, warn, info, debug, trace). Overrides RUST_LOG when given.
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<LevelFilter>,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the index contents
    Stats,

    /// Lookup a city by citystate code
    Lookup {
        /// Citystate code (e.g. irvine-ca, case-insensitive)
        code: String,
    },

    /// The k large cities closest to a point
    Nearest {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// How many cities to return (1..=20)
        #[arg(short, long, default_value_t = DEFAULT_NEARBY_K)]
        k: usize,
    },

    /// Every large city within a radius of a point
    Within {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Radius in kilometers
        #[arg(short, long, default_value_t = DEFAULT_NEARBY_RADIUS_KM)]
        radius: f64,
    },

    /// Closest cities and nearby count for a known city
    Summary {
        /// Citystate code (e.g. irvine-ca)
        code: String,
        /// How many closest cities to list (1..=5)
        #[arg(short, long, default_value_t = DEFAULT_NEARBY_K)]
        k: usize,
        /// Radius in kilometers for the nearby count
        #[arg(short, long, default_value_t = DEFAULT_NEARBY_RADIUS_KM)]
        radius: f64,
    },
}
