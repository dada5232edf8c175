//! nearcity-cli: command-line interface for nearcity-core
//!
//! Loads the large-cities dataset once and answers proximity questions
//! against it.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ nearcity stats
//!
//! - Look up a city by citystate code
//!   $ nearcity lookup irvine-ca
//!
//! - The 3 large cities closest to a point
//!   $ nearcity nearest 33.6846 -117.8265 -k 3
//!
//! - Every large city within 250km of a point
//!   $ nearcity within 33.6846 -117.8265 --radius 250
//!
//! - Detail-page summary for a city, as JSON
//!   $ nearcity --json summary irvine-ca
//!
//! Data source
//! -----------
//!
//! By default the CLI loads `large_cities.json` bundled with `nearcity-core`
//! and caches a binary snapshot next to it for fast subsequent runs. Use
//! `--input <path>` to point at another dataset.
mod args;
mod logger;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use nearcity_core::prelude::*;
use nearcity_core::NearbyEntry;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init_logger(args.log_level)?;

    let input_path = args.input.unwrap_or_else(|| {
        ProximityIndex::default_dataset_path()
            .to_string_lossy()
            .to_string()
    });

    let index = ProximityIndex::load_from_path(&input_path)
        .with_context(|| format!("failed to load large cities from {input_path}"))?;
    log::info!("loaded {} large cities from {input_path}", index.len());

    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Index statistics:");
                println!("  Cities: {}", stats.cities);
                println!("  Total population: {}", stats.total_population);
            }
        }

        Commands::Lookup { code } => match index.find_by_code(&code) {
            Some(c) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(c)?);
                } else {
                    println!("City: {}", c.name());
                    println!("Code: {}", c.code());
                    println!("Population: {}", c.population);
                    println!("Coordinates: {}", c.coordinates);
                }
            }
            None => {
                eprintln!("No city found for: {code}");
            }
        },

        Commands::Nearest { lat, lng, k } => {
            let query = Coordinates::new(lat, lng)?;
            let hits = index.find_k_nearest(&query, k)?;
            print_hits(&hits, args.json)?;
        }

        Commands::Within { lat, lng, radius } => {
            let query = Coordinates::new(lat, lng)?;
            let hits = index.find_all_within_radius(&query, radius)?;
            if !args.json {
                println!("{} large cities within {radius}km of {query}", hits.len());
            }
            print_hits(&hits, args.json)?;
        }

        Commands::Summary { code, k, radius } => {
            let summary = index.summary_for_city(&code, k, radius)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Closest Major Cities: {}", summary.closest_display());
                println!(
                    "Nearby Major Cities: {} within {}km",
                    summary.nearby_count(),
                    summary.radius_km
                );
            }
        }
    }

    Ok(())
}

fn print_hits(hits: &[Nearby<'_>], json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<NearbyEntry> = hits.iter().map(NearbyEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if hits.is_empty() {
        println!("No large cities found");
    } else {
        for hit in hits {
            println!("{hit}");
        }
    }
    Ok(())
}
