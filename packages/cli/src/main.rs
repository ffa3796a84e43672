#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the footfall mobility analysis pipeline.
//!
//! Joins SafeGraph points-of-interest, Advan weekly visit patterns, and
//! Veraset device visits around a target NAICS industry code. Each run is
//! a linear pipeline of filter/query/join stages; results are printed as
//! previews for inspection, nothing is written.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use footfall_database::{query, vendor};
use footfall_mobility::MobilityError;
use footfall_mobility_models::LocatedDeviceVisit;
use footfall_patterns::PatternError;
use footfall_patterns_models::LocatedHourlyVisit;

/// Rows printed per result preview.
const PREVIEW_ROWS: usize = 10;

#[derive(Parser)]
#[command(
    name = "footfall",
    about = "Foot-traffic and device-mobility analysis around a target industry"
)]
struct Cli {
    /// Path to the SafeGraph locations parquet file
    #[arg(long)]
    safegraph_parquet: PathBuf,

    /// Directory containing the Advan weekly-pattern .duckdb files
    #[arg(long)]
    advan_dir: PathBuf,

    /// Directory containing the Veraset visit .duckdb files
    #[arg(long)]
    veraset_dir: PathBuf,

    /// Target NAICS industry code
    #[arg(long, default_value_t = 622_110)]
    naics_code: i64,

    /// ISO country code filter
    #[arg(long, default_value = "US")]
    country: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explode Advan weekly patterns into located hourly visit rows
    Patterns,
    /// Trace Veraset device mobility around the target locations
    Mobility,
    /// Run both analyses
    All,
    /// List the tables of the selected vendor databases
    Tables,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Patterns => run_patterns(&cli)?,
        Commands::Mobility => run_mobility(&cli)?,
        Commands::All => {
            run_patterns(&cli)?;
            run_mobility(&cli)?;
        }
        Commands::Tables => run_tables(&cli)?,
    }

    Ok(())
}

/// Stages 1-4: filter the reference set, fetch and reshape the Advan
/// weekly patterns, and join the hourly rows back onto the locations.
fn run_patterns(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let locations =
        footfall_poi::load_filtered(&cli.safegraph_parquet, cli.naics_code, &cli.country)?;
    let placekeys = footfall_poi_models::placekeys(&locations);

    let advan_db = vendor::select_vendor_db(&cli.advan_dir)?;
    log::info!("Using Advan database {}", advan_db.display());

    let hourly: Result<_, PatternError> = query::with_connection(&advan_db, |conn| {
        let weekly = footfall_patterns::queries::fetch_weekly_patterns(conn, &placekeys)?;
        footfall_patterns::reshape::explode_hourly(&weekly)
    });
    let located = footfall_patterns::enrich::join_locations(hourly?, &locations);

    print_hourly_preview(&located);

    Ok(())
}

/// Stages 1 + 5: filter the reference set, run the two-pass Veraset
/// device query, and join the traces onto the country-wide locations.
fn run_mobility(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let targets =
        footfall_poi::load_filtered(&cli.safegraph_parquet, cli.naics_code, &cli.country)?;
    let place_ids = footfall_poi_models::safegraph_place_ids(&targets);

    let veraset_db = vendor::select_vendor_db(&cli.veraset_dir)?;
    log::info!("Using Veraset database {}", veraset_db.display());

    let history: Result<_, MobilityError> = query::with_connection(&veraset_db, |conn| {
        let devices = footfall_mobility::queries::fetch_visiting_devices(conn, &place_ids)?;
        footfall_mobility::queries::fetch_device_history(conn, &devices)
    });
    let history = history?;

    // Industry-unfiltered: mobility traces range outside the target NAICS.
    let all_locations = footfall_poi::load_by_country(&cli.safegraph_parquet, &cli.country)?;
    let located = footfall_mobility::enrich::join_locations(history, &all_locations);
    print_mobility_preview(&located);

    Ok(())
}

/// Prints the tables of both vendor databases.
fn run_tables(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    for (label, dir) in [("advan", &cli.advan_dir), ("veraset", &cli.veraset_dir)] {
        let db = vendor::select_vendor_db(dir)?;
        let tables = query::with_connection(&db, query::list_tables)?;

        println!("{label} ({}):", db.display());
        for table in tables {
            println!("  {table}");
        }
    }

    Ok(())
}

fn print_hourly_preview(rows: &[LocatedHourlyVisit]) {
    println!("located hourly visits: {} rows", rows.len());
    for row in rows.iter().take(PREVIEW_ROWS) {
        println!(
            "  {}  {}  {:>6} visits  {:.4}  {}  {}",
            row.placekey,
            row.timestamp,
            row.visits,
            row.visit_proportion,
            row.postal_code.as_deref().unwrap_or("-"),
            row.location_name.as_deref().unwrap_or("-"),
        );
    }
    if rows.len() > PREVIEW_ROWS {
        println!("  ... {} more rows", rows.len() - PREVIEW_ROWS);
    }
}

fn print_mobility_preview(rows: &[LocatedDeviceVisit]) {
    println!("located device visits: {} rows", rows.len());
    for row in rows.iter().take(PREVIEW_ROWS) {
        println!(
            "  {}  {}  {}  naics {}  {}  {}",
            row.caid,
            row.local_timestamp,
            row.safegraph_place_id,
            row.naics_code,
            row.postal_code.as_deref().unwrap_or("-"),
            row.location_name.as_deref().unwrap_or("-"),
        );
    }
    if rows.len() > PREVIEW_ROWS {
        println!("  ... {} more rows", rows.len() - PREVIEW_ROWS);
    }
}
