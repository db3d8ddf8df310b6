use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use osm_buildings::{
    ConvertConfigBuilder, Converter, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, SkipPolicy,
};

#[derive(Parser)]
#[command(name = "osm-buildings")]
#[command(about = "Convert building ways from an Overpass JSON export into GeoJSON polygons")]
struct Args {
    /// Overpass JSON export to read
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// GeoJSON file to write (overwritten if it exists)
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Tag key that marks a way as a building
    #[arg(long, default_value = "building")]
    building_key: String,

    /// Log every skipped node reference and dropped way
    #[arg(long)]
    warn_skipped: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(level).init();

    let skip_policy = if args.warn_skipped {
        SkipPolicy::Warn
    } else {
        SkipPolicy::Silent
    };

    let config = ConvertConfigBuilder::new()
        .input(&args.input)
        .output(&args.output)
        .building_key(args.building_key)
        .skip_policy(skip_policy)
        .build();

    let converter = Converter::new(config);
    match converter.run() {
        Ok(report) => {
            if report.degenerate_ways > 0 || report.unresolved_refs > 0 {
                info!(
                    "ℹ️  Skipped {} way(s) and {} unresolved node reference(s)",
                    report.degenerate_ways, report.unresolved_refs
                );
            }
            info!("✅ Saved to {}", converter.config().output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) if e.is_fatal_input() => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("❌ Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
