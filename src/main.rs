use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use sverdrup::config::Config;
use sverdrup::model::CriticalDepthModel;
use sverdrup::utils::{Summary, print_summary};

/// Noon light, irradiance with depth and Sverdrup critical depth for a period
#[derive(Parser, Debug)]
#[command(name = "sverdrup")]
struct Args {
    /// Path to the JSON configuration
    #[arg(short, long, default_value = "./data/config/sverdrup.json")]
    config: String,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    info!(config = %args.config, "starting critical depth run");

    let config = Config::from_file(&args.config)?;

    if config.tables().is_none() {
        let data_directory = config.data_directory();
        if data_directory.root().is_dir() {
            let available = data_directory.available_tables()?;
            info!(
                dir = %data_directory.root().display(),
                count = available.len(),
                "no tables configured, skipping table load"
            );
            if !available.is_empty() {
                println!(
                    "Tables available in {} (set \"tables\" in the config to load two):",
                    data_directory.root().display()
                );
                for path in &available {
                    if let Some(name) = path.file_name() {
                        println!("  {}", name.to_string_lossy());
                    }
                }
            }
        }
    }

    let output = CriticalDepthModel::new(config).process()?;

    let (days, depths) = output.field.shape();
    println!(
        "Irradiance field - Number of days: {}, Depth points: {}, Max depth: {} m",
        days,
        depths,
        output.field.depth_grid().max_depth()
    );

    if let (Some(first), Some(last)) = (output.dates.first(), output.dates.last()) {
        println!("  Period: {} to {}", first, last);
    }

    let elevations: Vec<f64> = output.noon.iter().map(|n| n.elevation_deg).collect();
    print_summary("Noon solar elevation", &elevations, "deg");
    print_summary("Surface irradiance", &output.surface_irradiance, "");
    print_summary("Critical depth", &output.critical_depth, "m");

    if let Some(zeu) = output.euphotic_depth {
        println!("Euphotic depth: {:.2} m", zeu);
    }

    if let Some((f1, f2)) = &output.tables {
        for (name, table) in [("Table 1", f1), ("Table 2", f2)] {
            let summary = Summary::from_values(&table.buffer);
            println!(
                "{}: {} x {}, {} valid values",
                name, table.rows, table.cols, summary.valid
            );
        }
    }

    Ok(())
}
