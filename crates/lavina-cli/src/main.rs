use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use lavina_core::{AvalancheBulletins, Config};
use lavina_engine::{find_bulletin, max_danger_ratings, resolve, ElevationClass, RegionQuery};
use lavina_fetch::{load_bulletins, HttpSource};

mod render;

/// Lavina - EAWS avalanche bulletin resolution
#[derive(Parser)]
#[command(name = "lavina")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: lavina.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the max-danger-ratings map for all configured regions
    Ratings {
        /// Bulletin date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Output file for the ratings map
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve one micro-region to a danger level
    Resolve {
        /// Micro-region key, optionally with an elevation suffix
        /// (e.g. "IT-32-BZ-01" or "IT-32-BZ-01:high")
        region: String,

        /// Bulletin date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Elevation split line of the micro-region polygon, in metres
        #[arg(short, long)]
        threshold: Option<i32>,
    },

    /// Show the bulletin covering a micro-region
    Show {
        /// Micro-region ID
        region: String,

        /// Bulletin date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Include ratings, problems and tendency
        #[arg(long)]
        details: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else if Path::new("lavina.toml").exists() {
        Config::from_file(Path::new("lavina.toml"))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    if cli.verbose {
        eprintln!(
            "{} {} regions from {}",
            "Fetching".cyan(),
            config.regions.len(),
            config.base_url
        );
    }

    match cli.command {
        Commands::Ratings { date, output } => {
            ratings_command(&config, &date, output.as_deref()).await
        }
        Commands::Resolve {
            region,
            date,
            threshold,
        } => resolve_command(&config, &region, &date, threshold).await,
        Commands::Show {
            region,
            date,
            details,
        } => show_command(&config, &region, &date, details).await,
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn fetch_all(config: &Config, date: &str) -> AvalancheBulletins {
    let source = HttpSource::new(config.base_url.clone());
    load_bulletins(&source, date, &config.regions).await
}

/// Ratings command - resolve every declared micro-region to a warn level
async fn ratings_command(config: &Config, date: &str, output: Option<&Path>) -> Result<()> {
    let loaded = fetch_all(config, date).await;

    // query each declared region whole and per elevation half; regions
    // with no elevation split simply resolve both halves identically
    let mut queries = Vec::new();
    for bulletin in &loaded.bulletins {
        for region in &bulletin.regions {
            queries.push(RegionQuery::new(&region.region_id, ElevationClass::LowHigh));
            queries.push(RegionQuery::new(&region.region_id, ElevationClass::Low));
            queries.push(RegionQuery::new(&region.region_id, ElevationClass::High));
        }
    }

    let ratings = max_danger_ratings(&loaded.bulletins, &queries);
    let document = serde_json::json!({ "maxDangerRatings": ratings });

    match output {
        Some(path) => {
            std::fs::write(path, serde_json::to_string_pretty(&document)?)?;
            eprintln!(
                "{} {} region keys -> {}",
                "Resolved".green(),
                ratings.len(),
                path.display()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&document)?),
    }

    Ok(())
}

/// Resolve command - one micro-region key to one warn level
async fn resolve_command(
    config: &Config,
    region: &str,
    date: &str,
    threshold: Option<i32>,
) -> Result<()> {
    let loaded = fetch_all(config, date).await;

    let mut query = RegionQuery::parse(region);
    if let Some(threshold) = threshold {
        query = query.with_threshold(threshold);
    }

    let Some(bulletin) = find_bulletin(&query.region_id, &loaded.bulletins) else {
        println!("{} no bulletin covers {}", "0".bold(), query.region_id);
        return Ok(());
    };

    let level = resolve(&bulletin.danger_ratings, query.class, query.threshold);
    let (r, g, b) = render::level_rgb(level);

    println!(
        "{} {} ({})",
        level.to_string().truecolor(r, g, b).bold(),
        query.key(),
        bulletin.source_name().unwrap_or("unknown provider"),
    );

    // the scale text of the worst applicable rating, for the legend
    if let Some(entry) = bulletin
        .danger_ratings
        .iter()
        .map(|rating| rating.main_value.scale())
        .find(|entry| entry.warn_level == level)
    {
        if !entry.text.is_empty() {
            println!("{}: {}", entry.id, entry.text);
        }
    }

    Ok(())
}

/// Show command - render the covering bulletin as a detail panel
async fn show_command(config: &Config, region: &str, date: &str, details: bool) -> Result<()> {
    let loaded = fetch_all(config, date).await;

    match find_bulletin(region, &loaded.bulletins) {
        Some(bulletin) => print!("{}", render::render_bulletin(region, bulletin, details)),
        None => eprintln!("{} no bulletin covers {region}", "warning:".yellow()),
    }

    Ok(())
}
