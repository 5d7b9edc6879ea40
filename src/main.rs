//! Command-line entry point for the division MMR tool
//!
//! Loads a results CSV, folds it through the rating engine, and writes the
//! per-match ledger. Optionally prints final standings or one team's rating
//! history.

use anyhow::Result;
use clap::Parser;
use division_mmr::config::AppConfig;
use division_mmr::history::team_timeline;
use division_mmr::io::{read_matches_from_path, write_audit_rows_to_path};
use division_mmr::{CompetitionTaxonomy, MatchProcessor, RatingLedger};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Division MMR - season-aware Elo ratings for multi-division football data
#[derive(Parser)]
#[command(
    name = "division-mmr",
    version,
    about = "MMR system for multi-league, multi-division football data",
    long_about = "Computes Elo-style team ratings from a chronological results file. Ratings are \
                 scaled by goal difference, regress toward the division baseline at the start of \
                 each season, and receive a bonus or penalty on promotion and relegation."
)]
struct Args {
    /// Input results file
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "dry_run",
        help = "CSV with columns: Date, Div, HomeTeam, AwayTeam, FTHG, FTAG"
    )]
    input: Option<PathBuf>,

    /// Output ledger file
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "dry_run",
        help = "Output CSV path for per-match MMR rows"
    )]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// K factor override
    #[arg(long, value_name = "K", help = "Base rating-change multiplier")]
    k: Option<f64>,

    /// Home advantage override
    #[arg(long = "home-adv", value_name = "POINTS", help = "Home advantage in rating points")]
    home_adv: Option<f64>,

    /// Season blend override
    #[arg(
        long,
        value_name = "WEIGHT",
        help = "Weight of the division baseline at a season change, 0..1"
    )]
    season_blend: Option<f64>,

    /// Promotion bonus override
    #[arg(long, value_name = "POINTS", help = "Rating nudge on promotion")]
    promotion_bonus: Option<f64>,

    /// Relegation nerf override
    #[arg(long, value_name = "POINTS", help = "Rating nudge on relegation (positive magnitude)")]
    relegation_nerf: Option<f64>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without processing")]
    dry_run: bool,

    /// Print final standings
    #[arg(long, help = "Print final ratings for every team after processing")]
    standings: bool,

    /// Print one team's history
    #[arg(long, value_name = "TEAM", help = "Print a team's rating history as JSON")]
    timeline: Option<String>,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(k) = args.k {
        config.rating.k = k;
    }
    if let Some(home_adv) = args.home_adv {
        config.rating.home_advantage = home_adv;
    }
    if let Some(blend) = args.season_blend {
        config.rating.season_blend = blend;
    }
    if let Some(bonus) = args.promotion_bonus {
        config.rating.promotion_bonus = bonus;
    }
    if let Some(nerf) = args.relegation_nerf {
        config.rating.relegation_nerf = nerf;
    }

    division_mmr::config::validate_config(&config)?;
    Ok(config)
}

/// Display run parameters
fn display_parameters(config: &AppConfig) {
    info!("{} v{}", config.service.name, division_mmr::VERSION);
    info!("   K: {}", config.rating.k);
    info!("   Home advantage: {}", config.rating.home_advantage);
    info!("   Season blend: {}", config.rating.season_blend);
    info!("   Promotion bonus: {}", config.rating.promotion_bonus);
    info!("   Relegation nerf: {}", config.rating.relegation_nerf);
    info!("   Known divisions: {}", config.taxonomy.divisions.len());
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let (Some(input), Some(output)) = (&args.input, &args.output) else {
        return Err(anyhow::anyhow!("--input and --output are required"));
    };

    let loaded = read_matches_from_path(input)?;
    info!(
        "Read {} rows from {} ({} dropped)",
        loaded.rows_read,
        input.display(),
        loaded.rows_dropped
    );

    let taxonomy = CompetitionTaxonomy::new(&config.taxonomy);
    let mut processor = MatchProcessor::new(config.rating, taxonomy)?;
    let rows = processor.process_all(&loaded.records)?;

    let written = write_audit_rows_to_path(output, &rows)?;
    println!("Wrote {} rows to {}", written, output.display());

    if args.standings {
        println!();
        println!("{:>4}  {:<30} {:>10} {:>6} {:>4}", "#", "Team", "MMR", "Season", "Tier");
        for (rank, entry) in processor.ledger().standings().iter().enumerate() {
            println!(
                "{:>4}  {:<30} {:>10.3} {:>6} {:>4}",
                rank + 1,
                entry.team,
                entry.rating,
                entry.season.map(|s| s.to_string()).unwrap_or_default(),
                entry.tier.map(|t| t.to_string()).unwrap_or_default()
            );
        }
    }

    if let Some(team) = &args.timeline {
        let timeline = team_timeline(&rows, team);
        if timeline.is_empty() {
            warn!("Team {} does not appear in the input", team);
        }
        println!("{}", serde_json::to_string_pretty(&timeline)?);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_parameters(&config);

    if args.dry_run {
        info!("Configuration validation successful - exiting without processing");
        return Ok(());
    }

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
