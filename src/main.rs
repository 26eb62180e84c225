mod cli;

use clap::Parser;
use ridematch::catalog::{self, Catalog};
use ridematch::error::RideMatchError;
use ridematch::report::{self, OutputFormat};
use ridematch::requirements::{required_motor_power_w, required_range_km};
use ridematch::types::config::RideMatchConfig;
use ridematch::types::report::RecommendationReport;
use ridematch::{answers, config, rank, scoring, telemetry};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const EMPTY_CATALOG: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

const DEFAULT_CATALOG_DIR: &str = "catalog";

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn resolve_catalog(
    explicit: Option<&PathBuf>,
    config_dir: &Path,
    cfg: &RideMatchConfig,
) -> PathBuf {
    match explicit {
        Some(path) => path.clone(),
        None => config_dir.join(
            cfg.catalog_path()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_DIR)),
        ),
    }
}

fn load_non_empty(path: &Path) -> Result<Option<Catalog>, RideMatchError> {
    let loaded = catalog::load(path)?;
    if loaded.is_empty() {
        warn!(path = %path.display(), "catalog has no items");
        eprintln!("warning: catalog at {} has no items", path.display());
        return Ok(None);
    }
    Ok(Some(loaded))
}

fn run() -> Result<i32, RideMatchError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    let config_dir = cli.config_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    if !config_dir.exists() {
        return Err(RideMatchError::PathNotFound(config_dir.display().to_string()));
    }
    let cfg = config::load_config(&config_dir)?.unwrap_or_default();
    let settings = cfg.engine_settings();

    match cli.command {
        cli::Commands::Recommend(cmd) => {
            let catalog_path = resolve_catalog(cmd.catalog.as_ref(), &config_dir, &cfg);
            let Some(catalog) = load_non_empty(&catalog_path)? else {
                return Ok(exit_code::EMPTY_CATALOG);
            };
            let answers = answers::load_answers(&cmd.answers)?;

            let scored = scoring::score_catalog(&catalog.items, &answers, &settings);
            let count = if cmd.all {
                scored.len()
            } else {
                cmd.top.unwrap_or_else(|| cfg.top_n())
            };
            let recommendations = rank::top_recommendations(scored, count);
            info!(
                returned = recommendations.len(),
                catalog = catalog.len(),
                "recommendations ranked"
            );

            let report = RecommendationReport::new(
                catalog.digest.clone(),
                catalog.len(),
                required_range_km(answers.daily_distance()),
                required_motor_power_w(answers.rider_weight(), answers.road_terrain()),
                recommendations,
            );
            let rendered = report::render(&report, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Explain(cmd) => {
            let catalog_path = resolve_catalog(cmd.catalog.as_ref(), &config_dir, &cfg);
            let Some(catalog) = load_non_empty(&catalog_path)? else {
                return Ok(exit_code::EMPTY_CATALOG);
            };
            let answers = answers::load_answers(&cmd.answers)?;

            let item = catalog
                .find(&cmd.item)
                .ok_or_else(|| RideMatchError::UnknownItem(cmd.item.clone()))?;
            let result = scoring::score_item(item, &answers, &settings);
            let rendered = report::render_result(&result, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            let catalog_path = resolve_catalog(cmd.path.as_ref(), &config_dir, &cfg);
            let Some(catalog) = load_non_empty(&catalog_path)? else {
                return Ok(exit_code::EMPTY_CATALOG);
            };

            println!("catalog: {} ({} items)", catalog.root.display(), catalog.len());
            println!("digest: {}", catalog.digest);
            for item in &catalog.items {
                println!(
                    "- {} [{}] {}",
                    item.id,
                    item.display_name(),
                    item.source.as_deref().unwrap_or("-")
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
