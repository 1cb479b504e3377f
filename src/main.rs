mod cli;

use clap::Parser;
use std::path::{Path, PathBuf};
use toolmatch::advisory::AnthropicAdvisor;
use toolmatch::catalog::Catalog;
use toolmatch::config;
use toolmatch::engine::{self, refine::Refinement};
use toolmatch::error::{Result, ToolmatchError};
use toolmatch::observe::TracingObserver;
use toolmatch::report::{self, explain, OutputFormat, RecommendationReport};
use toolmatch::types::config::ToolmatchConfig;
use toolmatch::types::preferences::Preferences;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_RECOMMENDATIONS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_preferences(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        return Err(ToolmatchError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let prefs = if is_json {
        Preferences::from_json_str(&content)?
    } else {
        Preferences::from_toml_str(&content)?
    };
    prefs.validate()?;
    Ok(prefs)
}

fn load_catalog(flag: Option<&PathBuf>, config: &ToolmatchConfig) -> Result<Catalog> {
    match flag.or(config.catalog_path()) {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog");
            Catalog::from_path(path)
        }
        None => Catalog::embedded(),
    }
}

fn run(cli: cli::Cli) -> Result<i32> {
    let root = match cli.config_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config = config::load_config(&root)?.unwrap_or_default();

    match cli.command {
        cli::Commands::Recommend(cmd) => {
            let prefs = load_preferences(&cmd.preferences)?;
            let catalog = load_catalog(cmd.catalog.as_ref(), &config)?;
            let format = match cmd.format {
                Some(format) => OutputFormat::from(format),
                None => config
                    .output_format()
                    .map(str::parse::<OutputFormat>)
                    .transpose()?
                    .unwrap_or(OutputFormat::Md),
            };
            let refinement = Refinement {
                price: cmd.price.unwrap_or_default(),
                vendors: cmd.vendor,
                categories: cmd.category.into_iter().map(Into::into).collect(),
                features: cmd.feature,
            };

            let settings = config.advisory_settings();
            let advisor = if settings.enabled && !cmd.static_only {
                AnthropicAdvisor::from_env(settings.clone())?
            } else {
                None
            };

            let observer = TracingObserver;
            let recommendations = match &advisor {
                Some(advisor) => {
                    info!(model = %settings.model, "advisory enabled");
                    let runtime = tokio::runtime::Builder::new_current_thread()
                        .enable_all()
                        .build()?;
                    runtime.block_on(engine::generate(
                        &catalog,
                        &prefs,
                        advisor,
                        settings.timeout,
                        &observer,
                    ))
                }
                None => engine::recommend(&catalog, &prefs, &observer),
            };
            let recommendations = if refinement.is_active() {
                refinement.apply(recommendations)
            } else {
                recommendations
            };

            let report = RecommendationReport::new(&catalog, prefs.mode(), recommendations);
            println!("{}", report::render(&report, format)?);

            if report.recommendations.is_empty() {
                Ok(exit_code::NO_RECOMMENDATIONS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Explain(cmd) => {
            let prefs = load_preferences(&cmd.preferences)?;
            let catalog = load_catalog(cmd.catalog.as_ref(), &config)?;
            let tool = catalog
                .get(&cmd.tool_id)
                .ok_or_else(|| ToolmatchError::UnknownTool(cmd.tool_id.clone()))?;
            print!("{}", explain::explain(tool, &prefs));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            let catalog = load_catalog(cmd.catalog.as_ref(), &config)?;
            let tools: Vec<_> = match cmd.category {
                Some(category) => catalog.by_category(category.into()).collect(),
                None => catalog.tools().iter().collect(),
            };
            for tool in &tools {
                println!(
                    "{:<20} {:<11} {} ({})",
                    tool.id,
                    tool.category.as_str(),
                    tool.name,
                    tool.vendor
                );
            }
            if !cli.quiet {
                eprintln!("{} of {} tools", tools.len(), catalog.len());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let prefs = load_preferences(&cmd.preferences)?;
            println!(
                "ok: {} questionnaire with {} use case(s)",
                prefs.mode().as_str(),
                prefs.primary_use_case.len()
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
