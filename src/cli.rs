use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use toolmatch::engine::refine::{Feature, PriceBand};
use toolmatch::report::OutputFormat;
use toolmatch::types::tool::Category;

#[derive(Parser)]
#[command(
    name = "toolmatch",
    version,
    about = "Recommend AI tools from a questionnaire of preferences"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding toolmatch.toml (defaults to the current directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog tools against a preferences file
    Recommend(RecommendCommand),
    /// Show how one tool scores against a preferences file
    Explain(ExplainCommand),
    /// List the tools in the catalog
    Catalog(CatalogCommand),
    /// Check a preferences file without scoring anything
    Validate(ValidateCommand),
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Preferences file (TOML, or JSON with a .json extension)
    pub preferences: PathBuf,
    /// Catalog file; the built-in catalog is used otherwise
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Skip the advisory service even when it is configured
    #[arg(long)]
    pub static_only: bool,
    /// all, free, under20, under50 or under100
    #[arg(long)]
    pub price: Option<PriceBand>,
    #[arg(long)]
    pub vendor: Vec<String>,
    #[arg(long, value_enum)]
    pub category: Vec<CategoryArg>,
    /// api, mobile, offline, team or privacy; all must match
    #[arg(long)]
    pub feature: Vec<Feature>,
}

#[derive(Args)]
pub struct ExplainCommand {
    pub tool_id: String,
    pub preferences: PathBuf,
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct CatalogCommand {
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub preferences: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Md,
    Json,
    Csv,
    Share,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Md => OutputFormat::Md,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Csv => OutputFormat::Csv,
            ReportFormat::Share => OutputFormat::Share,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Text,
    Image,
    Code,
    Business,
    Multimodal,
}

impl From<CategoryArg> for Category {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Text => Category::Text,
            CategoryArg::Image => Category::Image,
            CategoryArg::Code => Category::Code,
            CategoryArg::Business => Category::Business,
            CategoryArg::Multimodal => Category::Multimodal,
        }
    }
}
