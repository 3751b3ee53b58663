mod run;

use clap::{Parser, Subcommand};
use mas_core::{AppConfig, Strategy};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mas-cli")]
#[command(about = "Marketing agent system command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Target site and credential shared by every run command.
#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Website to analyze
    #[arg(long)]
    url: String,

    /// `OpenAI` API key; never written to logs
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate one marketing strategy for a website
    Strategy {
        /// Strategy slug, see `strategies`
        strategy: Strategy,

        #[command(flatten)]
        args: RunArgs,
    },
    /// Run the multi-agent brand analysis
    Analyze {
        #[command(flatten)]
        args: RunArgs,
    },
    /// List available strategy slugs
    Strategies,
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Config is read only by commands that run the pipeline, so `--help` and
/// `strategies` work even with a broken environment.
fn load_config() -> anyhow::Result<AppConfig> {
    let config = mas_core::load_app_config_from_env()?;
    init_tracing(&config.log_level)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Strategy { strategy, args }) => {
            let config = load_config()?;
            run::run_strategy(&config, strategy, &args).await?;
        }
        Some(Commands::Analyze { args }) => {
            let config = load_config()?;
            run::run_analysis(&config, &args).await?;
        }
        Some(Commands::Strategies) => run::list_strategies(),
        None => println!("mas-cli ready; see --help for commands"),
    }

    Ok(())
}
