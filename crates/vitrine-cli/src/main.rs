use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use vitrine_assist::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the product catalog CSV (default: ./data)
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    /// Minimum similarity (exclusive) for a product to count as relevant (default: 0.2)
    #[arg(long, global = true)]
    threshold: Option<f64>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Serve the chat API over HTTP
    ///
    /// Loads the first CSV file (by name) in the catalog directory, builds the
    /// relevance index once, and then answers POST /api/chat requests:
    ///
    /// - Finds the products most similar to the question (TF-IDF, cosine)
    /// - Passes the best matches to the language model as context
    /// - Replies with a fixed apology when nothing is relevant
    ///
    /// The server refuses to start when the catalog is missing, malformed,
    /// or has nothing to index.
    ///
    /// Endpoints: POST /api/chat, POST /api/search, GET /health
    Serve {
        /// Listen address (default: 0.0.0.0:8000)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Rank catalog products against a query
    Query {
        /// Query text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Show at most this many results
        #[arg(long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer one question with the language model
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show catalog and index statistics
    Catalog,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print one value, or the whole config file
    Get {
        key: Option<String>,
    },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    init_logging(&config.log_level);

    if let Some(dir) = cli.catalog_dir {
        config.catalog_dir = dir;
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            commands::run_serve(config).await?;
        }
        Commands::Query { text, limit, json } => {
            commands::run_query(&config, &text.join(" "), limit, json)?;
        }
        Commands::Ask { text } => {
            commands::run_ask(config, &text.join(" ")).await?;
        }
        Commands::Catalog => {
            commands::show_catalog(&config)?;
        }
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => commands::config::show_config(&config),
            ConfigAction::Get { key } => commands::config::get_config(&config, key)?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
