use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use frac_showcase::{
    CatalogError, CatalogStore, HeadlessViewer, InfoPanel, Shell, ShowcaseConfig, ViewerRuntime,
};

#[derive(Parser)]
#[command(name = "frac-showcase", version)]
#[command(about = "Browse a catalog of fracturing tools and their 3D models", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (overrides FRAC_SHOWCASE_CONFIG and the default locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start with an empty catalog instead of the sample tools
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List groups with their tool counts
    Groups,

    /// List tools
    List {
        /// Show only tools in this group
        #[arg(long)]
        group: Option<String>,
    },

    /// Show one tool's details
    Show {
        /// Tool id or exact name
        tool: String,

        /// Print the tool as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse and edit the catalog interactively
    Shell,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive("warn".parse().expect("valid log directive"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ShowcaseConfig> {
    let config = match path {
        Some(path) => ShowcaseConfig::load_from_file(path)?,
        None => ShowcaseConfig::load()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref()).context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let mut store = if cli.empty || !config.catalog.seed_sample_data {
        CatalogStore::new()
    } else {
        CatalogStore::with_sample_data()
    };

    match cli.command {
        Commands::Groups => {
            for group in store.list_groups() {
                println!("{:<24} {}", group, store.group_count(&group));
            }
        }

        Commands::List { group } => {
            if let Some(group) = group {
                store.select_group(group);
            }

            let tools = store.filtered_tools();
            if tools.is_empty() {
                println!("No tools found.");
                return Ok(());
            }

            println!("{:<10} {:<20} NAME", "ID", "GROUP");
            println!("{}", "-".repeat(70));
            for tool in tools {
                println!("{}", tool);
            }
        }

        Commands::Show { tool, json } => {
            let tool = store
                .find_tool(&tool)
                .ok_or_else(|| CatalogError::ToolNotFound(tool.clone()))?;

            if json {
                let out = serde_json::to_string_pretty(tool).context("failed to serialize tool")?;
                println!("{}", out);
            } else {
                println!("{}", InfoPanel::for_tool(tool));
            }
        }

        Commands::Shell => {
            let _runtime = ViewerRuntime::init(&config.viewer.runtime_url)
                .context("failed to load viewer runtime")?;
            info!("starting shell");

            let stdin = std::io::stdin();
            let mut shell = Shell::new(
                store,
                Arc::new(HeadlessViewer::new()),
                config.viewer,
                stdin.lock(),
                std::io::stdout(),
            );
            shell.run().await?;
        }
    }

    Ok(())
}
