//! OctoFit CLI
//!
//! Terminal host for the resource views:
//! - Show one resource list
//! - Browse a list interactively (refresh / retry)
//! - Load the whole dashboard at once
//! - Generate a config file

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use octofit::config::{generate_default_config, Config};
use octofit::render::to_text;
use octofit::resource::{HttpFetcher, LoadOutcome, ResourceListView, ResourceSpec, ResourceStatus};
use octofit::resources::{self, ResourceKind};

#[derive(Parser)]
#[command(name = "octofit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OctoFit Tracker dashboard in the terminal")]
#[command(long_about = "Browse the activities, workouts, teams, leaderboard and users of an OctoFit Tracker API.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and OCTOFIT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load one resource list and print it
    Show {
        resource: ResourceKind,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show a resource list and keep it open: `r` refreshes, `q` quits
    Browse { resource: ResourceKind },

    /// Load all five lists concurrently
    Dashboard,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_deref());
    }

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    octofit::logging::init(&config.logging);

    tracing::debug!("OctoFit v{} using {}", env!("CARGO_PKG_VERSION"), config.api.base_url);

    let fetcher = Arc::new(HttpFetcher::new(config.api.request_timeout())?);
    let host = Host {
        fetcher,
        base_url: config.api.base_url.clone(),
        card_limit: config.dashboard.card_limit,
    };

    match cli.command {
        Commands::Show { resource, format } => {
            let status = match resource {
                ResourceKind::Activities => host.show(resources::activities(), format).await?,
                ResourceKind::Workouts => host.show(resources::workouts(), format).await?,
                ResourceKind::Teams => host.show(resources::teams(), format).await?,
                ResourceKind::Leaderboard => host.show(resources::leaderboard(), format).await?,
                ResourceKind::Users => host.show(resources::users(), format).await?,
            };
            if status == ResourceStatus::Failed {
                std::process::exit(1);
            }
        }

        Commands::Browse { resource } => match resource {
            ResourceKind::Activities => host.browse(resources::activities()).await?,
            ResourceKind::Workouts => host.browse(resources::workouts()).await?,
            ResourceKind::Teams => host.browse(resources::teams()).await?,
            ResourceKind::Leaderboard => host.browse(resources::leaderboard()).await?,
            ResourceKind::Users => host.browse(resources::users()).await?,
        },

        Commands::Dashboard => {
            let (activities, workouts, teams, leaderboard, users) = tokio::join!(
                host.render_once(resources::activities()),
                host.render_once(resources::workouts()),
                host.render_once(resources::teams()),
                host.render_once(resources::leaderboard()),
                host.render_once(resources::users()),
            );

            for section in [activities, workouts, teams, leaderboard, users] {
                println!("{}", section);
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn write_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Everything a view needs from the process
struct Host {
    fetcher: Arc<HttpFetcher>,
    base_url: String,
    card_limit: usize,
}

impl Host {
    fn mount<T>(&self, spec: ResourceSpec<T>) -> ResourceListView<T, HttpFetcher>
    where
        T: DeserializeOwned + Clone + Send + 'static,
    {
        ResourceListView::mount(
            spec.with_card_limit(self.card_limit),
            Arc::clone(&self.fetcher),
            &self.base_url,
        )
    }

    async fn show<T>(&self, spec: ResourceSpec<T>, format: OutputFormat) -> anyhow::Result<ResourceStatus>
    where
        T: DeserializeOwned + Serialize + Clone + Send + 'static,
    {
        let view = self.mount(spec);
        view.load().await;

        let state = view.snapshot();
        match (format, state.status()) {
            (OutputFormat::Json, ResourceStatus::Loaded) => {
                println!("{}", serde_json::to_string_pretty(state.items())?);
            }
            (OutputFormat::Json, _) => {
                eprintln!("{}", state.last_error().unwrap_or("Unknown error"));
            }
            (OutputFormat::Table, _) => print!("{}", to_text(&view.render())),
        }

        view.unmount();
        Ok(state.status())
    }

    async fn browse<T>(&self, spec: ResourceSpec<T>) -> anyhow::Result<()>
    where
        T: DeserializeOwned + Clone + Send + 'static,
    {
        let view = self.mount(spec);
        print!("{}", to_text(&view.render()));
        view.load().await;
        print!("{}", to_text(&view.render()));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            eprintln!("[r] refresh  [q] quit");
            let Some(line) = lines.next_line().await? else {
                break;
            };

            match line.trim() {
                "r" | "R" => {
                    let outcome = match view.status() {
                        ResourceStatus::Failed => view.retry().await,
                        _ => view.refresh().await,
                    };
                    if outcome != LoadOutcome::Discarded {
                        print!("{}", to_text(&view.render()));
                    }
                }
                "q" | "Q" => break,
                "" => {}
                other => eprintln!("Unknown command: {}", other),
            }
        }

        view.unmount();
        Ok(())
    }

    async fn render_once<T>(&self, spec: ResourceSpec<T>) -> String
    where
        T: DeserializeOwned + Clone + Send + 'static,
    {
        let view = self.mount(spec);
        view.load().await;
        let text = to_text(&view.render());
        view.unmount();
        text
    }
}
