use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use polldash::cli;
use polldash::config::{self, PolldashConfig};
use polldash::web;

#[derive(Debug, Parser)]
#[command(name = "polldash")]
#[command(about = "Pollution data monitoring dashboard for pre-rendered analytical charts")]
struct App {
    /// Running with no subcommand starts the dashboard server.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the dashboard web server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Listener port (overrides config)
        #[arg(long)]
        port: Option<u16>,
        /// Directory containing the pre-rendered chart HTML files
        #[arg(long)]
        chart_dir: Option<PathBuf>,
        /// Do not open the dashboard in the default browser
        #[arg(long)]
        no_browser: bool,
    },
    /// List the chart catalog
    Catalog {
        /// Output format: table (default), json
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Verify that every cataloged chart file exists on disk
    Check {
        /// Directory containing the pre-rendered chart HTML files
        #[arg(long)]
        chart_dir: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default config to ~/.polldash/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Set a config key, e.g. `polldash config set server.port 8080`
    Set { key: String, value: String },
    /// Reset the config file to defaults
    Reset,
}

fn main() -> Result<()> {
    let app = App::parse();
    let cfg = config::load();

    match app.command {
        None => web::serve(&cfg),
        Some(Commands::Serve {
            host,
            port,
            chart_dir,
            no_browser,
        }) => {
            let cfg = apply_serve_overrides(cfg, host, port, chart_dir, no_browser);
            web::serve(&cfg)
        }
        Some(Commands::Catalog { format }) => {
            let fmt = cli::OutputFormat::from_str_opt(Some(&format));
            cli::run_catalog(fmt)
        }
        Some(Commands::Check { chart_dir }) => {
            let dir = chart_dir.unwrap_or_else(|| PathBuf::from(&cfg.charts.dir));
            cli::run_check(&dir)
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => cli::run_config_show(),
            ConfigAction::Init { force } => cli::run_config_init(force),
            ConfigAction::Set { key, value } => cli::run_config_set(&key, &value),
            ConfigAction::Reset => cli::run_config_reset(),
        },
    }
}

/// Layer `serve` CLI flags over the loaded config (flags win).
fn apply_serve_overrides(
    mut cfg: PolldashConfig,
    host: Option<String>,
    port: Option<u16>,
    chart_dir: Option<PathBuf>,
    no_browser: bool,
) -> PolldashConfig {
    if let Some(host) = host {
        cfg.server.host = host;
    }
    if let Some(port) = port {
        cfg.server.port = port;
    }
    if let Some(dir) = chart_dir {
        cfg.charts.dir = dir.display().to_string();
    }
    if no_browser {
        cfg.server.open_browser = false;
    }
    cfg
}
