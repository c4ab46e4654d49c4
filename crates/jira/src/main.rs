use std::path::PathBuf;

use crate::prelude::*;
use clap::Parser;

mod adf;
mod config;
mod error;
mod input;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Render and rewrite Jira issue content stored as Atlassian Document Format (ADF)"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Configuration file (defaults to <config dir>/jira/config.toml)
    #[clap(long, env = "JIRA_CONFIG_FILE", global = true)]
    config: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "JIRA_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Atlassian Document Format operations
    Adf(crate::adf::App),
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let app = App::parse();

    init_logger(app.global.verbose);
    color_eyre::install()?;

    let config = config::Config::load(app.global.config.as_deref())?;

    match app.command {
        SubCommands::Adf(sub_app) => crate::adf::run(sub_app, config),
    }
}
