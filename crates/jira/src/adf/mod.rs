pub mod inspect;
pub mod render;
pub mod replace;

use crate::config::Config;
use crate::prelude::*;

/// ADF module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "adf")]
#[command(about = "Atlassian Document Format (ADF) operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Render an ADF document as Markdown or Jira wiki markup
    #[clap(name = "render")]
    Render(render::RenderOptions),

    /// Replace text in every text node of an ADF document
    #[clap(name = "replace")]
    Replace(replace::ReplaceOptions),

    /// List the nodes of an ADF document with their classification
    #[clap(name = "inspect")]
    Inspect(inspect::InspectOptions),
}

/// Module entry point
pub fn run(app: App, config: Config) -> Result<()> {
    log::debug!("Running ADF command with {:?}", config);

    match app.command {
        Commands::Render(options) => render::handler(options, &config),
        Commands::Replace(options) => replace::handler(options, &config),
        Commands::Inspect(options) => inspect::handler(options, &config),
    }
}
