mod cli;
mod commands;
mod offline;
mod paths;

use clap::Parser;
use cli::{Cli, Commands};
use dailyverse_core::Config;
use paths::Paths;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries poems and JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Commands::Version = cli.command {
        return commands::version::run();
    }

    let paths = Paths::new()?;
    if let Commands::Analyze { file: Some(file) } = &cli.command {
        let config = Config::load(&paths.config_file())?;
        return commands::analyze::run_file(std::path::Path::new(file), &config);
    }

    let orchestrator = commands::open_orchestrator(&paths)?;
    match cli.command {
        Commands::Today => commands::poem::today(&orchestrator).await,
        Commands::Refresh => commands::poem::refresh(&orchestrator).await,
        Commands::Vibe => commands::poem::vibe(&orchestrator).await,
        Commands::Write { prompt } => commands::poem::write(&orchestrator, &prompt).await,
        Commands::Analyze { .. } => commands::analyze::run(&orchestrator).await,
        Commands::History { stats, grouped } => {
            commands::history::run(&orchestrator, stats, grouped).await
        }
        Commands::Streak => commands::history::streak(&orchestrator).await,
        Commands::Favorites => commands::favorites::list(&orchestrator).await,
        Commands::Favorite { poem_id } => {
            commands::favorites::toggle(&orchestrator, &poem_id).await
        }
        Commands::Forget { entry_id } => {
            commands::history::forget(&orchestrator, &entry_id).await
        }
        Commands::ClearHistory => commands::history::clear(&orchestrator).await,
        Commands::Version => commands::version::run(),
    }
}
