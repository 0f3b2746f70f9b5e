//! Brave Search MCP CLI entry point

use brave_search_cli::{
    cli::{Cli, Commands},
    commands::{CallCommand, ToolsCommand},
    error::CliResult,
    utils::{init_tracing, ColoredOutput},
};
use brave_search_config::ServerConfig;
use brave_search_mcp::AppState;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", ColoredOutput::error("Error:"), e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Disable colored output if requested
    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose)?;

    info!("Brave Search MCP v{}", env!("CARGO_PKG_VERSION"));

    // Every command needs the credential, so a missing key fails before anything runs
    let config = ServerConfig::from_env(cli.config.as_deref())?;
    let app_state = AppState::from_config(config)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => brave_search_cli::commands::serve::execute(app_state).await,
        Commands::Tools => ToolsCommand::run(&app_state),
        Commands::Call { tool, args } => {
            CallCommand::run(&app_state, &tool, args.as_deref()).await
        }
    }
}
