//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "brave-search-mcp",
    about = "Brave Search MCP server - web and local search tools over stdio",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional settings file (YAML or JSON)
    #[arg(
        long,
        env = "BRAVE_SEARCH_CONFIG",
        help = "Settings file overriding base URL, timeout and user agent"
    )]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Serve MCP over stdio (default)
    Serve,

    /// Print the advertised tool definitions as JSON
    Tools,

    /// Run a single tool call and print its text result
    Call {
        /// Tool name, e.g. web_search
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long = "args", help = "Tool arguments as a JSON object")]
        args: Option<String>,
    },
}
