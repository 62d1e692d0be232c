//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for tavily-tool
#[derive(Parser, Debug)]
#[command(name = "tavily-tool")]
#[command(author, version, about = "Web search through Tavily, with LLM-extracted parameters")]
#[command(long_about = r#"
tavily-tool answers a free-text search request with an HTML fragment.

A language model first turns the request into search parameters (domains,
number of results, topic, time range). The request is then sent to the
Tavily search API and the results are rendered as HTML.

Configuration files are loaded from (in priority order):
1. TAVILY_TOOL_<SECTION>__<KEY>            Environment overrides
2. --config <path>                         Explicit config file
3. ./tavily.toml or ./.tavily.toml         Project-level config
4. ~/.config/tavily-tool/config.toml       Global config

Example:
  tavily-tool search "find 3 articles from example.com about sport"
  tavily-tool search cerca notizie sui cambiamenti climatici degli ultimi 5 giorni
  tavily-tool schema
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a search and print the HTML result
    Search {
        /// The search request in natural language
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// JSON settings file in the host format, re-read on every search.
        /// Replaces the [tavily] settings from the config files.
        #[arg(long, value_name = "PATH")]
        settings: Option<PathBuf>,
    },

    /// Print the settings schema as JSON
    Schema {
        /// Print only the field with this key
        #[arg(long, value_name = "KEY", conflicts_with = "defaults")]
        field: Option<String>,

        /// Print the default settings object instead of the form
        #[arg(long)]
        defaults: bool,
    },

    /// Print the tool definition as JSON
    ToolInfo,

    /// Show configuration sources, effective values and problems
    Config,
}

impl Command {
    /// The search request as one string.
    pub fn query_text(query: &[String]) -> String {
        query.join(" ")
    }
}
