//! Configuration file loading for tavily-tool
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TAVILY_TOOL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tavily.toml` or `./.tavily.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tavily-tool/config.toml`
//! 5. Fallback: `~/.config/tavily-tool/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLlmConfig, FileTavilyConfig};
pub use loader::{ConfigLoader, ENV_PREFIX};
