use clap::Parser;
use scoreboard::{DemoConfig, ScoreboardError};
use std::path::PathBuf;

/// Scoreboard injection demo - stores a serialized array as a username
#[derive(Parser, Debug)]
#[command(name = "scoreboard-demo")]
#[command(version)]
#[command(about = "Insert a benign and a serialized-array entry into a sorted-set scoreboard, then print the top entries", long_about = None)]
pub struct Cli {
    /// TOML file overriding the demonstration defaults
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Store URL (default: redis://127.0.0.1:6379/)
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Ranked-set key (default: scoreboard)
    #[arg(short = 'k', long = "key")]
    pub key: Option<String>,

    /// Number of entries to read back (default: 100)
    #[arg(short = 'n', long = "limit")]
    pub limit: Option<usize>,

    /// Run against a process-local store instead of the network store
    #[arg(long = "in-memory")]
    pub in_memory: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags
    pub fn resolve_config(&self) -> Result<DemoConfig, ScoreboardError> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_toml_file(path)?,
            None => DemoConfig::default(),
        };
        if let Some(url) = &self.url {
            config = config.url(url.clone());
        }
        if let Some(key) = &self.key {
            config = config.key(key.clone());
        }
        if let Some(limit) = self.limit {
            config = config.limit(limit);
        }
        Ok(config)
    }
}
