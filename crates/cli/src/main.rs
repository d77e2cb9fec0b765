//! scoreboard-demo: run the sorted-set injection demonstration
//!
//! With no arguments: connect to redis://127.0.0.1:6379/, add
//! `FizzBuzz101` with score 1336, add `["test",1337,"pwned"]` with score 0,
//! print the top 100 entries with scores. Any store error exits non-zero
//! before anything is printed to stdout.

mod args;
mod logging;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use scoreboard::{run_demo, InMemoryStore, RedisStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let config = cli
        .resolve_config()
        .context("failed to load configuration")?;
    tracing::debug!(?config, "resolved configuration");

    let report = if cli.in_memory {
        run_demo(InMemoryStore::new(), &config)
    } else {
        let store = RedisStore::connect(&config.url)?;
        run_demo(store, &config)
    }
    .context("scoreboard demonstration failed")?;

    println!("{}", report);
    Ok(())
}
