//! Chat bridge start-up entry point.
//!
//! Loads the bridge configuration exactly once, before any collaborator
//! starts, and decides whether start-up may continue.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ init_logging()          -- tracing subscriber, RUST_LOG aware
//!  └─ ConfigPaths::resolve()  -- --config-dir / CHAT_BRIDGE_CONFIG_DIR / platform dir
//!  └─ ConfigLoader::load()
//!       ├─ Loaded             -> hand the config to the relay collaborators
//!       ├─ DefaultsGenerated  -> ask the operator to edit the file, stop
//!       └─ Err                -> abort start-up with a non-zero status
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use bridge_host::application::{ConfigLoader, LoadOutcome};
use bridge_host::infrastructure::logging::init_logging;
use bridge_host::infrastructure::process::StdProcessExit;
use bridge_host::infrastructure::storage::file_store::FileDocumentStore;
use bridge_host::infrastructure::storage::paths::ConfigPaths;

/// Chat bridge between a game server and a messaging-platform channel.
#[derive(Debug, Parser)]
#[command(name = "chat-bridge", version, about)]
struct Args {
    /// Directory holding bridge.toml.  Defaults to the platform config directory.
    #[arg(long, env = "CHAT_BRIDGE_CONFIG_DIR")]
    config_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let paths = ConfigPaths::resolve(args.config_dir)
        .context("unable to locate the configuration directory")?;
    let loader = ConfigLoader::new(
        Arc::new(FileDocumentStore::new(&paths)),
        Arc::new(StdProcessExit),
    );

    match loader.load().context("bridge configuration could not be loaded")? {
        LoadOutcome::Loaded(config) => {
            info!(
                "bridge ready: channel {}, locale {}, {} authorized role(s)",
                config.channel_id,
                config.locale,
                config.authorized_role_list().len()
            );
        }
        LoadOutcome::DefaultsGenerated(outcome) => {
            warn!(
                "a default configuration was written to {}; edit it and restart",
                outcome.path().display()
            );
        }
    }

    Ok(())
}
