use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use ircremote_client::Supervisor;

mod config;
mod playlist;
use crate::config::{Args, Config};
use crate::playlist::Playlist;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    }
    .merge_args(&args);

    let client_config = match config.client_config() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("{err}");
            return Ok(());
        }
    };

    let playlist = Arc::new(Playlist::default());
    let supervisor = Supervisor::new(client_config, playlist);

    let shutdown = CancellationToken::new();
    let handle = tokio::spawn({
        let shutdown = shutdown.clone();
        async move { supervisor.run(shutdown).await }
    });

    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("cannot listen for ctrl-c: {err}");
    }
    log::info!("shutting down");
    shutdown.cancel();
    handle.await?;

    Ok(())
}
