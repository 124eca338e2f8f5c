use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use ircremote_core::{Dispatcher, PlaybackTarget};

use crate::config::ClientConfig;
use crate::session::{Session, SessionEnd, SessionError};
use crate::transport::{Connector, TCPConnector};

/// Keeps one connection to the server alive: connect, run the session, wait, retry.
pub struct Supervisor<C> {
    config: ClientConfig,
    connector: C,
    dispatcher: Dispatcher,
}

impl Supervisor<TCPConnector> {
    pub fn new(config: ClientConfig, target: Arc<dyn PlaybackTarget>) -> Self {
        Self::with_connector(config, target, TCPConnector)
    }
}

impl<C: Connector> Supervisor<C> {
    pub fn with_connector(
        config: ClientConfig,
        target: Arc<dyn PlaybackTarget>,
        connector: C,
    ) -> Self {
        let dispatcher = Dispatcher::new(&config.channel, target);
        Self {
            config,
            connector,
            dispatcher,
        }
    }

    async fn connect_and_run(&self, shutdown: &CancellationToken) -> SessionEnd {
        let config = &self.config;
        log::info!(
            "creating IRC connection to {}:{}...",
            config.server,
            config.port
        );

        let stream = tokio::select! {
            _ = shutdown.cancelled() => return SessionEnd::Shutdown,
            result = self.connector.connect(&config.server, config.port) => result,
        };
        let stream = match stream {
            Ok(stream) => stream,
            Err(err) => return SessionEnd::Failed(SessionError::Connect(err)),
        };
        log::info!("connected to {}", config.server);

        let session = match Session::init(stream, config) {
            Ok(session) => session,
            Err(err) => return SessionEnd::Failed(err.into()),
        };
        session.run(config, &self.dispatcher, shutdown).await
    }

    /// Only returns once `shutdown` is cancelled.
    pub async fn run(&self, shutdown: CancellationToken) {
        while !shutdown.is_cancelled() {
            match self.connect_and_run(&shutdown).await {
                SessionEnd::Closed => log::warn!("connection closed by the server"),
                SessionEnd::Failed(err) => log::error!("connection failed: {err}"),
                SessionEnd::Shutdown => break,
            }

            log::info!("reconnecting in {:?}", self.config.reconnect_delay);
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.config.reconnect_delay) => {}
            }
        }
        log::info!("IRC client stopped");
    }
}
