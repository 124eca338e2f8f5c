use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;

use ircremote_client::ClientConfig;

#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Drives a media playlist from an IRC channel")]
pub struct Args {
    /// YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// IRC server host name
    #[arg(long)]
    pub server: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// channel to join, with its leading '#'
    #[arg(long)]
    pub channel: Option<String>,

    #[arg(long)]
    pub nick: Option<String>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No {0} specified, use --{0}")]
    Missing(&'static str),
}

#[serde_with::serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub channel: Option<String>,
    pub nick: Option<String>,
    pub client_name: Option<String>,
    #[serde_as(as = "Option<serde_with::DurationSeconds<u64>>")]
    pub reconnect_delay: Option<Duration>,
}

impl Config {
    pub fn load_from_str(str: &str) -> Result<Self, anyhow::Error> {
        let config: Config = serde_yml::from_str(str)?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, anyhow::Error> {
        let string = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {path:?}"))?;
        Config::load_from_str(string.as_str())
            .with_context(|| format!("parsing config file {path:?}"))
    }

    /// Command line values win over the file.
    pub fn merge_args(mut self, args: &Args) -> Self {
        if let Some(server) = &args.server {
            self.server = Some(server.clone());
        }
        if let Some(port) = args.port {
            self.port = Some(port);
        }
        if let Some(channel) = &args.channel {
            self.channel = Some(channel.clone());
        }
        if let Some(nick) = &args.nick {
            self.nick = Some(nick.clone());
        }
        self
    }

    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let server = self.server.as_deref().ok_or(ConfigError::Missing("server"))?;
        let channel = self
            .channel
            .as_deref()
            .ok_or(ConfigError::Missing("channel"))?;
        let nick = self.nick.as_deref().ok_or(ConfigError::Missing("nick"))?;

        let mut config = ClientConfig::new(server, channel, nick);
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(client_name) = &self.client_name {
            config.client_name.clone_from(client_name);
        }
        if let Some(reconnect_delay) = self.reconnect_delay {
            config.reconnect_delay = reconnect_delay;
        }
        Ok(config)
    }
}
