use std::time::Duration;

use ircremote_core::DEFAULT_SEND_BUFFER_CAPACITY;
use ircremote_parser::DEFAULT_MAX_LINE_LEN;

pub const DEFAULT_PORT: u16 = 6667;
pub const DEFAULT_CLIENT_NAME: &str = "ircremote";
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(30);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server: String,
    pub port: u16,
    pub channel: String,
    pub nickname: String,
    /// sent as the realname of the USER command
    pub client_name: String,
    pub reconnect_delay: Duration,
    /// longest wait of the event loop when nothing happens on the socket
    pub poll_interval: Duration,
    pub max_line_len: usize,
    pub send_buffer_capacity: usize,
}

impl ClientConfig {
    pub fn new(server: &str, channel: &str, nickname: &str) -> Self {
        Self {
            server: server.to_owned(),
            port: DEFAULT_PORT,
            channel: channel.to_owned(),
            nickname: nickname.to_owned(),
            client_name: DEFAULT_CLIENT_NAME.to_owned(),
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_line_len: DEFAULT_MAX_LINE_LEN,
            send_buffer_capacity: DEFAULT_SEND_BUFFER_CAPACITY,
        }
    }
}
