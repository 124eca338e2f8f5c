mod config;
mod session;
mod stream;
mod supervisor;
mod transport;

pub use config::{
    ClientConfig, DEFAULT_CLIENT_NAME, DEFAULT_POLL_INTERVAL, DEFAULT_PORT,
    DEFAULT_RECONNECT_DELAY,
};
pub use session::{SessionEnd, SessionError};
pub use stream::Stream;
pub use supervisor::Supervisor;
pub use transport::{Connector, TCPConnector};
