use tokio::net::TcpStream;

use crate::stream::Stream;

pub trait Connector {
    type Stream: Stream + 'static;

    fn connect(
        &self,
        server: &str,
        port: u16,
    ) -> impl std::future::Future<Output = std::io::Result<Self::Stream>> + Send;
}

pub struct TCPConnector;

impl Connector for TCPConnector {
    type Stream = TcpStream;

    async fn connect(&self, server: &str, port: u16) -> std::io::Result<Self::Stream> {
        let stream = TcpStream::connect((server, port)).await?;
        stream.set_nodelay(true)?;
        Ok(stream)
    }
}
