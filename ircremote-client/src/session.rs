use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use ircremote_core::{Dispatcher, InboundMessage, OutboundMessage, SendBuffer, SendBufferError};
use ircremote_parser::{LineAssembler, parse_message};

use crate::config::ClientConfig;
use crate::stream::Stream;

const READ_CHUNK_SIZE: usize = 512;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("cannot connect: {0}")]
    Connect(#[source] std::io::Error),
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),
    #[error("the socket accepted no bytes")]
    WriteZero,
    #[error(transparent)]
    SendBuffer(#[from] SendBufferError),
}

/// How a connection ended.
#[derive(Debug)]
pub enum SessionEnd {
    /// the server closed the connection
    Closed,
    Failed(SessionError),
    Shutdown,
}

/// One live connection: the socket, the line being received and the pending output.
pub(crate) struct Session<S> {
    stream: S,
    assembler: LineAssembler,
    send_buffer: SendBuffer,
}

impl<S: Stream> Session<S> {
    pub(crate) fn init(stream: S, config: &ClientConfig) -> Result<Self, SendBufferError> {
        let mut send_buffer = SendBuffer::with_capacity(config.send_buffer_capacity);
        OutboundMessage::Nick {
            nickname: &config.nickname,
        }
        .write_to(&mut send_buffer)?;
        OutboundMessage::User {
            nickname: &config.nickname,
            client_name: &config.client_name,
        }
        .write_to(&mut send_buffer)?;

        Ok(Self {
            stream,
            assembler: LineAssembler::with_max_len(config.max_line_len),
            send_buffer,
        })
    }

    /// Runs until the connection ends. Reading has priority over writing, and at most
    /// `poll_interval` passes between two checks of `shutdown`.
    pub(crate) async fn run(
        self,
        config: &ClientConfig,
        dispatcher: &Dispatcher,
        shutdown: &CancellationToken,
    ) -> SessionEnd {
        let Session {
            stream,
            mut assembler,
            mut send_buffer,
        } = self;
        let (mut reader, mut writer) = tokio::io::split(stream);
        let mut read_buf = [0_u8; READ_CHUNK_SIZE];

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    return SessionEnd::Shutdown;
                }
                result = reader.read(&mut read_buf) => {
                    let received = match result {
                        Ok(0) => return SessionEnd::Closed,
                        Ok(received) => received,
                        Err(err) => return SessionEnd::Failed(SessionError::Read(err)),
                    };

                    #[allow(clippy::indexing_slicing)]
                    let buf = &read_buf[..received];
                    if let Err(err) = handle_received(buf, &mut assembler, &mut send_buffer, dispatcher) {
                        return SessionEnd::Failed(err.into());
                    }
                }
                result = writer.write(send_buffer.next_send_chunk()), if !send_buffer.is_empty() => {
                    match result {
                        Ok(0) => return SessionEnd::Failed(SessionError::WriteZero),
                        // partial writes are fine, the rest goes on the next round
                        Ok(sent) => send_buffer.advance(sent),
                        Err(err) => return SessionEnd::Failed(SessionError::Write(err)),
                    }
                }
                _ = tokio::time::sleep(config.poll_interval) => {}
            }
        }
    }
}

fn handle_received(
    buf: &[u8],
    assembler: &mut LineAssembler,
    send_buffer: &mut SendBuffer,
    dispatcher: &Dispatcher,
) -> Result<(), SendBufferError> {
    for line in assembler.feed_from_slice(buf) {
        match line {
            Ok(line) => handle_line(&line, send_buffer, dispatcher)?,
            Err(err) => log::warn!("dropping line: {err}"),
        }
    }
    Ok(())
}

fn handle_line(
    line: &[u8],
    send_buffer: &mut SendBuffer,
    dispatcher: &Dispatcher,
) -> Result<(), SendBufferError> {
    log::debug!("line received: {}", String::from_utf8_lossy(line));

    let message = match parse_message(line) {
        Ok(message) => message,
        Err(err) => {
            log::debug!("malformed IRC message ({err}): {}", String::from_utf8_lossy(line));
            return Ok(());
        }
    };

    let message = match InboundMessage::try_from(message) {
        Ok(message) => message,
        Err(err) => {
            log::debug!("cannot decode IRC message: {err}");
            return Ok(());
        }
    };

    for reply in dispatcher.dispatch(&message) {
        reply.write_to(send_buffer)?;
    }
    Ok(())
}
