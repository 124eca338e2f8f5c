#[macro_use]
mod message_writer;
mod bot_command;
mod client_to_server;
mod dispatcher;
mod error;
mod locator;
mod send_buffer;
mod server_to_client;
mod target;

pub use bot_command::{Arity, BotCommand, Invocation};
pub use client_to_server::Message as OutboundMessage;
pub use dispatcher::{Dispatcher, Replies};
pub use error::{ActionError, SendBufferError};
pub use locator::parse_locator;
pub use send_buffer::{SendBuffer, DEFAULT_SEND_BUFFER_CAPACITY};
pub use server_to_client::{Message as InboundMessage, MessageDecodingError};
pub use target::{MediaItem, PlaybackStatus, PlaybackTarget, TargetError};
