use crate::error::SendBufferError;
use crate::message_writer::MessageWriter;
use crate::send_buffer::SendBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<'a> {
    Nick {
        nickname: &'a str,
    },
    User {
        nickname: &'a str,
        client_name: &'a str,
    },
    Join {
        channel: &'a str,
    },
    /// an absent PING token gives an empty one
    Pong {
        token: &'a [u8],
    },
    PrivMsg {
        target: &'a str,
        content: &'a str,
    },
}

impl Message<'_> {
    pub fn write_to(&self, send_buffer: &mut SendBuffer) -> Result<(), SendBufferError> {
        let mut stream = MessageWriter::new(send_buffer);
        match self {
            Message::Nick { nickname } => message!(stream, b"NICK ", nickname),
            Message::User {
                nickname,
                client_name,
            } => message!(stream, b"USER ", nickname, b" 8 * ", client_name),
            Message::Join { channel } => message!(stream, b"JOIN ", channel),
            Message::Pong { token } => message!(stream, b"PONG :", token),
            Message::PrivMsg { target, content } => {
                message!(stream, b"PRIVMSG ", target, b" :", content)
            }
        }
    }
}
