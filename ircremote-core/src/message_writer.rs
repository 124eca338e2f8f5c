use std::io::Write;

use crate::error::SendBufferError;
use crate::send_buffer::SendBuffer;

const IRC_MESSAGE_MAX_SIZE: usize = 512;

/// A single client_to_server::Message might generate multiple IRC lines.
/// This struct serializes each line on its own before queueing it, so that a line is
/// either queued entirely or not at all, and never goes beyond 512 bytes.
pub(crate) struct MessageWriter<'b> {
    send_buffer: &'b mut SendBuffer,
}

impl<'b> MessageWriter<'b> {
    pub(crate) fn new(send_buffer: &'b mut SendBuffer) -> Self {
        Self { send_buffer }
    }

    /// Implementation note: the &mut self borrow ensures that there is only one
    /// OnGoingMessage at a time, so lines cannot be queued in the wrong order.
    pub(crate) fn new_message<'w>(&'w mut self) -> OnGoingMessage<'w> {
        OnGoingMessage {
            buf: std::io::Cursor::new([0_u8; IRC_MESSAGE_MAX_SIZE]),
            send_buffer: &mut *self.send_buffer,
        }
    }
}

/// Owner MUST call validate() after writing in order to queue the line.
#[must_use]
pub(crate) struct OnGoingMessage<'w> {
    buf: std::io::Cursor<[u8; IRC_MESSAGE_MAX_SIZE]>,
    send_buffer: &'w mut SendBuffer,
}

impl OnGoingMessage<'_> {
    #[inline]
    pub(crate) fn write<T>(mut self, bytes: &T) -> Self
    where
        T: AsRef<[u8]> + ?Sized,
    {
        // might fail if the message goes beyond IRC_MESSAGE_MAX_SIZE bytes
        // but this is OK, the write fails and validate() will overwrite
        // the last bytes by the end-of-line markers
        let _ = self.buf.write_all(bytes.as_ref());
        self
    }

    pub(crate) fn validate(mut self) -> Result<(), SendBufferError> {
        // cut at 510 bytes and add new lines
        let pos = self.buf.position().min((IRC_MESSAGE_MAX_SIZE - 2) as u64);
        self.buf.set_position(pos);
        let _ = self.buf.write_all(b"\r\n");

        let len = self.buf.position() as usize;
        let line = self.buf.get_ref();
        self.send_buffer.enqueue(&line[..len])
    }
}

macro_rules! message {
    ($s:expr, $($args:expr),*) => {{
        let mut m = $s.new_message();
        $(
            m = m.write($args);
        )*
        m.validate()
    }}
}
