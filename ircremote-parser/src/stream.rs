use bytes::{BufMut, Bytes, BytesMut};

pub const DEFAULT_MAX_LINE_LEN: usize = 8096;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("line exceeds {max_len} bytes without a CRLF")]
pub struct LineTooLong {
    pub max_len: usize,
}

/// Assembles CRLF-terminated lines from a byte stream, one byte at a time.
///
/// The accumulator (CR included) never holds more than `max_len` bytes. When a line
/// goes over, `LineTooLong` is reported once and every byte up to the next CRLF is
/// dropped, then assembling resumes.
#[derive(Debug)]
pub struct LineAssembler {
    buffer: BytesMut,
    max_len: usize,
    previous: Option<u8>,
    discarding: bool,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::with_max_len(DEFAULT_MAX_LINE_LEN)
    }
}

impl LineAssembler {
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(max_len),
            max_len,
            previous: None,
            discarding: false,
        }
    }

    pub fn feed(&mut self, byte: u8) -> Option<Result<Bytes, LineTooLong>> {
        let previous = self.previous.replace(byte);

        if previous == Some(b'\r') && byte == b'\n' {
            // the LF must not pair with the first byte of the next line
            self.previous = None;

            if std::mem::take(&mut self.discarding) {
                self.buffer.clear();
                return None;
            }

            // the buffer is handed out and its allocation gets reclaimed by the next
            // append once the line is dropped
            let mut line = self.buffer.split();
            line.truncate(line.len().saturating_sub(1));
            return Some(Ok(line.freeze()));
        }

        if self.discarding {
            return None;
        }

        if self.buffer.len() >= self.max_len {
            self.discarding = true;
            self.buffer.clear();
            return Some(Err(LineTooLong {
                max_len: self.max_len,
            }));
        }

        self.buffer.put_u8(byte);
        None
    }

    pub fn feed_from_slice<'a>(
        &'a mut self,
        buf: &'a [u8],
    ) -> impl Iterator<Item = Result<Bytes, LineTooLong>> + 'a {
        buf.iter().filter_map(move |&byte| self.feed(byte))
    }

    /// Number of bytes received since the last completed line.
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}
