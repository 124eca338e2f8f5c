use crate::error::SendBufferError;

pub const DEFAULT_SEND_BUFFER_CAPACITY: usize = 8096;

/// Fixed-capacity ring of bytes waiting to be written to the socket.
///
/// `tail` is where the next send starts, `head` is where the next enqueue writes.
/// Both stay in `[0, capacity)`. `len` counts the pending bytes, so `head == tail`
/// means empty when `len == 0` and full when `len == capacity`.
#[derive(Debug)]
pub struct SendBuffer {
    buffer: Box<[u8]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl Default for SendBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SEND_BUFFER_CAPACITY)
    }
}

impl SendBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "a send buffer needs room for at least one byte");
        Self {
            buffer: vec![0_u8; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn available(&self) -> usize {
        self.capacity() - self.len
    }

    /// Appends all of `data` or nothing.
    pub fn enqueue(&mut self, data: &[u8]) -> Result<(), SendBufferError> {
        if data.len() > self.available() {
            return Err(SendBufferError::Overflow {
                requested: data.len(),
                available: self.available(),
            });
        }

        let capacity = self.capacity();
        let before_end = data.len().min(capacity - self.head);
        let (first, wrapped) = data.split_at(before_end);

        self.buffer[self.head..self.head + first.len()].copy_from_slice(first);
        self.buffer[..wrapped.len()].copy_from_slice(wrapped);

        self.head = (self.head + data.len()) % capacity;
        self.len += data.len();
        Ok(())
    }

    /// Pending bytes from the read cursor up to the write cursor or the end of the
    /// region, whichever comes first.
    pub fn next_send_chunk(&self) -> &[u8] {
        let end = (self.tail + self.len).min(self.capacity());
        &self.buffer[self.tail..end]
    }

    /// Marks `sent` bytes of the current chunk as written.
    pub fn advance(&mut self, sent: usize) {
        let chunk_len = self.next_send_chunk().len();
        debug_assert!(sent <= chunk_len, "advanced past the current chunk");
        let sent = sent.min(chunk_len);

        self.tail += sent;
        if self.tail == self.capacity() {
            self.tail = 0;
        }
        self.len -= sent;
    }

    #[cfg(test)]
    pub(crate) fn drain(&mut self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len);
        while !self.is_empty() {
            let chunk = self.next_send_chunk();
            out.extend_from_slice(chunk);
            let n = chunk.len();
            self.advance(n);
        }
        out
    }
}
