//! Byte stream returned by bucket reads.

use std::io::{self, BufRead, Cursor, Read};

use bytes::Bytes;

/// A readable view over an object's payload.
///
/// The reader owns a reference-counted snapshot of the bytes, so later
/// uploads or deletes of the same key do not affect it.
#[derive(Debug, Clone)]
pub struct ObjectReader {
    inner: Cursor<Bytes>,
}

impl ObjectReader {
    /// Wrap a payload snapshot.
    pub fn new(data: Bytes) -> Self {
        Self {
            inner: Cursor::new(data),
        }
    }

    /// Total length of the payload, independent of how much has been read.
    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the reader and return the whole payload.
    pub fn into_bytes(self) -> Bytes {
        self.inner.into_inner()
    }
}

impl From<Bytes> for ObjectReader {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl Read for ObjectReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for ObjectReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}
