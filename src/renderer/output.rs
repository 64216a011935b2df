//! Frame output buffering.
//!
//! A frame is encoded into one in-memory buffer and handed to the sink with a
//! single `write_all`, so the terminal never sees a half-written frame.

use std::io::{self, Write};

/// Accumulates the bytes of one frame.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write everything to `writer` and empty the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        self.data.clear();
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_buffer_write() {
        let mut buf = OutputBuffer::new();
        write!(buf, "hello {}", "world").unwrap();
        assert_eq!(buf.as_str().as_ref(), "hello world");
        assert_eq!(buf.len(), 11);
    }

    #[test]
    fn test_flush_to_drains() {
        let mut buf = OutputBuffer::new();
        buf.write_all(b"abc").unwrap();

        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"abc");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut buf = OutputBuffer::new();
        buf.write_all(b"test").unwrap();
        assert!(!buf.is_empty());
        buf.clear();
        assert!(buf.is_empty());
    }
}
