use tokio::io::{AsyncRead, AsyncReadExt};

/// Ceiling on the request line plus headers, terminator included.
pub const MAX_HEADER_SIZE: usize = 4096;

const TERMINATOR: &[u8; 4] = b"\r\n\r\n";

#[derive(Debug)]
pub enum FrameError {
    /// Capacity exhausted before the header terminator completed.
    HeaderTooLarge,
    /// The stream errored or closed before the headers completed.
    ReadFailed(std::io::Error),
}

/// Reads exactly the header portion of one HTTP request from a byte stream.
///
/// Bytes after the terminator (a request body, if any) are never consumed:
/// reads go one byte at a time and stop the instant the terminator
/// completes, so they stay on the stream for the caller to ignore.
pub struct FrameReader<R> {
    stream: R,
    buf: Vec<u8>,
    limit: usize,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    pub fn new(stream: R, limit: usize) -> Self {
        Self {
            stream,
            buf: Vec::with_capacity(limit),
            limit,
        }
    }

    /// Reads until the `\r\n\r\n` terminator and returns the header block
    /// with the terminator stripped.
    ///
    /// The terminator must complete within `limit` bytes; a block that
    /// would only terminate on byte `limit + 1` is already too large.
    /// Detection runs after every appended byte, so a terminator split
    /// across reads is still found.
    pub async fn read_header_block(&mut self) -> Result<Vec<u8>, FrameError> {
        loop {
            if self.buf.len() == self.limit {
                return Err(FrameError::HeaderTooLarge);
            }

            let byte = self
                .stream
                .read_u8()
                .await
                .map_err(FrameError::ReadFailed)?;
            self.buf.push(byte);

            if self.buf.len() >= 4 && &self.buf[self.buf.len() - 4..] == TERMINATOR {
                self.buf.truncate(self.buf.len() - 4);
                return Ok(std::mem::take(&mut self.buf));
            }
        }
    }
}
