use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, warn};

use crate::http::frame::{FrameError, FrameReader, MAX_HEADER_SIZE};
use crate::http::parser::parse_request_head;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Handles one request/response cycle on a byte stream.
///
/// The connection owns the stream exclusively for the cycle; the caller
/// drops it afterwards, closing the socket regardless of outcome.
pub struct Connection<S> {
    stream: S,
    body: Bytes,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Responding(Response),
    Closed,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, body: Bytes) -> Self {
        Self {
            stream,
            body,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let response = self.read_request().await;
                    self.state = ConnectionState::Responding(response);
                }

                ConnectionState::Responding(response) => {
                    let mut writer = ResponseWriter::new(response);
                    writer.write_to_stream(&mut self.stream).await?;

                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Frames and parses the request headers, mapping every failure to
    /// the error response the wire contract defines for it.
    async fn read_request(&mut self) -> Response {
        let mut reader = FrameReader::new(&mut self.stream, MAX_HEADER_SIZE);

        let block = match reader.read_header_block().await {
            Ok(block) => block,
            Err(FrameError::HeaderTooLarge) => {
                warn!("Request headers exceed {} bytes", MAX_HEADER_SIZE);
                return Response::empty(StatusCode::PayloadTooLarge);
            }
            Err(FrameError::ReadFailed(e)) => {
                warn!("Read failed before headers completed: {}", e);
                return Response::empty(StatusCode::BadRequest);
            }
        };

        match parse_request_head(&block) {
            Ok(head) => {
                debug!(
                    "Request line: {:?}, {} header(s)",
                    head.request_line,
                    head.headers.len()
                );
                Response::ok(self.body.clone())
            }
            Err(e) => {
                warn!("Malformed request head: {:?}", e);
                Response::empty(StatusCode::BadRequest)
            }
        }
    }
}
