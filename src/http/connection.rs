use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::app::{App, Resolution};
use crate::config::ServerConfig;
use crate::http::parser::{find_headers_end, parse_request_head, ParseError, RequestHead};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Protocol version used when the request line never parsed.
const FALLBACK_VERSION: &str = "HTTP/1.1";

/// One accepted connection, serving exactly one request.
///
/// The stream is owned by the connection and dropped when [`run`](Self::run)
/// returns, whichever state it ends in.
pub struct Connection<S> {
    stream: S,
    app: Arc<App>,
    buffer: BytesMut,
    read_timeout: Duration,
    max_header_bytes: usize,
    max_body_bytes: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Routing(Request),
    BuildingResponse(Request, Resolution),
    Writing(ResponseWriter),
    Done,
    Failed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, app: Arc<App>, cfg: &ServerConfig) -> Self {
        Self {
            stream,
            app,
            buffer: BytesMut::with_capacity(4096),
            read_timeout: cfg.read_timeout(),
            max_header_bytes: cfg.max_header_bytes,
            max_body_bytes: cfg.max_body_bytes,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        if let Err(e) = &result
            && e.downcast_ref::<ParseError>().is_some()
        {
            // Best effort: the peer may already be gone.
            if let Ok(mut writer) = ResponseWriter::new(&Response::bad_request(), FALLBACK_VERSION) {
                let _ = writer.write_to_stream(&mut self.stream).await;
            }
        }

        let _ = self.stream.shutdown().await;
        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            // An error in any step leaves the machine in `Failed`.
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Failed) {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => ConnectionState::Routing(req),
                    None => ConnectionState::Done,
                },

                ConnectionState::Routing(req) => {
                    tracing::info!(
                        method = %req.method(),
                        path = %req.route(),
                        version = req.version(),
                        "Request received"
                    );
                    let resolution = self.app.route(&req);
                    ConnectionState::BuildingResponse(req, resolution)
                }

                ConnectionState::BuildingResponse(req, resolution) => {
                    let response = self.app.respond(resolution, &req).await;
                    tracing::debug!(
                        status = response.status().map(|s| s.as_u16()),
                        path = %req.route(),
                        "Response ready"
                    );
                    ConnectionState::Writing(ResponseWriter::new(&response, req.version())?)
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    ConnectionState::Done
                }

                ConnectionState::Done => {
                    self.state = ConnectionState::Done;
                    return Ok(());
                }

                ConnectionState::Failed => anyhow::bail!("connection already failed"),
            };
        }
    }

    /// Reads until one full request is buffered.
    ///
    /// The head is parsed once, as soon as its terminator arrives, so the
    /// header and body limits apply before the body is buffered. Returns
    /// `None` when the peer closes before sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let mut head: Option<RequestHead> = None;
        let mut scanned = 0;

        loop {
            if head.is_none() {
                match find_headers_end(&self.buffer[scanned..]) {
                    Some(offset) => {
                        let headers_end = scanned + offset;
                        if headers_end > self.max_header_bytes {
                            return Err(ParseError::HeadersTooLarge.into());
                        }
                        let parsed = parse_request_head(&self.buffer, headers_end, self.max_body_bytes)?;
                        self.buffer.reserve(parsed.total_len().saturating_sub(self.buffer.len()));
                        head = Some(parsed);
                    }
                    None => {
                        if self.buffer.len() > self.max_header_bytes {
                            return Err(ParseError::HeadersTooLarge.into());
                        }
                        // The terminator may straddle this read and the next.
                        scanned = self.buffer.len().saturating_sub(3);
                    }
                }
            }

            if let Some(parsed) = head.take_if(|h| self.buffer.len() >= h.total_len()) {
                let total = parsed.total_len();
                let request = parsed.into_request(&self.buffer)?;
                self.buffer.advance(total);
                return Ok(Some(request));
            }

            let n = timeout(self.read_timeout, self.stream.read_buf(&mut self.buffer))
                .await
                .context("timed out waiting for request data")??;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                anyhow::bail!("connection closed mid-request");
            }
        }
    }
}
