use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, ResponseError};

/// Renders a response as wire bytes.
///
/// Every status and header line ends in `" \r\n"`; the body follows the blank
/// line verbatim with no terminator.
pub fn serialize_response(resp: &Response, version: &str) -> Result<Vec<u8>, ResponseError> {
    let status = resp.status().ok_or(ResponseError::MissingStatus)?;
    let mut buf = Vec::new();

    // Status line
    let status_line = format!("{} {} {} \r\n", version, status.as_u16(), status.reason_phrase());
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in resp.headers().iter() {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b" \r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    if let Some(body) = resp.body() {
        buf.extend_from_slice(body);
    }

    Ok(buf)
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response, version: &str) -> Result<Self, ResponseError> {
        Ok(Self {
            buffer: serialize_response(response, version)?,
            written: 0,
        })
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
