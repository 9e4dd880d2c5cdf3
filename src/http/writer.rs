use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const WIRE_VERSION: &str = "HTTP/1.1";

/// Chunk size for streaming file bodies.
const CHUNK_SIZE: usize = 8192;

/// Serializes the status line and header block, including the blank line
/// separating headers from the body.
pub fn serialize_header_block(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        WIRE_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Sends a response over a connection: header block first, then the file
/// body streamed chunk by chunk. Generic over the sink so it can be tested
/// against in-memory buffers.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_header_block(response),
            written: 0,
        }
    }

    pub async fn send_headers<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing headers"));
            }

            self.written += n;
        }

        Ok(())
    }

    /// Streams the file verbatim until EOF. Returns the number of body
    /// bytes sent.
    pub async fn send_file<W, R>(&mut self, stream: &mut W, file: &mut R) -> anyhow::Result<u64>
    where
        W: AsyncWrite + Unpin,
        R: AsyncRead + Unpin,
    {
        let mut chunk = vec![0u8; CHUNK_SIZE];
        let mut sent: u64 = 0;

        loop {
            let n = file.read(&mut chunk).await?;
            if n == 0 {
                break;
            }

            stream.write_all(&chunk[..n]).await?;
            sent += n as u64;
        }

        stream.flush().await?;
        Ok(sent)
    }
}
