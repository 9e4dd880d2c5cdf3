use std::sync::Arc;

use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::Config;
use crate::http::mime;
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Maximum number of bytes read off a connection; longer requests are
/// truncated, not rejected.
const REQ_BUF_SIZE: usize = 8192;

const SERVER_NAME: &str = "ElServe/2.0";

/// Handles one accepted connection from first read to teardown.
///
/// Owns the socket for its whole lifetime; the stream, the opened file and
/// the response writer are each dropped on every exit path, so the
/// connection is closed exactly once no matter where handling stops.
/// Malformed requests and unopenable files end handling silently: the
/// client sees a connection close, not an error response.
pub struct Connection {
    stream: TcpStream,
    cfg: Arc<Config>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Accepted,
    Parsed(Request),
    Resolved(Request, File),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, cfg: Arc<Config>) -> Self {
        Self {
            stream,
            cfg,
            state: ConnectionState::Accepted,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Accepted => {
                    match self.read_request().await {
                        Ok(req) => {
                            tracing::info!(
                                method = %req.method,
                                url = %req.url,
                                version = %req.version,
                                "Request"
                            );
                            self.state = ConnectionState::Parsed(req);
                        }
                        Err(e) => {
                            // No response is sent for unreadable or
                            // malformed requests, just a close.
                            tracing::debug!("Dropping connection: {e:#}");
                        }
                    }
                }

                ConnectionState::Parsed(mut req) => {
                    if req.url == "/" {
                        req.url = self.cfg.site.default_page.clone();
                    }

                    // Verbatim concatenation against the document root.
                    let file_path = format!("{}{}", self.cfg.site.root, req.url);

                    match File::open(&file_path).await {
                        Ok(file) => {
                            self.state = ConnectionState::Resolved(req, file);
                        }
                        Err(e) => {
                            tracing::info!(url = %req.url, path = %file_path, "File not found: {e}");
                        }
                    }
                }

                ConnectionState::Resolved(req, mut file) => {
                    self.send_response(&req, &mut file).await?;
                    self.drain_request().await;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the first bytes off the socket in one bounded read and parses
    /// them. Reading and parsing are separate steps so the parser stays
    /// testable against arbitrary buffers.
    pub async fn read_request(&mut self) -> anyhow::Result<Request> {
        let mut buf = BytesMut::with_capacity(REQ_BUF_SIZE);

        let n = self.stream.read_buf(&mut buf).await?;
        if n == 0 {
            anyhow::bail!("connection closed before any request bytes");
        }

        parse_request(&buf).map_err(|e| anyhow::anyhow!("HTTP parse error: {e:?}"))
    }

    /// A truncated request leaves unread bytes in the socket, and closing
    /// with those pending resets the connection and discards the buffered
    /// response. Signal end-of-response first, then read out the rest.
    async fn drain_request(&mut self) {
        if self.stream.shutdown().await.is_err() {
            return;
        }

        let mut scratch = [0u8; 1024];
        loop {
            match self.stream.read(&mut scratch).await {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
        }
    }

    async fn send_response(&mut self, req: &Request, file: &mut File) -> anyhow::Result<()> {
        let mut response = Response::new(StatusCode::Ok);
        response.set_header("content-type", mime::mimetype(&req.url));
        response.set_header("server", SERVER_NAME);

        let mut writer = ResponseWriter::new(&response);
        writer.send_headers(&mut self.stream).await?;
        let sent = writer.send_file(&mut self.stream, file).await?;

        tracing::debug!(url = %req.url, bytes = sent, "Response sent");
        Ok(())
    }
}
