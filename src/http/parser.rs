use crate::http::headers::HeaderMap;
use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    MalformedRequestLine,
}

/// Parses a raw request buffer into a structured [`Request`].
///
/// Single pass, no I/O: reading bytes off the socket is the connection's
/// job, which keeps this testable against arbitrary buffers. Every stored
/// token is an independently owned copy, so the input buffer can be dropped
/// or reused afterward.
///
/// The request line must carry three tokens (method, URL, version);
/// anything less is rejected as [`ParseError::MalformedRequestLine`].
/// Header lines are split on the first colon, with exactly one leading
/// space trimmed from the value. The first line without a colon (the blank
/// terminator included) ends header iteration without error.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    // The read cap may truncate mid-multibyte-sequence, so decode lossily.
    let text = String::from_utf8_lossy(buf);
    let mut lines = text.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::MalformedRequestLine)?;
    let (method, url, version) = parse_request_line(request_line)?;

    let mut headers = HeaderMap::new();
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            break;
        };
        if name.is_empty() {
            break;
        }
        let value = value.strip_prefix(' ').unwrap_or(value);
        headers.insert(name, value);
    }

    Ok(Request::new(method, url, version, headers))
}

fn parse_request_line(line: &str) -> Result<(String, String, String), ParseError> {
    // Runs of whitespace between tokens are tolerated.
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let url = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let version = parts.next().ok_or(ParseError::MalformedRequestLine)?;

    Ok((method.to_string(), url.to_string(), version.to_string()))
}
