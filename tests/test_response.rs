use elserve::http::response::{Response, StatusCode};
use elserve::http::writer::{ResponseWriter, serialize_header_block};
use std::io::Cursor;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_set_header_last_write_wins() {
    let mut resp = Response::new(StatusCode::Ok);
    resp.set_header("content-type", "text/plain");
    resp.set_header("content-type", "text/html");

    assert_eq!(resp.header("content-type"), Some("text/html"));
    assert_eq!(resp.headers.len(), 1);
}

#[test]
fn test_response_set_status() {
    let mut resp = Response::new(StatusCode::Ok);
    resp.set_status(StatusCode::NotFound);

    assert_eq!(resp.status, StatusCode::NotFound);
}

#[test]
fn test_serialize_header_block_layout() {
    let mut resp = Response::new(StatusCode::Ok);
    resp.set_header("content-type", "text/html");
    resp.set_header("server", "ElServe/2.0");

    let block = serialize_header_block(&resp);
    let text = String::from_utf8(block).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("content-type: text/html\r\n"));
    assert!(text.contains("server: ElServe/2.0\r\n"));
    assert!(text.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_send_headers_writes_full_block() {
    let mut resp = Response::new(StatusCode::Ok);
    resp.set_header("server", "ElServe/2.0");

    let mut writer = ResponseWriter::new(&resp);
    let mut sink = Cursor::new(Vec::new());
    writer.send_headers(&mut sink).await.unwrap();

    assert_eq!(sink.into_inner(), serialize_header_block(&resp));
}

#[tokio::test]
async fn test_send_file_streams_body_verbatim() {
    let resp = Response::new(StatusCode::Ok);
    let body = b"file body bytes".to_vec();

    let mut writer = ResponseWriter::new(&resp);
    let mut source = Cursor::new(body.clone());
    let mut sink = Cursor::new(Vec::new());
    let sent = writer.send_file(&mut sink, &mut source).await.unwrap();

    assert_eq!(sent, body.len() as u64);
    assert_eq!(sink.into_inner(), body);
}

#[tokio::test]
async fn test_send_file_body_larger_than_one_chunk() {
    let resp = Response::new(StatusCode::Ok);
    // Larger than the 8192-byte streaming chunk.
    let body: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();

    let mut writer = ResponseWriter::new(&resp);
    let mut source = Cursor::new(body.clone());
    let mut sink = Cursor::new(Vec::new());
    let sent = writer.send_file(&mut sink, &mut source).await.unwrap();

    assert_eq!(sent, body.len() as u64);
    assert_eq!(sink.into_inner(), body);
}

#[tokio::test]
async fn test_send_file_empty_body() {
    let resp = Response::new(StatusCode::Ok);

    let mut writer = ResponseWriter::new(&resp);
    let mut source = Cursor::new(Vec::new());
    let mut sink = Cursor::new(Vec::new());
    let sent = writer.send_file(&mut sink, &mut source).await.unwrap();

    assert_eq!(sent, 0);
    assert!(sink.into_inner().is_empty());
}
