use bytes::Bytes;
use hearth::http::response::{Response, StatusCode};
use hearth::http::writer::ResponseWriter;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::PayloadTooLarge.as_u16(), 413);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(
        StatusCode::PayloadTooLarge.reason_phrase(),
        "Payload Too Large"
    );
}

#[test]
fn test_response_ok_helper() {
    let response = Response::ok(Bytes::from_static(b"test content"));

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, Bytes::from_static(b"test content"));
}

#[test]
fn test_response_empty_helper() {
    let response = Response::empty(StatusCode::PayloadTooLarge);

    assert_eq!(response.status, StatusCode::PayloadTooLarge);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_success_response_serialization_is_byte_exact() {
    let response = Response::ok(Bytes::from_static(b"hello"));
    let mut writer = ResponseWriter::new(&response);

    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello".to_vec()
    );
}

#[tokio::test]
async fn test_error_response_serialization_is_byte_exact() {
    let response = Response::empty(StatusCode::BadRequest);
    let mut writer = ResponseWriter::new(&response);

    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec()
    );
}

#[tokio::test]
async fn test_content_length_matches_body_length() {
    let body = Bytes::from(vec![b'x'; 137]);
    let response = Response::ok(body);
    let mut writer = ResponseWriter::new(&response);

    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("Content-Length: 137\r\n"));

    let body_start = out.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
    assert_eq!(out.len() - body_start, 137);
}
