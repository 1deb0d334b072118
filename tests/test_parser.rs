use wicket::http::parser::{ParseError, parse_http_request};
use wicket::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method(), Method::GET);
    assert_eq!(parsed.route(), "/");
    assert_eq!(parsed.version(), "HTTP/1.1");
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert!(parsed.body().is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_login_form_body() {
    let req = b"POST /login HTTP/1.1\r\nHost: localhost\r\nContent-Length: 30\r\n\r\naccount=gugu&password=password";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method(), Method::POST);
    assert_eq!(parsed.route(), "/login");
    assert_eq!(parsed.body_value("account"), Some("gugu"));
    assert_eq!(parsed.body_value("password"), Some("password"));
    assert_eq!(parsed.body().len(), 2);
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_body_round_trips_pairs() {
    let pairs = [("account", "redddy"), ("password", "pw"), ("email", "r@example.com")];
    let body = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    let req = format!(
        "POST /register HTTP/1.1\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );

    let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();

    assert_eq!(parsed.body().len(), pairs.len());
    for (k, v) in pairs {
        assert_eq!(parsed.body_value(k), Some(v));
    }
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent"), Some("test-client"));
    assert_eq!(parsed.header("Accept"), Some("*/*"));
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /login?account=redddy&password=password HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.route(), "/login");
    assert_eq!(parsed.path().query_param("account"), Some("redddy"));
    assert_eq!(parsed.path().query_param("password"), Some("password"));
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /login HTTP/1.1\r\nContent-Length: 10\r\n\r\na=b";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_request_line_too_short() {
    let req = b"GET /\r\nHost: example.com\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_invalid_http_method() {
    let req = b"INVALID / HTTP/1.1\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidMethod)));
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::MalformedHeaderLine)));
}

#[test]
fn test_parse_non_numeric_content_length() {
    let req = b"POST /login HTTP/1.1\r\nContent-Length: ten\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidContentLength)));
}

#[test]
fn test_parse_negative_content_length() {
    let req = b"POST /login HTTP/1.1\r\nContent-Length: -1\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidContentLength)));
}

#[test]
fn test_parse_body_pair_without_equals() {
    let req = b"POST /login HTTP/1.1\r\nContent-Length: 12\r\n\r\naccountgugu!";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::MalformedBodyPair)));
}

#[test]
fn test_parse_query_pair_without_equals() {
    let req = b"GET /login?account HTTP/1.1\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::MalformedQueryPair)));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method(), expected_method);
    }
}

#[test]
fn test_parse_request_with_empty_body() {
    let req = b"POST /login HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert!(parsed.body().is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_header_case_preservation() {
    let req = b"GET / HTTP/1.1\r\nContent-Type: text/html\r\ncontent-type: text/plain\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Content-Type"), Some("text/html"));
    assert_eq!(parsed.header("content-type"), Some("text/plain"));
    assert_eq!(parsed.headers().len(), 2);
}

#[test]
fn test_parse_leaves_pipelined_bytes_unconsumed() {
    let first = b"GET /a HTTP/1.1\r\n\r\n";
    let mut buf = first.to_vec();
    buf.extend_from_slice(b"GET /b HTTP/1.1\r\n\r\n");

    let (parsed, consumed) = parse_http_request(&buf).unwrap();

    assert_eq!(parsed.route(), "/a");
    assert_eq!(consumed, first.len());
}
