use wicket::http::cookie::CookieJar;
use wicket::http::parser::ParseError;

#[test]
fn test_cookie_absent_or_blank_header() {
    assert!(CookieJar::parse(None).unwrap().is_empty());
    assert!(CookieJar::parse(Some("")).unwrap().is_empty());
    assert!(CookieJar::parse(Some("   ")).unwrap().is_empty());
}

#[test]
fn test_cookie_pairs_ignore_surrounding_whitespace() {
    for raw in ["k1=v1; k2=v2", "k1=v1;k2=v2", "  k1 = v1 ;   k2=v2  "] {
        let jar = CookieJar::parse(Some(raw)).unwrap();

        assert_eq!(jar.len(), 2, "{raw}");
        assert_eq!(jar.get("k1"), Some("v1"));
        assert_eq!(jar.get("k2"), Some("v2"));
    }
}

#[test]
fn test_cookie_contains_key() {
    let jar = CookieJar::parse(Some("JSESSIONID=656cef62-e3c4-40bc-a8df-94732920ed46")).unwrap();

    assert!(jar.contains_key("JSESSIONID"));
    assert!(!jar.contains_key("jsessionid"));
    assert_eq!(jar.get("JSESSIONID"), Some("656cef62-e3c4-40bc-a8df-94732920ed46"));
}

#[test]
fn test_cookie_trailing_semicolon_is_tolerated() {
    let jar = CookieJar::parse(Some("a=1;")).unwrap();

    assert_eq!(jar.get("a"), Some("1"));
}

#[test]
fn test_cookie_pair_without_equals_is_rejected() {
    assert_eq!(CookieJar::parse(Some("a=1; flag")), Err(ParseError::MalformedCookiePair));
}

#[test]
fn test_cookie_pair_with_two_equals_is_rejected() {
    assert_eq!(CookieJar::parse(Some("a=1=2")), Err(ParseError::MalformedCookiePair));
}

#[test]
fn test_cookie_empty_name_is_rejected() {
    assert_eq!(CookieJar::parse(Some("=1")), Err(ParseError::MalformedCookiePair));
}
