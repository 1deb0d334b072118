//! Tests for static resource resolution

use std::fs;

use wicket::service::{ResourceError, ResourceResolver, StaticFiles};

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>index</h1>").unwrap();
    fs::write(dir.path().join("login.html"), "<form></form>").unwrap();
    fs::create_dir(dir.path().join("css")).unwrap();
    fs::write(dir.path().join("css/styles.css"), "body {}").unwrap();
    dir
}

#[test]
fn test_resolve_root_serves_greeting() {
    let dir = fixture();
    let files = StaticFiles::new(dir.path());

    assert_eq!(files.resolve("/").unwrap(), b"Hello world!".to_vec());
}

#[test]
fn test_resolve_file_with_extension() {
    let dir = fixture();
    let files = StaticFiles::new(dir.path());

    assert_eq!(files.resolve("/css/styles.css").unwrap(), b"body {}".to_vec());
}

#[test]
fn test_resolve_appends_html_without_extension() {
    let dir = fixture();
    let files = StaticFiles::new(dir.path());

    assert_eq!(files.resolve("/login").unwrap(), b"<form></form>".to_vec());
}

#[test]
fn test_resolve_missing_is_not_found() {
    let dir = fixture();
    let files = StaticFiles::new(dir.path());

    assert!(matches!(files.resolve("/missing.html"), Err(ResourceError::NotFound(_))));
}

#[test]
fn test_resolve_directory_is_not_found() {
    let dir = fixture();
    let files = StaticFiles::new(dir.path());

    assert!(matches!(files.resolve("/css"), Err(ResourceError::NotFound(_))));
}

#[test]
fn test_resolve_rejects_parent_segments() {
    let dir = fixture();
    let files = StaticFiles::new(dir.path().join("css"));

    assert!(matches!(files.resolve("/../index.html"), Err(ResourceError::NotFound(_))));
}

#[test]
fn test_mime_type_for_extension() {
    let files = StaticFiles::new("static");

    assert_eq!(files.mime_type_for("css"), "text/css");
    assert_eq!(files.mime_type_for("js"), "text/javascript");
    assert_eq!(files.mime_type_for(""), "text/html");
    assert_eq!(files.mime_type_for("unknown"), "text/html");
}
