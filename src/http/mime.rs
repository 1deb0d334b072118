/// Content type served when the extension is empty or unknown.
pub const DEFAULT_MIME_TYPE: &str = "text/html";

/// Maps a file extension (without the dot) to its MIME type.
pub fn mime_for(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "txt" => "text/plain",
        "ico" => "image/x-icon",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => DEFAULT_MIME_TYPE,
    }
}
