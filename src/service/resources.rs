use std::io;
use std::path::{Path, PathBuf};

use crate::http::mime::mime_for;

/// Body served for the bare root path.
const ROOT_BODY: &[u8] = b"Hello world!";

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("no resource at {0}")]
    NotFound(String),
    #[error("failed to read resource: {0}")]
    Io(#[from] io::Error),
}

/// Static content lookup by route path.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, route: &str) -> Result<Vec<u8>, ResourceError>;

    fn mime_type_for(&self, extension: &str) -> &'static str {
        mime_for(extension)
    }
}

/// Files under a root directory.
///
/// Routes without an extension map to `<route>.html`, so `/login` serves
/// `login.html`. Routes containing a `..` segment are never resolved.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, route: &str) -> Option<PathBuf> {
        let relative = route.trim_start_matches('/');
        if relative.split('/').any(|segment| segment == "..") {
            return None;
        }

        let mut path = self.root.join(relative);
        if path.extension().is_none() {
            path.set_extension("html");
        }
        Some(path)
    }
}

impl ResourceResolver for StaticFiles {
    fn resolve(&self, route: &str) -> Result<Vec<u8>, ResourceError> {
        if route.is_empty() || route == "/" {
            return Ok(ROOT_BODY.to_vec());
        }

        let path = self
            .file_path(route)
            .filter(|p| p.is_file())
            .ok_or_else(|| ResourceError::NotFound(route.to_string()))?;

        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ResourceError::NotFound(route.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
