//! Static web page assets.
//!
//! By default the page bundled into the binary is served for every non-API
//! path. When a web root directory is configured, files are read from it on
//! each request instead, falling back to its `index.html` for anything that
//! cannot be resolved.

use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

/// Page embedded at compile time.
pub const BUNDLED_INDEX_HTML: &str = include_str!("../../web/index.html");

/// Name of the fallback page inside a web root.
pub const INDEX_FILE: &str = "index.html";

/// Plain-text body returned when even the fallback page is missing.
pub const MISSING_INDEX_MESSAGE: &str = "Missing web/index.html";

/// A resolved static file.
#[derive(Debug, Clone)]
pub struct Asset {
    /// Value for the `Content-Type` header
    pub content_type: &'static str,

    /// File contents
    pub body: Bytes,
}

/// Where static pages come from.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    root: Option<PathBuf>,
}

impl StaticAssets {
    /// Serve only the bundled page.
    pub fn bundled() -> Self {
        Self { root: None }
    }

    /// Serve files from a directory on disk.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// The configured web root, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Resolve a request path to an asset.
    ///
    /// `/` maps to `index.html`. Paths that escape the root, directories and
    /// missing files fall back to `index.html`. Returns `None` only when that
    /// fallback is missing too.
    pub async fn load(&self, request_path: &str) -> Option<Asset> {
        let Some(root) = &self.root else {
            return Some(Asset {
                content_type: "text/html; charset=utf-8",
                body: Bytes::from_static(BUNDLED_INDEX_HTML.as_bytes()),
            });
        };

        if let Some(relative) = sanitize_path(request_path) {
            let target = root.join(&relative);
            if let Some(body) = read_file(&target).await {
                return Some(Asset {
                    content_type: content_type(&target),
                    body,
                });
            }
            debug!(path = %target.display(), "Falling back to index page");
        }

        let index = root.join(INDEX_FILE);
        let body = read_file(&index).await?;
        Some(Asset {
            content_type: content_type(&index),
            body,
        })
    }
}

/// Read a regular file, returning `None` for directories and missing files.
async fn read_file(path: &Path) -> Option<Bytes> {
    let metadata = tokio::fs::metadata(path).await.ok()?;
    if !metadata.is_file() {
        return None;
    }
    tokio::fs::read(path).await.ok().map(Bytes::from)
}

/// Turn a URL path into a path relative to the web root.
///
/// Percent-escapes are decoded first. Returns `None` for paths that would
/// leave the root (`..`, absolute components, drive prefixes).
fn sanitize_path(request_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(request_path).ok()?;
    let trimmed = decoded.trim_start_matches('/');

    if trimmed.is_empty() {
        return Some(PathBuf::from(INDEX_FILE));
    }

    let mut relative = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if relative.as_os_str().is_empty() {
        return Some(PathBuf::from(INDEX_FILE));
    }

    Some(relative)
}

/// Content type by file extension.
fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
