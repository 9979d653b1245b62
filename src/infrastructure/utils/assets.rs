use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use tokio::fs;

use crate::errors::AppError;

/// URL prefix under which the asset directory is served.
pub const ASSET_URL_PREFIX: &str = "/assets";

const MEDIA_DIR: &str = "images";
const PORTRAIT_DIR: &str = "photographers";

/// Turns bare filenames from `photographers.json` into public URLs.
///
/// Resolution is a pure string computation; nothing is read from disk.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    prefix: Arc<str>,
}

impl Default for AssetResolver {
    fn default() -> Self {
        AssetResolver::new(ASSET_URL_PREFIX)
    }
}

impl AssetResolver {
    pub fn new(prefix: &str) -> Self {
        AssetResolver {
            prefix: prefix.trim_end_matches('/').into(),
        }
    }

    pub fn media_url(&self, file_name: &str) -> String {
        format!("{}/{}/{}", self.prefix, MEDIA_DIR, urlencoding::encode(file_name))
    }

    pub fn portrait_url(&self, file_name: &str) -> String {
        format!("{}/{}/{}", self.prefix, PORTRAIT_DIR, urlencoding::encode(file_name))
    }
}

/// Read-only view over the asset directory on disk.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AssetStore { root: root.into() }
    }

    /// Maps a request tail such as `images/Beach.jpg` onto a path below the
    /// root. Anything that could escape the root is refused.
    pub fn resolve(&self, tail: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(tail);
        let mut resolved = self.root.clone();

        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return Err(AppError::BadRequest(format!("Invalid asset path: {}", tail))),
            }
        }

        if resolved == self.root {
            return Err(AppError::NotFound(format!("Asset {}", tail)));
        }

        Ok(resolved)
    }

    /// Reads an asset and guesses its content type.
    pub async fn read(&self, tail: &str) -> Result<(Vec<u8>, String), AppError> {
        let path = self.resolve(tail)?;

        let metadata = fs::metadata(&path)
            .await
            .map_err(|_| AppError::NotFound(format!("Asset {}", tail)))?;
        if !metadata.is_file() {
            return Err(AppError::NotFound(format!("Asset {}", tail)));
        }

        let bytes = fs::read(&path).await?;
        let content_type = content_type_for(&path, &bytes);

        Ok((bytes, content_type))
    }
}

/// Sniffs the magic bytes first, then falls back on the extension.
pub fn content_type_for(path: &Path, bytes: &[u8]) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match ext.as_deref() {
        Some("svg") => "image/svg+xml",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("html") => "text/html; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
    .to_string()
}
