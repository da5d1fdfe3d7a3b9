//! Media uploads (audio for letters and words, images for variants).

use std::path::Path;

use reqwest::multipart::{Form, Part};

use lingua_core::UploadedFile;

use crate::error::{ClientError, Result};
use crate::http::ApiClient;

const UPLOAD_PATH: &str = "/files/upload";

/// MIME type for the media the CMS accepts, by file extension.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "m4a" => "audio/mp4",
        "webm" => "audio/webm",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime)
}

#[derive(Clone)]
pub struct FileService {
    client: ApiClient,
}

impl FileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Read a local audio or image file and upload it.
    pub async fn upload_path(&self, path: &Path) -> Result<UploadedFile> {
        let mime = mime_for(path)
            .ok_or_else(|| ClientError::UnsupportedFile(path.display().to_string()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let bytes = tokio::fs::read(path).await?;

        self.upload_bytes(&name, bytes, mime).await
    }

    /// POST /files/upload with the bytes in the multipart field `file`.
    pub async fn upload_bytes(&self, name: &str, bytes: Vec<u8>, mime: &str) -> Result<UploadedFile> {
        let size = bytes.len();
        let part = Part::bytes(bytes)
            .file_name(name.to_string())
            .mime_str(mime)
            .map_err(|e| ClientError::UnsupportedFile(e.to_string()))?;
        let form = Form::new().part("file", part);

        let uploaded: UploadedFile = self.client.upload(UPLOAD_PATH, form).await?;
        tracing::info!(name, size, url = %uploaded.url, "file uploaded");
        Ok(uploaded)
    }

    /// Absolute URL for an uploaded file.
    pub fn resolve(&self, file: &UploadedFile) -> String {
        self.client.asset_url(&file.url)
    }
}
