//! Cat of the day from cataas.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use tracing::instrument;

use crate::error::ContentError;

pub const CATAAS_BASE: &str = "https://cataas.com";

/// A downloaded cat photo.
#[derive(Debug, Clone)]
pub struct CatImage {
    pub url: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl CatImage {
    /// File extension guessed from the content type; cataas mostly serves JPEG.
    pub fn extension(&self) -> &'static str {
        match self.content_type.as_deref() {
            Some(ct) if ct.contains("png") => "png",
            Some(ct) if ct.contains("gif") => "gif",
            Some(ct) if ct.contains("webp") => "webp",
            _ => "jpg",
        }
    }

    /// Write the photo as `cat.<ext>` inside `dir`, replacing yesterday's cat.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf, ContentError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("cat.{}", self.extension()));
        std::fs::write(&path, &self.bytes)?;
        tracing::debug!("Saved cat photo to {:?}", path);
        Ok(path)
    }
}

pub struct CatClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatClient {
    pub fn new(base_url: &str) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL for a fresh cat; the timestamp keeps caches from serving the same one twice.
    pub fn image_url(&self, width: u32, height: u32) -> String {
        format!(
            "{}/cat?width={}&height={}&t={}",
            self.base_url,
            width,
            height,
            Utc::now().timestamp_millis()
        )
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn fetch(&self, width: u32, height: u32) -> Result<CatImage, ContentError> {
        let url = self.image_url(width, height);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ContentError::Status(response.status().as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(ContentError::EmptyBody);
        }

        Ok(CatImage {
            url,
            content_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_has_cache_buster() {
        let client = CatClient::new("https://cataas.com/").unwrap();
        let url = client.image_url(800, 600);
        assert!(url.starts_with("https://cataas.com/cat?width=800&height=600&t="));
        let stamp = url.rsplit("t=").next().unwrap();
        assert!(stamp.parse::<i64>().is_ok());
    }

    #[test]
    fn test_extension_from_content_type() {
        let mut image = CatImage {
            url: String::new(),
            content_type: Some("image/png".into()),
            bytes: vec![1],
        };
        assert_eq!(image.extension(), "png");
        image.content_type = None;
        assert_eq!(image.extension(), "jpg");
    }

    #[test]
    fn test_save_in_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let image = CatImage {
            url: String::new(),
            content_type: Some("image/jpeg".into()),
            bytes: vec![0xFF, 0xD8, 0xFF],
        };
        let path = image.save_in(&dir.path().join("cache")).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), vec![0xFF, 0xD8, 0xFF]);
    }
}
