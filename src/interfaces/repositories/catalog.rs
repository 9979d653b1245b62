use std::{collections::HashSet, path::Path, sync::Arc};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;

use crate::{
    entities::{
        media::{MediaId, MediaItem},
        photographer::{Photographer, PhotographerId},
    },
    errors::{AppError, CatalogError},
};

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_photographers(&self) -> Result<Vec<Photographer>, AppError>;
    async fn get_photographer(&self, id: PhotographerId) -> Result<Photographer, AppError>;
    async fn media_for(&self, id: PhotographerId) -> Result<Vec<MediaItem>, AppError>;
    async fn get_media(&self, id: MediaId) -> Result<MediaItem, AppError>;
    async fn counts(&self) -> Result<CatalogCounts, AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CatalogCounts {
    pub photographers: usize,
    pub media: usize,
}

/// The whole of `photographers.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioDocument {
    pub photographers: Vec<Photographer>,
    pub media: Vec<MediaItem>,
}

impl PortfolioDocument {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: PortfolioDocument = serde_json::from_str(raw).map_err(CatalogError::Malformed)?;
        document.check_references()?;
        Ok(document)
    }

    fn check_references(&self) -> Result<(), CatalogError> {
        let mut photographers = HashSet::new();
        for photographer in &self.photographers {
            if !photographers.insert(photographer.id) {
                return Err(CatalogError::DuplicatePhotographer(photographer.id.0));
            }
        }

        let mut media = HashSet::new();
        for item in &self.media {
            if !media.insert(item.id) {
                return Err(CatalogError::DuplicateMedia(item.id.0));
            }
            if !photographers.contains(&item.photographer_id) {
                return Err(CatalogError::UnknownPhotographer {
                    media_id: item.id.0,
                    photographer_id: item.photographer_id.0,
                });
            }
        }

        Ok(())
    }
}

/// Catalog held in memory after a single read of the JSON document.
#[derive(Debug, Clone)]
pub struct JsonCatalogRepo {
    document: Arc<PortfolioDocument>,
}

impl JsonCatalogRepo {
    pub fn new(document: PortfolioDocument) -> Self {
        JsonCatalogRepo { document: Arc::new(document) }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Read(path.display().to_string(), e))?;

        let document = PortfolioDocument::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            photographers = document.photographers.len(),
            media = document.media.len(),
            "Catalog loaded"
        );

        Ok(JsonCatalogRepo::new(document))
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepo {
    async fn list_photographers(&self) -> Result<Vec<Photographer>, AppError> {
        Ok(self.document.photographers.clone())
    }

    async fn get_photographer(&self, id: PhotographerId) -> Result<Photographer, AppError> {
        self.document
            .photographers
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Photographer {} not found", id)))
    }

    async fn media_for(&self, id: PhotographerId) -> Result<Vec<MediaItem>, AppError> {
        Ok(self
            .document
            .media
            .iter()
            .filter(|m| m.photographer_id == id)
            .cloned()
            .collect())
    }

    async fn get_media(&self, id: MediaId) -> Result<MediaItem, AppError> {
        self.document
            .media
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Media {} not found", id)))
    }

    async fn counts(&self) -> Result<CatalogCounts, AppError> {
        Ok(CatalogCounts {
            photographers: self.document.photographers.len(),
            media: self.document.media.len(),
        })
    }
}
