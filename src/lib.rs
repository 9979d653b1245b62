mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{utils, web};

use crate::repositories::catalog::JsonCatalogRepo;
use crate::use_cases::{
    catalog::CatalogHandler,
    contact::ContactHandler,
    gallery::GalleryHandler,
    lightbox::LightboxSessions,
};
use crate::utils::assets::{AssetResolver, AssetStore};

pub struct AppState {
    pub catalog_handler: CatalogHandler<JsonCatalogRepo>,
    pub gallery_handler: GalleryHandler<JsonCatalogRepo>,
    pub contact_handler: ContactHandler<JsonCatalogRepo>,
    pub lightbox_sessions: LightboxSessions,
    pub assets: AssetResolver,
    pub asset_store: AssetStore,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, catalog_repo: JsonCatalogRepo) -> Self {
        let assets = AssetResolver::default();

        AppState {
            catalog_handler: CatalogHandler::new(catalog_repo.clone(), assets.clone()),
            gallery_handler: GalleryHandler::new(catalog_repo.clone()),
            contact_handler: ContactHandler::new(catalog_repo),
            lightbox_sessions: LightboxSessions::new(assets.clone()),
            assets,
            asset_store: AssetStore::new(&config.asset_root),
        }
    }
}
