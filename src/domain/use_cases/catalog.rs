use crate::{
    entities::photographer::{Photographer, PhotographerCard, PhotographerId},
    errors::AppError,
    repositories::catalog::{CatalogCounts, CatalogRepository},
    utils::assets::AssetResolver,
};

pub struct CatalogHandler<R>
where
    R: CatalogRepository,
{
    pub catalog_repo: R,
    pub assets: AssetResolver,
}

impl<R> CatalogHandler<R>
where
    R: CatalogRepository,
{
    pub fn new(catalog_repo: R, assets: AssetResolver) -> Self {
        CatalogHandler { catalog_repo, assets }
    }

    /// Builds the cards shown on the home page
    pub async fn photographer_cards(&self) -> Result<Vec<PhotographerCard>, AppError> {
        let photographers = self.catalog_repo.list_photographers().await?;

        Ok(photographers.iter().map(|p| self.card(p)).collect())
    }

    /// Retrieves a photographer from a raw path segment
    pub async fn get_photographer(&self, raw_id: &str) -> Result<Photographer, AppError> {
        let id: PhotographerId = raw_id.parse()?;
        self.catalog_repo.get_photographer(id).await
    }

    pub async fn counts(&self) -> Result<CatalogCounts, AppError> {
        self.catalog_repo.counts().await
    }

    pub fn card(&self, photographer: &Photographer) -> PhotographerCard {
        PhotographerCard {
            id: photographer.id,
            name: photographer.name.clone(),
            location: photographer.location(),
            tagline: photographer.tagline.clone(),
            day_rate: photographer.day_rate(),
            portrait_url: self.assets.portrait_url(&photographer.portrait),
            profile_url: format!("/photographer/{}", photographer.id),
        }
    }
}
