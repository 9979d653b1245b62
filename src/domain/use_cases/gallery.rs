use std::{collections::{HashMap, HashSet}, str::FromStr, sync::Arc};

use dashmap::DashMap;
use parking_lot::RwLock;
use serde::Serialize;

use crate::{
    entities::{media::{MediaId, MediaItem}, photographer::PhotographerId},
    errors::AppError,
    repositories::catalog::CatalogRepository,
};

/// Orderings offered by the detail page dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Popularity,
    Date,
    Title,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Popularity, SortOrder::Date, SortOrder::Title];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "Popularité",
            SortOrder::Date => "Date",
            SortOrder::Title => "Titre",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "popularity",
            SortOrder::Date => "date",
            SortOrder::Title => "title",
        }
    }

    /// Parses an optional query value, falling back to the default order.
    pub fn from_query(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            None => Ok(SortOrder::default()),
            Some(v) if v.trim().is_empty() => Ok(SortOrder::default()),
            Some(v) => v.parse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popularity" | "popularite" | "popularité" | "likes" => Ok(SortOrder::Popularity),
            "date" => Ok(SortOrder::Date),
            "title" | "titre" => Ok(SortOrder::Title),
            other => Err(AppError::BadRequest(format!("Unknown sort order: {}", other))),
        }
    }
}

/// Stable in-place sort; ties keep their catalog order.
pub fn sort_media(items: &mut [MediaItem], order: SortOrder) {
    match order {
        SortOrder::Popularity => items.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortOrder::Date => items.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Title => items.sort_by_cached_key(|m| m.title.to_lowercase()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeState {
    pub media_id: MediaId,
    pub liked: bool,
    pub likes: u32,
    pub total_likes: u64,
}

/// One photographer's media grid with its likes bookkeeping.
///
/// `total_likes` is kept in step with every toggle rather than recomputed
/// from the page.
#[derive(Debug, Clone)]
pub struct MediaGallery {
    photographer_id: PhotographerId,
    items: Vec<MediaItem>,
    index: HashMap<MediaId, usize>,
    liked: HashSet<MediaId>,
    total_likes: u64,
}

impl MediaGallery {
    pub fn new(photographer_id: PhotographerId, items: Vec<MediaItem>) -> Self {
        let items: Vec<MediaItem> = items
            .into_iter()
            .filter(|m| m.photographer_id == photographer_id)
            .collect();
        let index = items.iter().enumerate().map(|(i, m)| (m.id, i)).collect();
        let total_likes = items.iter().map(|m| u64::from(m.likes)).sum();

        MediaGallery {
            photographer_id,
            items,
            index,
            liked: HashSet::new(),
            total_likes,
        }
    }

    pub fn photographer_id(&self) -> PhotographerId {
        self.photographer_id
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_likes(&self) -> u64 {
        self.total_likes
    }

    pub fn is_liked(&self, id: MediaId) -> bool {
        self.liked.contains(&id)
    }

    pub fn contains(&self, id: MediaId) -> bool {
        self.index.contains_key(&id)
    }

    /// Copy of the media in the requested order, with current like counts.
    pub fn sorted(&self, order: SortOrder) -> Vec<MediaItem> {
        let mut items = self.items.clone();
        sort_media(&mut items, order);
        items
    }

    /// Likes the media if it was not liked yet, unlikes it otherwise.
    pub fn toggle_like(&mut self, id: MediaId) -> Result<LikeState, AppError> {
        let slot = *self
            .index
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Media {} not found", id)))?;
        let item = &mut self.items[slot];

        let liked = if self.liked.remove(&id) {
            item.likes = item.likes.saturating_sub(1);
            self.total_likes = self.total_likes.saturating_sub(1);
            false
        } else {
            self.liked.insert(id);
            item.likes += 1;
            self.total_likes += 1;
            true
        };

        Ok(LikeState {
            media_id: id,
            liked,
            likes: item.likes,
            total_likes: self.total_likes,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct GallerySummary {
    pub photographer_id: PhotographerId,
    pub sort: SortOrder,
    pub total_likes: u64,
    pub liked: Vec<MediaId>,
    pub media: Vec<MediaItem>,
}

/// Lazily builds one gallery per photographer and keeps it for the life of
/// the process.
pub struct GalleryHandler<R>
where
    R: CatalogRepository,
{
    pub catalog_repo: R,
    galleries: DashMap<PhotographerId, Arc<RwLock<MediaGallery>>>,
}

impl<R> GalleryHandler<R>
where
    R: CatalogRepository,
{
    pub fn new(catalog_repo: R) -> Self {
        GalleryHandler {
            catalog_repo,
            galleries: DashMap::new(),
        }
    }

    /// Returns the gallery for a photographer, loading it on first use.
    pub async fn gallery(&self, id: PhotographerId) -> Result<Arc<RwLock<MediaGallery>>, AppError> {
        if let Some(gallery) = self.galleries.get(&id) {
            return Ok(gallery.clone());
        }

        self.catalog_repo.get_photographer(id).await?;
        let media = self.catalog_repo.media_for(id).await?;

        let gallery = self
            .galleries
            .entry(id)
            .or_insert_with(|| Arc::new(RwLock::new(MediaGallery::new(id, media))))
            .clone();

        Ok(gallery)
    }

    /// Media of a photographer in display order.
    pub async fn sorted_media(&self, id: PhotographerId, order: SortOrder) -> Result<Vec<MediaItem>, AppError> {
        let gallery = self.gallery(id).await?;
        let items = gallery.read().sorted(order);
        Ok(items)
    }

    pub async fn summary(&self, id: PhotographerId, order: SortOrder) -> Result<GallerySummary, AppError> {
        let gallery = self.gallery(id).await?;
        let gallery = gallery.read();

        let mut liked: Vec<MediaId> = gallery
            .items()
            .iter()
            .map(|m| m.id)
            .filter(|id| gallery.is_liked(*id))
            .collect();
        liked.sort();

        Ok(GallerySummary {
            photographer_id: id,
            sort: order,
            total_likes: gallery.total_likes(),
            liked,
            media: gallery.sorted(order),
        })
    }

    /// Toggles a like on a media item, wherever it lives.
    pub async fn toggle_like(&self, media_id: MediaId) -> Result<LikeState, AppError> {
        let media = self.catalog_repo.get_media(media_id).await?;
        let gallery = self.gallery(media.photographer_id).await?;
        let state = gallery.write().toggle_like(media_id)?;

        tracing::debug!(
            media_id = %media_id,
            liked = state.liked,
            total_likes = state.total_likes,
            "Like toggled"
        );

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::media::MediaKind;

    fn media(id: u64, title: &str, likes: u32, date: (i32, u32, u32)) -> MediaItem {
        MediaItem {
            id: MediaId(id),
            photographer_id: PhotographerId(930),
            title: title.into(),
            kind: MediaKind::Image(format!("{id}.jpg")),
            likes,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            price: 70,
        }
    }

    fn gallery() -> MediaGallery {
        MediaGallery::new(
            PhotographerId(930),
            vec![
                media(1, "lonesome", 88, (2019, 2, 3)),
                media(2, "Horseshoe", 98, (2011, 6, 20)),
                media(3, "Musical Festival", 11, (2020, 8, 1)),
                media(4, "Art Triangle", 98, (2017, 3, 9)),
            ],
        )
    }

    fn ids(items: &[MediaItem]) -> Vec<u64> {
        items.iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn popularity_sorts_by_likes_descending_and_keeps_ties_stable() {
        assert_eq!(ids(&gallery().sorted(SortOrder::Popularity)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn date_sorts_newest_first() {
        assert_eq!(ids(&gallery().sorted(SortOrder::Date)), vec![3, 1, 4, 2]);
    }

    #[test]
    fn title_sorts_case_insensitively() {
        assert_eq!(ids(&gallery().sorted(SortOrder::Title)), vec![4, 2, 1, 3]);
    }

    #[test]
    fn parses_dropdown_labels() {
        assert_eq!("Popularité".parse::<SortOrder>().unwrap(), SortOrder::Popularity);
        assert_eq!("Titre".parse::<SortOrder>().unwrap(), SortOrder::Title);
        assert_eq!(SortOrder::from_query(None).unwrap(), SortOrder::Popularity);
        assert!(SortOrder::from_query(Some("size")).is_err());
    }

    #[test]
    fn toggle_like_updates_item_and_total() {
        let mut gallery = gallery();
        assert_eq!(gallery.total_likes(), 295);

        let liked = gallery.toggle_like(MediaId(3)).unwrap();
        assert!(liked.liked);
        assert_eq!(liked.likes, 12);
        assert_eq!(liked.total_likes, 296);

        let unliked = gallery.toggle_like(MediaId(3)).unwrap();
        assert!(!unliked.liked);
        assert_eq!(unliked.likes, 11);
        assert_eq!(unliked.total_likes, 295);
    }

    #[test]
    fn toggle_like_on_unknown_media_is_not_found() {
        let mut gallery = gallery();
        assert!(matches!(gallery.toggle_like(MediaId(99)), Err(AppError::NotFound(_))));
        assert_eq!(gallery.total_likes(), 295);
    }

    #[test]
    fn foreign_media_is_filtered_out() {
        let mut foreign = media(5, "Other", 1000, (2020, 1, 1));
        foreign.photographer_id = PhotographerId(82);
        let gallery = MediaGallery::new(PhotographerId(930), vec![media(1, "a", 1, (2020, 1, 1)), foreign]);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.total_likes(), 1);
    }
}
