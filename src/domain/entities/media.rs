use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{entities::photographer::PhotographerId, errors::MediaRecordError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub u64);

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which element displays the media, with the source filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "file", rename_all = "lowercase")]
pub enum MediaKind {
    Image(String),
    Video(String),
}

impl MediaKind {
    pub fn file_name(&self) -> &str {
        match self {
            MediaKind::Image(file) | MediaKind::Video(file) => file,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video(_))
    }
}

/// Raw shape of a `media` entry in `photographers.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    pub id: MediaId,
    pub photographer_id: PhotographerId,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub likes: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MediaRecord", rename_all = "camelCase")]
pub struct MediaItem {
    pub id: MediaId,
    pub photographer_id: PhotographerId,
    pub title: String,
    #[serde(flatten)]
    pub kind: MediaKind,
    pub likes: u32,
    pub date: NaiveDate,
    pub price: u32,
}

impl MediaItem {
    /// Filename of the image or video, relative to the media asset directory.
    pub fn asset_path(&self) -> &str {
        self.kind.file_name()
    }
}

impl TryFrom<MediaRecord> for MediaItem {
    type Error = MediaRecordError;

    fn try_from(record: MediaRecord) -> Result<Self, Self::Error> {
        let image = record.image.filter(|s| !s.trim().is_empty());
        let video = record.video.filter(|s| !s.trim().is_empty());

        let kind = match (image, video) {
            (Some(image), None) => MediaKind::Image(image),
            (None, Some(video)) => MediaKind::Video(video),
            (Some(_), Some(_)) => return Err(MediaRecordError::BothSources(record.id.0)),
            (None, None) => return Err(MediaRecordError::NoSource(record.id.0)),
        };

        Ok(MediaItem {
            id: record.id,
            photographer_id: record.photographer_id,
            title: record.title,
            kind,
            likes: record.likes,
            date: record.date,
            price: record.price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(image: Option<&str>, video: Option<&str>) -> MediaRecord {
        MediaRecord {
            id: MediaId(342550),
            photographer_id: PhotographerId(82),
            title: "Fashion Yellow Beach".into(),
            image: image.map(str::to_string),
            video: video.map(str::to_string),
            likes: 62,
            date: NaiveDate::from_ymd_opt(2011, 12, 8).unwrap(),
            price: 55,
        }
    }

    #[test]
    fn image_record_becomes_image_kind() {
        let item = MediaItem::try_from(record(Some("Fashion_Yellow_Beach.jpg"), None)).unwrap();
        assert_eq!(item.kind, MediaKind::Image("Fashion_Yellow_Beach.jpg".into()));
        assert_eq!(item.asset_path(), "Fashion_Yellow_Beach.jpg");
    }

    #[test]
    fn video_record_becomes_video_kind() {
        let item = MediaItem::try_from(record(None, Some("Beach.mp4"))).unwrap();
        assert!(item.kind.is_video());
    }

    #[test]
    fn record_with_both_sources_is_rejected() {
        let err = MediaItem::try_from(record(Some("a.jpg"), Some("b.mp4"))).unwrap_err();
        assert_eq!(err, MediaRecordError::BothSources(342550));
    }

    #[test]
    fn record_with_blank_sources_is_rejected() {
        let err = MediaItem::try_from(record(Some("  "), None)).unwrap_err();
        assert_eq!(err, MediaRecordError::NoSource(342550));
    }

    #[test]
    fn deserializes_through_record_validation() {
        let json = r#"{
            "id": 8520927,
            "photographerId": 82,
            "title": "Fashion Urban Jungle",
            "image": "Fashion_Urban_Jungle.jpg",
            "likes": 11,
            "date": "2011-11-06",
            "price": 55
        }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.photographer_id, PhotographerId(82));
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2011, 11, 6).unwrap());

        let broken = r#"{"id": 1, "photographerId": 82, "title": "x", "date": "2011-11-06"}"#;
        assert!(serde_json::from_str::<MediaItem>(broken).is_err());
    }

    #[test]
    fn serializes_kind_as_flat_fields() {
        let item = MediaItem::try_from(record(None, Some("Beach.mp4"))).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["kind"], "video");
        assert_eq!(value["file"], "Beach.mp4");
        assert_eq!(value["photographerId"], 82);
    }
}
