use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    entities::media::{MediaId, MediaItem, MediaKind},
    errors::AppError,
    utils::assets::AssetResolver,
};

pub const LIGHTBOX_ROLE: &str = "dialog";
pub const LIGHTBOX_DESCRIPTION: &str = "Carrousel du photographe";

/// What the lightbox must display for one media item.
///
/// Exactly one of the image or video elements is visible for any frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum MediaFrame {
    Image {
        media_id: MediaId,
        src: String,
        alt: String,
        title: String,
    },
    Video {
        media_id: MediaId,
        src: String,
        title: String,
        controls: bool,
    },
}

impl MediaFrame {
    pub fn resolve(item: &MediaItem, assets: &AssetResolver) -> Self {
        match &item.kind {
            MediaKind::Image(file) => MediaFrame::Image {
                media_id: item.id,
                src: assets.media_url(file),
                alt: item.title.clone(),
                title: item.title.clone(),
            },
            MediaKind::Video(file) => MediaFrame::Video {
                media_id: item.id,
                src: assets.media_url(file),
                title: item.title.clone(),
                controls: true,
            },
        }
    }

    pub fn media_id(&self) -> MediaId {
        match self {
            MediaFrame::Image { media_id, .. } | MediaFrame::Video { media_id, .. } => *media_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MediaFrame::Image { title, .. } | MediaFrame::Video { title, .. } => title,
        }
    }

    pub fn src(&self) -> &str {
        match self {
            MediaFrame::Image { src, .. } | MediaFrame::Video { src, .. } => src,
        }
    }

    pub fn shows_image(&self) -> bool {
        matches!(self, MediaFrame::Image { .. })
    }

    pub fn shows_video(&self) -> bool {
        matches!(self, MediaFrame::Video { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        SessionId::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(SessionId)
            .map_err(|_| AppError::BadRequest("Invalid lightbox session id".to_string()))
    }
}

/// Snapshot returned to the page after every lightbox operation.
#[derive(Debug, Clone, Serialize)]
pub struct LightboxView {
    pub session_id: SessionId,
    pub position: usize,
    pub total: usize,
    pub frame: MediaFrame,
    pub role: &'static str,
    pub aria_describedby: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LightboxClosed {
    pub session_id: SessionId,
    pub closed: bool,
}

/// Keyboard keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    ArrowRight,
    ArrowLeft,
    Escape,
    Other,
}

impl From<&str> for LightboxKey {
    fn from(key: &str) -> Self {
        match key {
            "ArrowRight" | "Right" => LightboxKey::ArrowRight,
            "ArrowLeft" | "Left" => LightboxKey::ArrowLeft,
            "Escape" | "Esc" => LightboxKey::Escape,
            _ => LightboxKey::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum KeyOutcome {
    Moved(LightboxView),
    Ignored(LightboxView),
    Closed(LightboxClosed),
}

#[derive(Debug, Deserialize)]
pub struct OpenLightboxRequest {
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub sort: Option<String>,
    /// The clicked item. Wins over `index` when the grid went stale.
    #[serde(default)]
    pub media_id: Option<MediaId>,
}

#[derive(Debug, Deserialize)]
pub struct JumpRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct KeyRequest {
    pub key: String,
}
