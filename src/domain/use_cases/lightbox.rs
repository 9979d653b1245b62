use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::{
    entities::{
        lightbox::{
            KeyOutcome, LightboxClosed, LightboxKey, LightboxView, SessionId, LIGHTBOX_DESCRIPTION,
            LIGHTBOX_ROLE,
        },
        media::{MediaId, MediaItem},
        photographer::PhotographerId,
    },
    errors::AppError,
    use_cases::carrousel::{Carrousel, FrameSlot},
    utils::assets::AssetResolver,
};

/// One open lightbox.
#[derive(Debug)]
pub struct LightboxSession {
    id: SessionId,
    photographer_id: PhotographerId,
    carrousel: Carrousel<FrameSlot>,
    last_used: Instant,
}

impl LightboxSession {
    fn view(&mut self) -> LightboxView {
        self.last_used = Instant::now();

        // The slot always holds the frame of the last render; fall back to
        // resolving it if the renderer was detached.
        let frame = self
            .carrousel
            .renderer()
            .and_then(FrameSlot::last)
            .cloned()
            .unwrap_or_else(|| self.carrousel.current_frame());

        LightboxView {
            session_id: self.id,
            position: self.carrousel.position(),
            total: self.carrousel.len(),
            frame,
            role: LIGHTBOX_ROLE,
            aria_describedby: LIGHTBOX_DESCRIPTION,
        }
    }

    pub fn idle_for(&self) -> Duration {
        self.last_used.elapsed()
    }
}

impl Drop for LightboxSession {
    fn drop(&mut self) {
        if self.carrousel.detach().is_some() {
            tracing::debug!(
                session_id = %self.id,
                photographer_id = %self.photographer_id,
                "Lightbox renderer detached"
            );
        }
    }
}

/// Store of open lightboxes. Each session sits behind its own lock, so
/// requests on one session run one after the other while other sessions
/// proceed independently.
#[derive(Debug, Clone)]
pub struct LightboxSessions {
    sessions: Arc<DashMap<SessionId, Arc<Mutex<LightboxSession>>>>,
    assets: AssetResolver,
}

impl LightboxSessions {
    pub fn new(assets: AssetResolver) -> Self {
        LightboxSessions {
            sessions: Arc::new(DashMap::new()),
            assets,
        }
    }

    /// Opens a lightbox on `items`, showing `start_index` first.
    pub fn open(
        &self,
        photographer_id: PhotographerId,
        items: Vec<MediaItem>,
        start_index: usize,
    ) -> Result<LightboxView, AppError> {
        let carrousel = Carrousel::new(items, start_index, self.assets.clone(), FrameSlot::default())?;

        let id = SessionId::new();
        let mut session = LightboxSession {
            id,
            photographer_id,
            carrousel,
            last_used: Instant::now(),
        };
        let view = session.view();

        self.sessions.insert(id, Arc::new(Mutex::new(session)));
        tracing::info!(
            session_id = %id,
            photographer_id = %photographer_id,
            position = view.position,
            total = view.total,
            "Lightbox opened"
        );

        Ok(view)
    }

    fn session(&self, id: SessionId) -> Result<Arc<Mutex<LightboxSession>>, AppError> {
        self.sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(format!("Lightbox session {} not found", id)))
    }

    fn with_session<F>(&self, id: SessionId, op: F) -> Result<LightboxView, AppError>
    where
        F: FnOnce(&mut Carrousel<FrameSlot>),
    {
        let session = self.session(id)?;
        apply(&session, op)
    }

    pub fn advance(&self, id: SessionId) -> Result<LightboxView, AppError> {
        self.with_session(id, |c| {
            c.next();
        })
    }

    pub fn retreat(&self, id: SessionId) -> Result<LightboxView, AppError> {
        self.with_session(id, |c| {
            c.previous();
        })
    }

    pub fn jump_to(&self, id: SessionId, index: usize) -> Result<LightboxView, AppError> {
        self.with_session(id, |c| {
            c.jump_to(index);
        })
    }

    pub fn refresh(&self, id: SessionId) -> Result<LightboxView, AppError> {
        self.with_session(id, Carrousel::update)
    }

    /// Closes the session and detaches its renderer.
    pub fn close(&self, id: SessionId) -> Result<LightboxClosed, AppError> {
        let (_, session) = self
            .sessions
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("Lightbox session {} not found", id)))?;

        session.lock().carrousel.detach();
        tracing::info!(session_id = %id, "Lightbox closed");

        Ok(LightboxClosed { session_id: id, closed: true })
    }

    /// Applies a keyboard key the way the lightbox page binds them.
    pub fn handle_key(&self, id: SessionId, key: &str) -> Result<KeyOutcome, AppError> {
        match LightboxKey::from(key) {
            LightboxKey::ArrowRight => self.advance(id).map(KeyOutcome::Moved),
            LightboxKey::ArrowLeft => self.retreat(id).map(KeyOutcome::Moved),
            LightboxKey::Escape => self.close(id).map(KeyOutcome::Closed),
            LightboxKey::Other => self.refresh(id).map(KeyOutcome::Ignored),
        }
    }

    /// Drops sessions idle for longer than `ttl`. Returns how many went.
    pub fn purge_idle(&self, ttl: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| {
            // A session locked right now is in use, so it is not idle.
            session.try_lock().map_or(true, |s| s.idle_for() <= ttl)
        });
        before.saturating_sub(self.sessions.len())
    }

    /// Closes everything, used on shutdown.
    pub fn close_all(&self) -> usize {
        let count = self.sessions.len();
        self.sessions.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }
}

/// Runs `op` on a session unless it was closed while the caller waited for
/// the lock.
fn apply<F>(session: &Mutex<LightboxSession>, op: F) -> Result<LightboxView, AppError>
where
    F: FnOnce(&mut Carrousel<FrameSlot>),
{
    let mut session = session.lock();
    if !session.carrousel.is_attached() {
        return Err(AppError::NotFound(format!("Lightbox session {} is closed", session.id)));
    }

    op(&mut session.carrousel);
    Ok(session.view())
}

/// Where a lightbox opens in `items`: on the clicked media when its id is
/// known, otherwise on `index`.
pub fn start_position(items: &[MediaItem], index: usize, media_id: Option<MediaId>) -> Result<usize, AppError> {
    match media_id {
        None => Ok(index),
        Some(id) => items
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Media {} is not in this gallery", id))),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::media::MediaKind;

    fn items() -> Vec<MediaItem> {
        ["a.jpg", "b.mp4", "c.jpg"]
            .iter()
            .enumerate()
            .map(|(i, file)| MediaItem {
                id: MediaId(i as u64 + 1),
                photographer_id: PhotographerId(82),
                title: format!("title-{}", i + 1),
                kind: if file.ends_with(".mp4") {
                    MediaKind::Video(file.to_string())
                } else {
                    MediaKind::Image(file.to_string())
                },
                likes: 0,
                date: NaiveDate::from_ymd_opt(2021, 5, 5).unwrap(),
                price: 0,
            })
            .collect()
    }

    fn sessions() -> LightboxSessions {
        LightboxSessions::new(AssetResolver::default())
    }

    #[test]
    fn open_returns_start_frame_with_dialog_hints() {
        let sessions = sessions();
        let view = sessions.open(PhotographerId(82), items(), 1).unwrap();
        assert_eq!(view.position, 1);
        assert_eq!(view.total, 3);
        assert!(view.frame.shows_video());
        assert_eq!(view.role, "dialog");
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn open_with_no_media_is_not_found() {
        let result = sessions().open(PhotographerId(82), Vec::new(), 0);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn keys_navigate_and_escape_closes() {
        let sessions = sessions();
        let id = sessions.open(PhotographerId(82), items(), 0).unwrap().session_id;

        let moved = sessions.handle_key(id, "ArrowLeft").unwrap();
        assert!(matches!(moved, KeyOutcome::Moved(ref v) if v.position == 2));

        let ignored = sessions.handle_key(id, "Tab").unwrap();
        assert!(matches!(ignored, KeyOutcome::Ignored(ref v) if v.position == 2));

        let closed = sessions.handle_key(id, "Escape").unwrap();
        assert!(matches!(closed, KeyOutcome::Closed(_)));
        assert!(!sessions.contains(id));
        assert!(matches!(sessions.advance(id), Err(AppError::NotFound(_))));
        assert!(matches!(sessions.close(id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn purge_drops_only_idle_sessions() {
        let sessions = sessions();
        sessions.open(PhotographerId(82), items(), 0).unwrap();
        assert_eq!(sessions.purge_idle(Duration::from_secs(60)), 0);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(sessions.purge_idle(Duration::ZERO), 1);
        assert!(sessions.is_empty());
    }

    #[test]
    fn request_holding_a_closed_session_gets_no_frame() {
        let sessions = sessions();
        let id = sessions.open(PhotographerId(82), items(), 0).unwrap().session_id;
        let held = sessions.session(id).unwrap();

        sessions.close(id).unwrap();

        assert!(matches!(apply(&held, |c| { c.next(); }), Err(AppError::NotFound(_))));
        assert_eq!(held.lock().carrousel.position(), 0);
    }

    #[test]
    fn start_position_follows_the_clicked_media() {
        let mut reordered = items();
        reordered.reverse();

        assert_eq!(start_position(&reordered, 0, Some(MediaId(1))).unwrap(), 2);
        assert_eq!(start_position(&reordered, 1, None).unwrap(), 1);
        assert!(matches!(
            start_position(&reordered, 0, Some(MediaId(99))),
            Err(AppError::NotFound(_))
        ));
    }
}
