//! Cyclic navigation over one photographer's media.
//!
//! A [`Carrousel`] owns the media shown by a lightbox and the index of the
//! item on screen. Every change of index pushes the resolved [`MediaFrame`]
//! to a [`MediaRenderer`]; the first frame is pushed at construction so an
//! opening lightbox is never blank.

use crate::{
    entities::{lightbox::MediaFrame, media::MediaItem},
    errors::CarrouselError,
    utils::assets::AssetResolver,
};

/// Receives the frame to display. Must tolerate the same frame twice.
pub trait MediaRenderer {
    fn render(&mut self, frame: &MediaFrame);
}

impl<F> MediaRenderer for F
where
    F: FnMut(&MediaFrame),
{
    fn render(&mut self, frame: &MediaFrame) {
        self(frame)
    }
}

/// Renderer that keeps the latest frame, for callers that read it back.
#[derive(Debug, Default, Clone)]
pub struct FrameSlot {
    last: Option<MediaFrame>,
    renders: u64,
}

impl FrameSlot {
    pub fn last(&self) -> Option<&MediaFrame> {
        self.last.as_ref()
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl MediaRenderer for FrameSlot {
    fn render(&mut self, frame: &MediaFrame) {
        self.last = Some(frame.clone());
        self.renders += 1;
    }
}

#[derive(Debug)]
pub struct Carrousel<R: MediaRenderer> {
    items: Vec<MediaItem>,
    position: usize,
    assets: AssetResolver,
    renderer: Option<R>,
}

impl<R: MediaRenderer> Carrousel<R> {
    /// Builds a carrousel and renders the starting item.
    ///
    /// An out-of-range `start_index` falls back to the first item.
    pub fn new(
        items: Vec<MediaItem>,
        start_index: usize,
        assets: AssetResolver,
        renderer: R,
    ) -> Result<Self, CarrouselError> {
        if items.is_empty() {
            return Err(CarrouselError::EmptyMedia);
        }

        let position = if start_index < items.len() { start_index } else { 0 };

        let mut carrousel = Carrousel {
            items,
            position,
            assets,
            renderer: Some(renderer),
        };
        carrousel.update();

        Ok(carrousel)
    }

    /// Advances one item, wrapping from the last to the first.
    pub fn next(&mut self) -> usize {
        self.position = (self.position + 1) % self.items.len();
        self.update();
        self.position
    }

    /// Steps back one item, wrapping from the first to the last.
    pub fn previous(&mut self) -> usize {
        let len = self.items.len();
        self.position = (self.position + len - 1) % len;
        self.update();
        self.position
    }

    /// Moves straight to `index`; out of range lands on the first item.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.position = if index < self.items.len() { index } else { 0 };
        self.update();
        self.position
    }

    /// Re-renders the current item without moving.
    pub fn update(&mut self) {
        let frame = self.current_frame();
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&frame);
        }
    }

    pub fn current_frame(&self) -> MediaFrame {
        MediaFrame::resolve(self.current(), &self.assets)
    }

    pub fn current(&self) -> &MediaItem {
        &self.items[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.renderer.is_some()
    }

    /// Detaches the renderer. Navigation still works afterwards but nothing
    /// is drawn, so a closed lightbox cannot touch the view again.
    pub fn detach(&mut self) -> Option<R> {
        self.renderer.take()
    }
}
