//! Asset loading collaborator
//!
//! Image loads are asynchronous in the browser. Instead of callbacks, a loader
//! hands out a ticket per request and the session polls it once per frame
//! until the image is ready or the load has failed.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::task::Poll;

use crate::error::AssetError;
use crate::scene::Texture;

/// A decoded image: natural size plus the renderer's texture for it
#[derive(Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub texture: Option<Rc<dyn Texture>>,
}

impl fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("textured", &self.texture.is_some())
            .finish()
    }
}

impl LoadedImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texture: None,
        }
    }

    pub fn with_texture(mut self, texture: Rc<dyn Texture>) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Handle for one outstanding image request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetTicket(pub u32);

/// Source of images for sprites.
///
/// A ticket resolves exactly once; polling it again after `Ready` is
/// unspecified. There is no cancellation.
pub trait AssetLoader {
    /// Start loading `url`
    fn request(&mut self, url: &str) -> AssetTicket;

    /// Check on a request without blocking
    fn poll(&mut self, ticket: AssetTicket) -> Poll<Result<LoadedImage, AssetError>>;
}

#[derive(Debug)]
struct PendingLoad {
    url: String,
    polls_left: u32,
}

/// In-process loader backed by a table of known images.
///
/// Every request stays pending for `delay` polls before resolving, which
/// mimics network latency for the frame driver.
#[derive(Default)]
pub struct MemoryAssets {
    images: HashMap<String, LoadedImage>,
    failures: HashMap<String, String>,
    delay: u32,
    pending: HashMap<AssetTicket, PendingLoad>,
    next_ticket: u32,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of polls each request stays pending
    pub fn with_delay(mut self, polls: u32) -> Self {
        self.delay = polls;
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, image: LoadedImage) {
        self.images.insert(url.into(), image);
    }

    /// Make every request for `url` fail with `reason`
    pub fn fail(&mut self, url: impl Into<String>, reason: impl Into<String>) {
        self.failures.insert(url.into(), reason.into());
    }

    /// Requests not yet resolved
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl AssetLoader for MemoryAssets {
    fn request(&mut self, url: &str) -> AssetTicket {
        let ticket = AssetTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.insert(
            ticket,
            PendingLoad {
                url: url.to_string(),
                polls_left: self.delay,
            },
        );
        log::trace!("Requested {url} as {ticket:?}");
        ticket
    }

    fn poll(&mut self, ticket: AssetTicket) -> Poll<Result<LoadedImage, AssetError>> {
        let Some(load) = self.pending.get_mut(&ticket) else {
            return Poll::Ready(Err(AssetError::NotFound(format!("{ticket:?}"))));
        };

        if load.polls_left > 0 {
            load.polls_left -= 1;
            return Poll::Pending;
        }

        let Some(PendingLoad { url, .. }) = self.pending.remove(&ticket) else {
            return Poll::Pending;
        };

        if let Some(reason) = self.failures.get(&url) {
            return Poll::Ready(Err(AssetError::Failed {
                url,
                reason: reason.clone(),
            }));
        }

        Poll::Ready(
            self.images
                .get(&url)
                .cloned()
                .ok_or(AssetError::NotFound(url)),
        )
    }
}
