//! Interfaces to the native platform state the engine relies on.
//!
//! The engine never touches the handler registry, pasteboard, share sheet, rendered
//! surface or photo library directly; it awaits these capabilities instead. The mobile
//! host forwards them to the native plugin, the desktop host answers what it can, and
//! tests substitute a recording fake.

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::ShareOutcome;
use crate::translate::PasteboardItem;
use crate::Result;

#[async_trait]
pub trait SchemeOpener: Send + Sync {
    /// Whether a handler is registered for `url`. Never opens anything.
    async fn can_open_url(&self, url: &str) -> bool;

    /// Asks the OS to open `url`. Returns `true` if a handler accepted it.
    async fn open_url(&self, url: &str) -> bool;
}

#[async_trait]
pub trait PasteboardWriter: Send + Sync {
    async fn write_pasteboard(&self, item: &PasteboardItem) -> Result<()>;
}

/// One entry handed to the native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareItem {
    Text(String),
    Url(String),
    /// Encoded image bytes.
    Image(Vec<u8>),
}

#[async_trait]
pub trait ShareSheet: Send + Sync {
    /// Presents the chooser and resolves once it is dismissed.
    ///
    /// A user cancellation resolves to `completed: false`; only a failed
    /// presentation is an error.
    async fn present_share_sheet(
        &self,
        items: Vec<ShareItem>,
        title: Option<String>,
    ) -> Result<ShareOutcome>;
}

/// The kind of visual surface currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurfaceKind {
    WebContent,
    ViewHierarchy,
    None,
}

#[async_trait]
pub trait CaptureSurface: Send + Sync {
    async fn surface_kind(&self) -> Result<SurfaceKind>;

    /// Snapshot of the web content. `Ok(None)` means the surface produced no image
    /// without reporting an error.
    async fn snapshot_web_content(&self) -> Result<Option<Vec<u8>>>;

    /// Rasterizes the visible view tree at its natural bounds.
    async fn rasterize_view(&self) -> Result<Vec<u8>>;
}

/// Outcome of a photo library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhotoAccess {
    Authorized,
    Limited,
    Denied,
    Restricted,
    NotDetermined,
}

impl PhotoAccess {
    pub fn allows_write(self) -> bool {
        matches!(self, PhotoAccess::Authorized | PhotoAccess::Limited)
    }
}

#[async_trait]
pub trait PhotoLibrary: Send + Sync {
    async fn request_photo_access(&self) -> Result<PhotoAccess>;

    /// Stores a PNG in `album` as one atomic library change. Returns where it was
    /// stored, if the platform exposes that.
    async fn save_image(&self, png: Vec<u8>, album: &str) -> Result<Option<String>>;
}

/// Everything a [`crate::ShareEngine`] needs from its platform.
pub trait Host:
    SchemeOpener + PasteboardWriter + ShareSheet + CaptureSurface + PhotoLibrary
{
}

impl<T> Host for T where
    T: SchemeOpener + PasteboardWriter + ShareSheet + CaptureSurface + PhotoLibrary
{
}
