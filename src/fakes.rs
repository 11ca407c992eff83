//! A recording host for exercising the engine without a device.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::capability::{
    CaptureSurface, PasteboardWriter, PhotoAccess, PhotoLibrary, SchemeOpener, ShareItem,
    ShareSheet, SurfaceKind,
};
use crate::models::ShareOutcome;
use crate::translate::PasteboardItem;
use crate::{Error, Result};

pub enum SheetBehavior {
    Complete(ShareOutcome),
    Fail(String),
    /// Resolves only when the test sends the outcome.
    Gated(Mutex<Option<oneshot::Receiver<ShareOutcome>>>),
}

pub enum SnapshotBehavior {
    Image(Vec<u8>),
    Empty,
    Fail(String),
}

pub struct FakeHost {
    installed: HashSet<String>,
    pub probes: Mutex<Vec<String>>,
    pub opened: Mutex<Vec<String>>,
    pub pasteboard: Mutex<Vec<PasteboardItem>>,
    sheet: SheetBehavior,
    pub presented: Mutex<Vec<(Vec<ShareItem>, Option<String>)>>,
    surface: SurfaceKind,
    snapshot: SnapshotBehavior,
    raster: Option<Vec<u8>>,
    access: PhotoAccess,
    save_error: Option<String>,
    pasteboard_error: Option<String>,
    pub access_requests: Mutex<usize>,
    pub saved: Mutex<Vec<(Vec<u8>, String)>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            installed: HashSet::new(),
            probes: Mutex::default(),
            opened: Mutex::default(),
            pasteboard: Mutex::default(),
            sheet: SheetBehavior::Complete(ShareOutcome {
                completed: true,
                app: None,
            }),
            presented: Mutex::default(),
            surface: SurfaceKind::None,
            snapshot: SnapshotBehavior::Empty,
            raster: None,
            access: PhotoAccess::Authorized,
            save_error: None,
            pasteboard_error: None,
            access_requests: Mutex::new(0),
            saved: Mutex::default(),
        }
    }

    /// Registers handlers for the given URL schemes (`"whatsapp"`, `"x"`, ...).
    pub fn with_installed(mut self, schemes: &[&str]) -> Self {
        self.installed.extend(schemes.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_sheet(mut self, sheet: SheetBehavior) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_web_surface(mut self, snapshot: SnapshotBehavior) -> Self {
        self.surface = SurfaceKind::WebContent;
        self.snapshot = snapshot;
        self
    }

    pub fn with_view_surface(mut self, raster: Vec<u8>) -> Self {
        self.surface = SurfaceKind::ViewHierarchy;
        self.raster = Some(raster);
        self
    }

    pub fn with_access(mut self, access: PhotoAccess) -> Self {
        self.access = access;
        self
    }

    pub fn with_save_error(mut self, message: &str) -> Self {
        self.save_error = Some(message.to_string());
        self
    }

    pub fn with_pasteboard_error(mut self, message: &str) -> Self {
        self.pasteboard_error = Some(message.to_string());
        self
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn access_requests(&self) -> usize {
        *self.access_requests.lock().unwrap()
    }

    pub fn presented_count(&self) -> usize {
        self.presented.lock().unwrap().len()
    }

    fn handles(&self, url: &str) -> bool {
        url::Url::parse(url)
            .map(|parsed| self.installed.contains(parsed.scheme()))
            .unwrap_or(false)
    }
}

#[async_trait]
impl SchemeOpener for FakeHost {
    async fn can_open_url(&self, url: &str) -> bool {
        self.probes.lock().unwrap().push(url.to_string());
        self.handles(url)
    }

    async fn open_url(&self, url: &str) -> bool {
        self.opened.lock().unwrap().push(url.to_string());
        self.handles(url)
    }
}

#[async_trait]
impl PasteboardWriter for FakeHost {
    async fn write_pasteboard(&self, item: &PasteboardItem) -> Result<()> {
        if let Some(message) = &self.pasteboard_error {
            return Err(Error::Underlying(message.clone()));
        }
        self.pasteboard.lock().unwrap().push(item.clone());
        Ok(())
    }
}

#[async_trait]
impl ShareSheet for FakeHost {
    async fn present_share_sheet(
        &self,
        items: Vec<ShareItem>,
        title: Option<String>,
    ) -> Result<ShareOutcome> {
        self.presented.lock().unwrap().push((items, title));
        match &self.sheet {
            SheetBehavior::Complete(outcome) => Ok(outcome.clone()),
            SheetBehavior::Fail(message) => Err(Error::Underlying(message.clone())),
            SheetBehavior::Gated(rx) => {
                let rx = rx.lock().unwrap().take().expect("sheet presented twice");
                rx.await
                    .map_err(|_| Error::Underlying("sheet dropped".to_string()))
            }
        }
    }
}

#[async_trait]
impl CaptureSurface for FakeHost {
    async fn surface_kind(&self) -> Result<SurfaceKind> {
        Ok(self.surface)
    }

    async fn snapshot_web_content(&self) -> Result<Option<Vec<u8>>> {
        match &self.snapshot {
            SnapshotBehavior::Image(bytes) => Ok(Some(bytes.clone())),
            SnapshotBehavior::Empty => Ok(None),
            SnapshotBehavior::Fail(message) => Err(Error::Underlying(message.clone())),
        }
    }

    async fn rasterize_view(&self) -> Result<Vec<u8>> {
        self.raster.clone().ok_or(Error::CaptureUnavailable)
    }
}

#[async_trait]
impl PhotoLibrary for FakeHost {
    async fn request_photo_access(&self) -> Result<PhotoAccess> {
        *self.access_requests.lock().unwrap() += 1;
        Ok(self.access)
    }

    async fn save_image(&self, png: Vec<u8>, album: &str) -> Result<Option<String>> {
        if let Some(message) = &self.save_error {
            return Err(Error::Underlying(message.clone()));
        }
        self.saved.lock().unwrap().push((png, album.to_string()));
        Ok(Some(format!("{album}/fake.png")))
    }
}
