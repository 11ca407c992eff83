use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Manager, Runtime};
use tempfile::Builder;

use crate::capability::{
    CaptureSurface, PasteboardWriter, PhotoAccess, PhotoLibrary, SchemeOpener, ShareItem,
    ShareSheet, SurfaceKind,
};
use crate::{Config, Error, PasteboardItem, Result, ShareEngine, ShareOutcome};

pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
    config: Config,
) -> crate::Result<Share<R>> {
    Ok(ShareEngine::new(DesktopHost { app: app.clone() }, config))
}

/// Access to the share APIs.
pub type Share<R> = ShareEngine<DesktopHost<R>>;

/// Desktop platforms have no app URL-scheme registry to query, no shared pasteboard
/// handoff and no capturable web surface. Saved images go to a folder under the
/// user's Pictures directory.
pub struct DesktopHost<R: Runtime> {
    app: AppHandle<R>,
}

#[async_trait]
impl<R: Runtime> SchemeOpener for DesktopHost<R> {
    async fn can_open_url(&self, url: &str) -> bool {
        debug!("no scheme handler registry on desktop, {url} reported unavailable");
        false
    }

    async fn open_url(&self, _url: &str) -> bool {
        false
    }
}

#[async_trait]
impl<R: Runtime> PasteboardWriter for DesktopHost<R> {
    async fn write_pasteboard(&self, _item: &PasteboardItem) -> Result<()> {
        Err(Error::Underlying(
            "El portapapeles compartido no esta disponible en escritorio".to_string(),
        ))
    }
}

#[async_trait]
impl<R: Runtime> ShareSheet for DesktopHost<R> {
    async fn present_share_sheet(
        &self,
        _items: Vec<ShareItem>,
        _title: Option<String>,
    ) -> Result<ShareOutcome> {
        Err(Error::Underlying(
            "La hoja de compartir no esta disponible en escritorio".to_string(),
        ))
    }
}

#[async_trait]
impl<R: Runtime> CaptureSurface for DesktopHost<R> {
    async fn surface_kind(&self) -> Result<SurfaceKind> {
        Ok(SurfaceKind::None)
    }

    async fn snapshot_web_content(&self) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn rasterize_view(&self) -> Result<Vec<u8>> {
        Err(Error::CaptureUnavailable)
    }
}

#[async_trait]
impl<R: Runtime> PhotoLibrary for DesktopHost<R> {
    async fn request_photo_access(&self) -> Result<PhotoAccess> {
        Ok(PhotoAccess::Authorized)
    }

    async fn save_image(&self, png: Vec<u8>, album: &str) -> Result<Option<String>> {
        let dir = self
            .app
            .path()
            .picture_dir()
            .map_err(|e| Error::StorageWriteFailed(e.to_string()))?
            .join(album);
        let path =
            tauri::async_runtime::spawn_blocking(move || write_png_atomically(&dir, &png)).await??;
        Ok(Some(path.display().to_string()))
    }
}

/// Writes `png` into `dir` under a fresh `SLM_<uuid>.png` name.
///
/// The bytes go to a temporary file in the same directory first and are renamed
/// into place, so the album never holds a partial image.
fn write_png_atomically(dir: &Path, png: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        Error::StorageWriteFailed(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let mut temp_file = Builder::new()
        .prefix(".slm-")
        .suffix(".png")
        .tempfile_in(dir)
        .map_err(|e| Error::StorageWriteFailed(format!("Failed to create temp file: {}", e)))?;
    temp_file
        .write_all(png)
        .and_then(|_| temp_file.as_file().sync_all())
        .map_err(|e| Error::StorageWriteFailed(format!("Failed to write image: {}", e)))?;

    let path = dir.join(format!("SLM_{}.png", uuid::Uuid::new_v4()));
    temp_file
        .persist(&path)
        .map_err(|e| Error::StorageWriteFailed(format!("Failed to persist image: {}", e.error)))?;
    Ok(path)
}
