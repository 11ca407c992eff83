use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use log::warn;
use serde::{de::DeserializeOwned, de::IgnoredAny, Deserialize, Serialize};
use tauri::{
  plugin::{PluginApi, PluginHandle},
  AppHandle, Runtime,
};

use crate::capability::{
  CaptureSurface, PasteboardWriter, PhotoAccess, PhotoLibrary, SchemeOpener, ShareItem,
  ShareSheet, SurfaceKind,
};
use crate::{Config, Error, PasteboardItem, Result, ShareEngine, ShareOutcome};

#[cfg(target_os = "android")]
const PLUGIN_IDENTIFIER: &str = "plugin.slm.share";

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_slm_share);

// initializes the Kotlin or Swift plugin classes
pub fn init<R: Runtime, C: DeserializeOwned>(
  _app: &AppHandle<R>,
  api: PluginApi<R, C>,
  config: Config,
) -> crate::Result<Share<R>> {
  #[cfg(target_os = "android")]
  let handle = api.register_android_plugin(PLUGIN_IDENTIFIER, "SlmSharePlugin")?;
  #[cfg(target_os = "ios")]
  let handle = api.register_ios_plugin(init_plugin_slm_share)?;
  Ok(ShareEngine::new(MobileHost(handle), config))
}

/// Access to the share APIs.
pub type Share<R> = ShareEngine<MobileHost<R>>;

/// Forwards every capability to the native plugin, which runs it on the UI thread
/// and resolves the call once the native action has finished.
pub struct MobileHost<R: Runtime>(PluginHandle<R>);

#[derive(Serialize)]
struct UrlArgs<'a> {
  url: &'a str,
}

#[derive(Deserialize)]
struct BoolResponse {
  value: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasteboardArgs<'a> {
  key: &'a str,
  data: String,
  /// Seconds from now.
  expires_in: u64,
}

#[derive(Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
enum SheetItem {
  Text(String),
  Url(String),
  /// Base64 encoded.
  Image(String),
}

impl From<ShareItem> for SheetItem {
  fn from(item: ShareItem) -> Self {
    match item {
      ShareItem::Text(text) => SheetItem::Text(text),
      ShareItem::Url(url) => SheetItem::Url(url),
      ShareItem::Image(bytes) => SheetItem::Image(general_purpose::STANDARD.encode(bytes)),
    }
  }
}

#[derive(Serialize)]
struct SheetArgs {
  items: Vec<SheetItem>,
  title: Option<String>,
}

#[derive(Deserialize)]
struct SurfaceResponse {
  kind: SurfaceKind,
}

#[derive(Deserialize)]
struct ImageResponse {
  image: Option<String>,
}

#[derive(Deserialize)]
struct AccessResponse {
  status: PhotoAccess,
}

#[derive(Serialize)]
struct SaveArgs<'a> {
  image: String,
  album: &'a str,
}

#[derive(Deserialize)]
struct SaveResponse {
  path: Option<String>,
}

fn decode_native_image(image: &str) -> Result<Vec<u8>> {
  general_purpose::STANDARD
    .decode(image)
    .map_err(|_| Error::CaptureFailed)
}

impl<R: Runtime> MobileHost<R> {
  async fn ask(&self, command: &str, url: &str) -> bool {
    match self
      .0
      .run_mobile_plugin_async::<BoolResponse>(command, UrlArgs { url })
      .await
    {
      Ok(response) => response.value,
      Err(e) => {
        warn!("{command} failed for {url}: {e}");
        false
      }
    }
  }
}

#[async_trait]
impl<R: Runtime> SchemeOpener for MobileHost<R> {
  async fn can_open_url(&self, url: &str) -> bool {
    self.ask("canOpenUrl", url).await
  }

  async fn open_url(&self, url: &str) -> bool {
    self.ask("openUrl", url).await
  }
}

#[async_trait]
impl<R: Runtime> PasteboardWriter for MobileHost<R> {
  async fn write_pasteboard(&self, item: &PasteboardItem) -> Result<()> {
    let args = PasteboardArgs {
      key: item.key,
      data: general_purpose::STANDARD.encode(&item.data),
      expires_in: item.expires_in.as_secs(),
    };
    self
      .0
      .run_mobile_plugin_async::<IgnoredAny>("writePasteboard", args)
      .await?;
    Ok(())
  }
}

#[async_trait]
impl<R: Runtime> ShareSheet for MobileHost<R> {
  async fn present_share_sheet(
    &self,
    items: Vec<ShareItem>,
    title: Option<String>,
  ) -> Result<ShareOutcome> {
    let args = SheetArgs {
      items: items.into_iter().map(SheetItem::from).collect(),
      title,
    };
    self
      .0
      .run_mobile_plugin_async("presentShareSheet", args)
      .await
      .map_err(Into::into)
  }
}

#[async_trait]
impl<R: Runtime> CaptureSurface for MobileHost<R> {
  async fn surface_kind(&self) -> Result<SurfaceKind> {
    let response: SurfaceResponse = self.0.run_mobile_plugin_async("surfaceKind", ()).await?;
    Ok(response.kind)
  }

  async fn snapshot_web_content(&self) -> Result<Option<Vec<u8>>> {
    let response: ImageResponse = self
      .0
      .run_mobile_plugin_async("snapshotWebView", ())
      .await?;
    response.image.as_deref().map(decode_native_image).transpose()
  }

  async fn rasterize_view(&self) -> Result<Vec<u8>> {
    let response: ImageResponse = self.0.run_mobile_plugin_async("rasterizeView", ()).await?;
    let image = response.image.ok_or(Error::CaptureUnavailable)?;
    decode_native_image(&image)
  }
}

#[async_trait]
impl<R: Runtime> PhotoLibrary for MobileHost<R> {
  async fn request_photo_access(&self) -> Result<PhotoAccess> {
    let response: AccessResponse = self
      .0
      .run_mobile_plugin_async("requestPhotoAccess", ())
      .await?;
    Ok(response.status)
  }

  async fn save_image(&self, png: Vec<u8>, album: &str) -> Result<Option<String>> {
    let args = SaveArgs {
      image: general_purpose::STANDARD.encode(png),
      album,
    };
    let response: SaveResponse = self
      .0
      .run_mobile_plugin_async("saveImage", args)
      .await
      .map_err(|e| Error::StorageWriteFailed(e.to_string()))?;
    Ok(response.path)
  }
}
