//! Screenshot capture: take an image of whatever surface is on screen, encode it as
//! PNG, then either hand it to the share sheet or return it to the caller.

use log::debug;

use crate::capability::{CaptureSurface, ShareItem, ShareSheet, SurfaceKind};
use crate::imaging::{encode_png, to_base64};
use crate::models::{ScreenshotOptions, ScreenshotOutcome};
use crate::{Error, Result};

/// Captures the active surface as PNG bytes.
///
/// Web content is snapshotted when present; otherwise the view tree is rasterized.
pub async fn capture<C: CaptureSurface + ?Sized>(surface: &C) -> Result<Vec<u8>> {
    let raw = match surface.surface_kind().await? {
        SurfaceKind::WebContent => {
            debug!("capturing web content snapshot");
            surface
                .snapshot_web_content()
                .await?
                .ok_or(Error::CaptureFailed)?
        }
        SurfaceKind::ViewHierarchy => {
            debug!("rasterizing view hierarchy");
            surface.rasterize_view().await?
        }
        SurfaceKind::None => return Err(Error::CaptureUnavailable),
    };

    let image = image::load_from_memory(&raw).map_err(|e| {
        debug!("captured bytes are not an image: {e}");
        Error::CaptureFailed
    })?;
    encode_png(&image).map_err(|_| Error::CaptureFailed)
}

pub async fn share_screenshot<H>(host: &H, options: ScreenshotOptions) -> Result<ScreenshotOutcome>
where
    H: CaptureSurface + ShareSheet + ?Sized,
{
    let png = capture(host).await?;
    let base64 = options.return_base64.then(|| to_base64(&png));

    if !options.share {
        return Ok(ScreenshotOutcome {
            completed: true,
            base64,
        });
    }

    let outcome = host
        .present_share_sheet(vec![ShareItem::Image(png)], None)
        .await?;
    Ok(ScreenshotOutcome {
        completed: outcome.completed,
        base64,
    })
}
