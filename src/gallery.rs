use log::{info, warn};

use crate::capability::PhotoLibrary;
use crate::imaging::{decode_base64_image, encode_png};
use crate::models::PersistOutcome;
use crate::{Error, Result};

/// Saves a base64 image to the photo library under `album`.
///
/// Input is validated before anything else happens, so an invalid image never
/// triggers a permission prompt.
pub async fn save_to_gallery<L: PhotoLibrary + ?Sized>(
    library: &L,
    album: &str,
    base64: &str,
) -> Result<PersistOutcome> {
    let (_, image) = decode_base64_image(base64).ok_or(Error::InvalidImage)?;
    let png = encode_png(&image).map_err(|_| Error::InvalidImage)?;

    let access = library.request_photo_access().await?;
    if !access.allows_write() {
        warn!("photo library access refused: {access:?}");
        return Err(Error::PermissionDenied);
    }

    match library.save_image(png, album).await {
        Ok(path) => {
            info!("image saved to {}", path.as_deref().unwrap_or(album));
            Ok(PersistOutcome { saved: true, path })
        }
        Err(e @ Error::StorageWriteFailed(_)) => Err(e),
        Err(e) => Err(Error::StorageWriteFailed(e.to_string())),
    }
}
