use log::{debug, warn};
use url::Url;

use crate::capability::{ShareItem, ShareSheet};
use crate::imaging::decode_base64_image;
use crate::models::{ShareOutcome, ShareRequest};
use crate::{Error, Result};

/// Builds the ordered item list for the share sheet: text, then url, then image.
///
/// Empty strings count as absent. A url that does not parse as an absolute URL, such
/// as `www.example.com`, is shared as plain text. An image that does not decode is
/// dropped.
pub fn share_items(request: &ShareRequest) -> Vec<ShareItem> {
    let mut items = Vec::with_capacity(3);

    if let Some(text) = request.text.as_deref().filter(|t| !t.is_empty()) {
        items.push(ShareItem::Text(text.to_string()));
    }

    if let Some(url) = request.url.as_deref().filter(|u| !u.is_empty()) {
        match Url::parse(url) {
            Ok(_) => items.push(ShareItem::Url(url.to_string())),
            Err(e) => {
                debug!("sharing url {url:?} as text: {e}");
                items.push(ShareItem::Text(url.to_string()));
            }
        }
    }

    if let Some(image) = request.image.as_deref().filter(|i| !i.is_empty()) {
        match decode_base64_image(image) {
            Some((bytes, _)) => items.push(ShareItem::Image(bytes)),
            None => warn!("dropping image that is not valid base64 image data"),
        }
    }

    items
}

/// Presents the native chooser for `request`. Nothing is presented if there is no
/// content to share.
pub async fn share<S: ShareSheet + ?Sized>(
    sheet: &S,
    request: &ShareRequest,
) -> Result<ShareOutcome> {
    let items = share_items(request);
    if items.is_empty() {
        return Err(Error::NoContent);
    }
    sheet.present_share_sheet(items, request.title.clone()).await
}
