use log::{debug, info, warn};
use url::Url;

use crate::capability::{PasteboardWriter, SchemeOpener};
use crate::models::{DispatchOutcome, ShareRequest};
use crate::target::ShareTarget;
use crate::translate::{translate, TranslateOptions};
use crate::{Error, Result};

/// Sends `request` straight to the app named `app`.
///
/// The only completion signal is the host accepting the open request; nothing
/// confirms that the target app did anything with the content.
pub async fn dispatch<H>(
    host: &H,
    options: &TranslateOptions,
    app: &str,
    request: &ShareRequest,
) -> Result<DispatchOutcome>
where
    H: SchemeOpener + PasteboardWriter + ?Sized,
{
    let target: ShareTarget = app.parse()?;
    let payload = translate(target, request, options);

    if let Some(item) = payload.pasteboard() {
        if let Err(e) = host.write_pasteboard(item).await {
            warn!("{target}: pasteboard write failed: {e}");
            return Err(Error::AppUnavailable(target));
        }
    }

    for url in payload.urls() {
        debug!("{target}: opening {url}");
        if open(host, url).await {
            info!("shared to {target}");
            return Ok(DispatchOutcome {
                completed: true,
                app: target,
            });
        }
    }

    Err(Error::AppUnavailable(target))
}

async fn open<O: SchemeOpener + ?Sized>(opener: &O, url: &str) -> bool {
    if Url::parse(url).is_err() {
        debug!("refusing to open malformed url {url:?}");
        return false;
    }
    opener.open_url(url).await
}
