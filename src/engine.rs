use crate::capability::Host;
use crate::config::Config;
use crate::models::{
    AvailableApps, DispatchOutcome, PersistOutcome, ScreenshotOptions, ScreenshotOutcome,
    ShareOutcome, ShareRequest, ShareToAppRequest,
};
use crate::translate::TranslateOptions;
use crate::{capture, dispatch, gallery, probe, sheet, Result};

/// The share APIs, backed by a platform [`Host`].
///
/// Each method is one self-contained operation: it resolves exactly once, after the
/// native action it waits on has finished. Operations share no mutable state, so
/// they can run concurrently.
pub struct ShareEngine<H> {
    host: H,
    config: Config,
    translate: TranslateOptions,
}

impl<H: Host> ShareEngine<H> {
    pub fn new(host: H, config: Config) -> Self {
        let translate = TranslateOptions::from(&config);
        Self {
            host,
            config,
            translate,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Opens the native share sheet and lets the user pick the app.
    pub async fn share(&self, request: ShareRequest) -> Result<ShareOutcome> {
        sheet::share(&self.host, &request).await
    }

    /// Sends the content directly to one app through its URL scheme.
    pub async fn share_to_app(&self, request: ShareToAppRequest) -> Result<DispatchOutcome> {
        dispatch::dispatch(&self.host, &self.translate, &request.app, &request.request).await
    }

    pub async fn get_available_apps(&self) -> AvailableApps {
        probe::probe_all(&self.host).await
    }

    pub async fn share_screenshot(&self, options: ScreenshotOptions) -> Result<ScreenshotOutcome> {
        capture::share_screenshot(&self.host, options).await
    }

    pub async fn save_to_gallery(&self, base64: &str) -> Result<PersistOutcome> {
        gallery::save_to_gallery(&self.host, &self.config.gallery_album, base64).await
    }
}
