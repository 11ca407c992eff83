use tauri::{command, AppHandle, Runtime};

use crate::{models, Result, ShareExt};

#[command]
pub async fn share<R: Runtime>(
    app: AppHandle<R>,
    options: models::ShareRequest,
) -> Result<models::ShareOutcome> {
    app.share().share(options).await
}

#[command]
pub async fn share_to_app<R: Runtime>(
    app: AppHandle<R>,
    options: models::ShareToAppRequest,
) -> Result<models::DispatchOutcome> {
    app.share().share_to_app(options).await
}

#[command]
pub async fn get_available_apps<R: Runtime>(app: AppHandle<R>) -> Result<models::AvailableApps> {
    Ok(app.share().get_available_apps().await)
}

#[command]
pub async fn share_screenshot<R: Runtime>(
    app: AppHandle<R>,
    options: Option<models::ScreenshotOptions>,
) -> Result<models::ScreenshotOutcome> {
    app.share()
        .share_screenshot(options.unwrap_or_default())
        .await
}

#[command]
pub async fn save_to_gallery<R: Runtime>(
    app: AppHandle<R>,
    base64: String,
) -> Result<models::PersistOutcome> {
    app.share().save_to_gallery(&base64).await
}
