//! # tauri-plugin-slm-share
//!
//! A Tauri plugin to share content from a mobile app: through the native share sheet,
//! or directly to WhatsApp, Telegram, Instagram, Facebook, X/Twitter, email or SMS via
//! their URL schemes. It can also capture a screenshot of the app and save images to
//! the photo library.
//!
//! The share logic (per-app URL protocols, availability probing, fallback chains, the
//! capture pipeline and the gallery permission gate) lives in Rust. The native plugin
//! only answers small capability calls such as "can this URL be opened" or "present
//! the share sheet with these items".
//!
//! ## Usage
//!
//! ### Rust
//!
//! ```rust,ignore
//! // src/main.rs
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(tauri_plugin_slm_share::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! ### Configuration
//!
//! Optional, in `tauri.conf.json`:
//!
//! ```json
//! {
//!   "plugins": {
//!     "slm-share": {
//!       "twitterFallback": ["x", "twitter"],
//!       "pasteboardExpirationSecs": 300,
//!       "galleryAlbum": "SLM"
//!     }
//!   }
//! }
//! ```
//!
//! ### Frontend (JavaScript/TypeScript)
//!
//! ```js
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const apps = await invoke('plugin:slm-share|get_available_apps');
//! if (apps.whatsapp) {
//!   await invoke('plugin:slm-share|share_to_app', {
//!     options: { app: 'whatsapp', text: 'Hola', phoneNumber: '5551234' },
//!   });
//! }
//!
//! const { base64 } = await invoke('plugin:slm-share|share_screenshot', {
//!   options: { share: false, returnBase64: true },
//! });
//! await invoke('plugin:slm-share|save_to_gallery', { base64 });
//! ```
//!
//! ## Native side
//!
//! This crate does not ship the Swift and Kotlin halves. A mobile build expects a
//! native plugin class `SlmSharePlugin` in the `android/` and `ios/` directories that
//! `build.rs` points at. On Android it is registered as `plugin.slm.share`. On iOS it
//! must export `init_plugin_slm_share`. Without them the mobile build fails at link
//! or registration time.
//!
//! The native plugin answers these commands, each a thin wrapper over a platform API.
//! Images travel as base64 strings, and share items as `{ type, value }`:
//!
//! | Command | Arguments | Response |
//! |---|---|---|
//! | `canOpenUrl` | `{ url }` | `{ value: bool }` |
//! | `openUrl` | `{ url }` | `{ value: bool }` |
//! | `writePasteboard` | `{ key, data, expiresIn }` | empty |
//! | `presentShareSheet` | `{ items, title? }` | `{ completed, app? }` |
//! | `surfaceKind` | none | `{ kind: "webContent" \| "viewHierarchy" \| "none" }` |
//! | `snapshotWebView` | none | `{ image? }` |
//! | `rasterizeView` | none | `{ image? }` |
//! | `requestPhotoAccess` | none | `{ status }` |
//! | `saveImage` | `{ image, album }` | `{ path? }` |

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use capability::{
    CaptureSurface, Host, PasteboardWriter, PhotoAccess, PhotoLibrary, SchemeOpener, ShareItem,
    ShareSheet, SurfaceKind,
};
pub use config::{Config, TwitterScheme};
pub use engine::ShareEngine;
pub use error::{Error, ErrorKind, Result};
pub use models::*;
pub use target::{ImageMode, ShareTarget, TargetProtocol};
pub use translate::{translate, PasteboardItem, TranslateOptions, TranslatedPayload};

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod capability;
mod capture;
mod commands;
mod config;
mod dispatch;
mod engine;
mod error;
mod gallery;
mod imaging;
mod models;
mod probe;
mod sheet;
mod target;
mod translate;

#[cfg(test)]
mod fakes;

#[cfg(desktop)]
pub use desktop::{DesktopHost, Share};
#[cfg(mobile)]
pub use mobile::{MobileHost, Share};

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the
/// share APIs.
pub trait ShareExt<R: Runtime> {
    fn share(&self) -> &Share<R>;
}

impl<R: Runtime, T: Manager<R>> crate::ShareExt<R> for T {
    fn share(&self) -> &Share<R> {
        self.state::<Share<R>>().inner()
    }
}

/// Initializes the plugin.
///
/// Reads the optional `slm-share` plugin config, registers the commands and places
/// the share engine in managed state.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new("slm-share")
        .invoke_handler(tauri::generate_handler![
            commands::share,
            commands::share_to_app,
            commands::get_available_apps,
            commands::share_screenshot,
            commands::save_to_gallery,
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            #[cfg(mobile)]
            let share = mobile::init(app, api, config)?;
            #[cfg(desktop)]
            let share = desktop::init(app, api, config)?;
            app.manage(share);
            Ok(())
        })
        .build()
}
