use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::target::ShareTarget;

/// Content to share. Every field is optional; what is required depends on the flow.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub text: Option<String>,
    pub url: Option<String>,
    /// Base64 encoded image.
    pub image: Option<String>,
    pub phone_number: Option<String>,
    /// Passed through to the share sheet.
    pub title: Option<String>,
}

/// A [`ShareRequest`] aimed at one specific app.
///
/// `app` stays a plain string so an unknown name reaches the dispatcher and is
/// reported by name instead of failing argument deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareToAppRequest {
    pub app: String,
    #[serde(flatten)]
    pub request: ShareRequest,
}

/// Result of the generic share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareOutcome {
    pub completed: bool,
    /// Identifier of the app the user picked, when the OS reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
}

/// Result of a successful direct-to-app dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    pub completed: bool,
    pub app: ShareTarget,
}

/// Which targets have a registered handler on this device.
pub type AvailableApps = BTreeMap<ShareTarget, bool>;

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotOptions {
    #[serde(default)]
    pub share: bool,
    #[serde(default = "default_return_base64")]
    pub return_base64: bool,
}

fn default_return_base64() -> bool {
    true
}

impl Default for ScreenshotOptions {
    fn default() -> Self {
        Self {
            share: false,
            return_base64: default_return_base64(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotOutcome {
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
}

/// Result of a successful gallery save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistOutcome {
    pub saved: bool,
    /// Where the host stored the image, if it reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_to_app_request_reads_flat_fields() {
        let req: ShareToAppRequest = serde_json::from_str(
            r#"{"app":"whatsapp","text":"hi","phoneNumber":"5551234"}"#,
        )
        .unwrap();
        assert_eq!(req.app, "whatsapp");
        assert_eq!(req.request.text.as_deref(), Some("hi"));
        assert_eq!(req.request.phone_number.as_deref(), Some("5551234"));
        assert!(req.request.url.is_none());
    }

    #[test]
    fn screenshot_options_default_to_returning_base64_without_sharing() {
        let opts: ScreenshotOptions = serde_json::from_str("{}").unwrap();
        assert!(!opts.share);
        assert!(opts.return_base64);
    }

    #[test]
    fn available_apps_serialize_by_name() {
        let apps: AvailableApps = ShareTarget::ALL.into_iter().map(|t| (t, false)).collect();
        let value = serde_json::to_value(&apps).unwrap();
        assert_eq!(value["twitter"], serde_json::Value::Bool(false));
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn share_outcome_omits_missing_app() {
        let json = serde_json::to_string(&ShareOutcome { completed: false, app: None }).unwrap();
        assert_eq!(json, r#"{"completed":false}"#);
    }
}
