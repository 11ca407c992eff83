//! Turns a [`ShareRequest`] into the URL (and pasteboard content) a target app expects.
//!
//! Each target's builder is registered in [`crate::target`]; [`translate`] only looks
//! the builder up. Builders never fail: missing text is the empty string and a missing
//! or undecodable image just means the image-less form of the protocol.

use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::{Config, TwitterScheme};
use crate::models::ShareRequest;
use crate::target::ShareTarget;

/// Everything outside the RFC 3986 unreserved set is escaped, so `&`, `=`, `+` and `#`
/// in user text cannot break out of the query value.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const INSTAGRAM_BACKGROUND_KEY: &str = "com.instagram.sharedSticker.backgroundImage";

/// Options that shape translation and come from the plugin config.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub twitter_order: Vec<TwitterScheme>,
    pub pasteboard_expiration: Duration,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions::from(&Config::default())
    }
}

impl From<&Config> for TranslateOptions {
    fn from(config: &Config) -> Self {
        Self {
            twitter_order: config.twitter_order().to_vec(),
            pasteboard_expiration: Duration::from_secs(config.pasteboard_expiration_secs),
        }
    }
}

/// Content placed on the shared pasteboard before a deep link is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteboardItem {
    pub key: &'static str,
    pub data: Vec<u8>,
    pub expires_in: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatedPayload {
    /// A single URL to open.
    Url(String),
    /// URLs to try in order; the first one that opens wins.
    Fallback(Vec<String>),
    /// Write `item` to the pasteboard, then open `url`.
    Pasteboard { item: PasteboardItem, url: String },
}

impl TranslatedPayload {
    /// The URLs the dispatcher may open, in attempt order.
    pub fn urls(&self) -> Vec<&str> {
        match self {
            TranslatedPayload::Url(url) => vec![url.as_str()],
            TranslatedPayload::Fallback(urls) => urls.iter().map(String::as_str).collect(),
            TranslatedPayload::Pasteboard { url, .. } => vec![url.as_str()],
        }
    }

    pub fn pasteboard(&self) -> Option<&PasteboardItem> {
        match self {
            TranslatedPayload::Pasteboard { item, .. } => Some(item),
            _ => None,
        }
    }
}

pub fn translate(
    target: ShareTarget,
    request: &ShareRequest,
    options: &TranslateOptions,
) -> TranslatedPayload {
    (target.protocol().build)(request, options)
}

/// Percent-encodes free text for use inside a query component.
pub fn encode(text: &str) -> String {
    utf8_percent_encode(text, QUERY_VALUE).to_string()
}

fn text_of(request: &ShareRequest) -> &str {
    request.text.as_deref().unwrap_or_default()
}

/// Encoded text, followed by `%20<encoded url>` when a url is present.
fn text_with_url(request: &ShareRequest) -> String {
    let mut out = encode(text_of(request));
    if let Some(url) = &request.url {
        out.push_str("%20");
        out.push_str(&encode(url));
    }
    out
}

pub(crate) fn whatsapp(request: &ShareRequest, _: &TranslateOptions) -> TranslatedPayload {
    let mut url = String::from("whatsapp://send?");
    if let Some(phone) = &request.phone_number {
        url.push_str("phone=");
        url.push_str(&encode(phone));
        url.push('&');
    }
    url.push_str("text=");
    url.push_str(&text_with_url(request));
    TranslatedPayload::Url(url)
}

pub(crate) fn telegram(request: &ShareRequest, _: &TranslateOptions) -> TranslatedPayload {
    TranslatedPayload::Url(format!("tg://msg?text={}", text_with_url(request)))
}

pub(crate) fn instagram(request: &ShareRequest, options: &TranslateOptions) -> TranslatedPayload {
    let image = request
        .image
        .as_deref()
        .filter(|data| !data.is_empty())
        .and_then(|data| general_purpose::STANDARD.decode(data).ok());

    match image {
        Some(data) => TranslatedPayload::Pasteboard {
            item: PasteboardItem {
                key: INSTAGRAM_BACKGROUND_KEY,
                data,
                expires_in: options.pasteboard_expiration,
            },
            url: "instagram-stories://share".to_string(),
        },
        None => TranslatedPayload::Url("instagram://app".to_string()),
    }
}

pub(crate) fn facebook(request: &ShareRequest, _: &TranslateOptions) -> TranslatedPayload {
    match &request.url {
        Some(url) => TranslatedPayload::Url(format!("fb://share?link={}", encode(url))),
        None => TranslatedPayload::Url("fb://".to_string()),
    }
}

pub(crate) fn twitter(request: &ShareRequest, options: &TranslateOptions) -> TranslatedPayload {
    let mut order: Vec<TwitterScheme> = Vec::with_capacity(options.twitter_order.len());
    for scheme in &options.twitter_order {
        if !order.contains(scheme) {
            order.push(*scheme);
        }
    }
    let urls = order
        .into_iter()
        .map(|scheme| match scheme {
            // The x:// composer only takes the text.
            TwitterScheme::X => format!("x://post?text={}", encode(text_of(request))),
            TwitterScheme::Twitter => {
                format!("twitter://post?message={}", text_with_url(request))
            }
        })
        .collect();
    TranslatedPayload::Fallback(urls)
}

pub(crate) fn email(request: &ShareRequest, _: &TranslateOptions) -> TranslatedPayload {
    TranslatedPayload::Url(format!("mailto:?body={}", text_with_url(request)))
}

pub(crate) fn sms(request: &ShareRequest, _: &TranslateOptions) -> TranslatedPayload {
    // The number sits in the path, so only dial characters are kept.
    let phone: String = request
        .phone_number
        .as_deref()
        .unwrap_or_default()
        .chars()
        .filter(|c| *c == '+' || c.is_ascii_digit())
        .collect();
    TranslatedPayload::Url(format!("sms:{}&body={}", phone, encode(text_of(request))))
}
