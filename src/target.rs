use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ShareRequest;
use crate::translate::{self, TranslateOptions, TranslatedPayload};
use crate::Error;

/// An external app or protocol that content can be sent to directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    Whatsapp,
    Telegram,
    Instagram,
    Facebook,
    Twitter,
    Email,
    Sms,
}

/// How a target accepts an image, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    Url,
    Pasteboard,
    None,
}

/// Static protocol knowledge about one [`ShareTarget`].
pub struct TargetProtocol {
    /// Schemes used only to ask whether a handler is installed.
    pub probe_schemes: &'static [&'static str],
    pub image_mode: ImageMode,
    pub build: fn(&ShareRequest, &TranslateOptions) -> TranslatedPayload,
}

static WHATSAPP: TargetProtocol = TargetProtocol {
    probe_schemes: &["whatsapp://"],
    image_mode: ImageMode::None,
    build: translate::whatsapp,
};

static TELEGRAM: TargetProtocol = TargetProtocol {
    probe_schemes: &["tg://"],
    image_mode: ImageMode::None,
    build: translate::telegram,
};

static INSTAGRAM: TargetProtocol = TargetProtocol {
    probe_schemes: &["instagram://"],
    image_mode: ImageMode::Pasteboard,
    build: translate::instagram,
};

static FACEBOOK: TargetProtocol = TargetProtocol {
    probe_schemes: &["fb://"],
    image_mode: ImageMode::None,
    build: translate::facebook,
};

// Legacy client first, rebranded client second. Either one counts as installed.
static TWITTER: TargetProtocol = TargetProtocol {
    probe_schemes: &["twitter://", "x://"],
    image_mode: ImageMode::None,
    build: translate::twitter,
};

static EMAIL: TargetProtocol = TargetProtocol {
    probe_schemes: &["mailto:"],
    image_mode: ImageMode::None,
    build: translate::email,
};

static SMS: TargetProtocol = TargetProtocol {
    probe_schemes: &["sms:"],
    image_mode: ImageMode::None,
    build: translate::sms,
};

impl ShareTarget {
    pub const ALL: [ShareTarget; 7] = [
        ShareTarget::Whatsapp,
        ShareTarget::Telegram,
        ShareTarget::Instagram,
        ShareTarget::Facebook,
        ShareTarget::Twitter,
        ShareTarget::Email,
        ShareTarget::Sms,
    ];

    pub fn protocol(self) -> &'static TargetProtocol {
        match self {
            ShareTarget::Whatsapp => &WHATSAPP,
            ShareTarget::Telegram => &TELEGRAM,
            ShareTarget::Instagram => &INSTAGRAM,
            ShareTarget::Facebook => &FACEBOOK,
            ShareTarget::Twitter => &TWITTER,
            ShareTarget::Email => &EMAIL,
            ShareTarget::Sms => &SMS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShareTarget::Whatsapp => "whatsapp",
            ShareTarget::Telegram => "telegram",
            ShareTarget::Instagram => "instagram",
            ShareTarget::Facebook => "facebook",
            ShareTarget::Twitter => "twitter",
            ShareTarget::Email => "email",
            ShareTarget::Sms => "sms",
        }
    }

    pub fn probe_schemes(self) -> &'static [&'static str] {
        self.protocol().probe_schemes
    }

    pub fn image_mode(self) -> ImageMode {
        self.protocol().image_mode
    }
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShareTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShareTarget::ALL
            .into_iter()
            .find(|target| target.name() == s)
            .ok_or_else(|| Error::UnsupportedTarget(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn names_parse_back_to_their_target() {
        for target in ShareTarget::ALL {
            assert_eq!(target.name().parse::<ShareTarget>().unwrap(), target);
        }
    }

    #[test]
    fn unknown_name_is_unsupported_and_named() {
        let err = "myspace".parse::<ShareTarget>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedTarget);
        assert!(err.to_string().contains("myspace"));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("WhatsApp".parse::<ShareTarget>().is_err());
    }

    #[test]
    fn only_instagram_takes_images() {
        for target in ShareTarget::ALL {
            let expected = if target == ShareTarget::Instagram {
                ImageMode::Pasteboard
            } else {
                ImageMode::None
            };
            assert_eq!(target.image_mode(), expected, "{target}");
        }
    }

    #[test]
    fn twitter_probes_both_clients() {
        assert_eq!(ShareTarget::Twitter.probe_schemes(), &["twitter://", "x://"]);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ShareTarget::Whatsapp).unwrap();
        assert_eq!(json, "\"whatsapp\"");
    }
}
