use log::debug;
use url::Url;

use crate::capability::SchemeOpener;
use crate::models::AvailableApps;
use crate::target::ShareTarget;

/// Whether a handler is registered for `scheme`. Malformed schemes are `false`
/// without asking the host.
pub async fn can_open<O: SchemeOpener + ?Sized>(opener: &O, scheme: &str) -> bool {
    if Url::parse(scheme).is_err() {
        debug!("not probing malformed scheme {scheme:?}");
        return false;
    }
    opener.can_open_url(scheme).await
}

/// A target is available if any of its probe schemes has a handler.
pub async fn is_available<O: SchemeOpener + ?Sized>(opener: &O, target: ShareTarget) -> bool {
    for scheme in target.probe_schemes() {
        if can_open(opener, scheme).await {
            return true;
        }
    }
    false
}

pub async fn probe_all<O: SchemeOpener + ?Sized>(opener: &O) -> AvailableApps {
    let mut apps = AvailableApps::new();
    for target in ShareTarget::ALL {
        apps.insert(target, is_available(opener, target).await);
    }
    apps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeHost;
    use futures::executor::block_on;

    #[test]
    fn malformed_scheme_is_false_and_never_reaches_the_host() {
        let host = FakeHost::new().with_installed(&["whatsapp"]);
        assert!(!block_on(can_open(&host, "not a scheme")));
        assert!(host.probes.lock().unwrap().is_empty());
    }

    #[test]
    fn probing_never_opens() {
        let host = FakeHost::new().with_installed(&["whatsapp", "tg", "mailto"]);
        block_on(probe_all(&host));
        assert!(host.opened().is_empty());
    }

    #[test]
    fn twitter_is_available_if_either_client_is() {
        for (installed, expected) in [
            (&[][..], false),
            (&["twitter"][..], true),
            (&["x"][..], true),
            (&["twitter", "x"][..], true),
        ] {
            let host = FakeHost::new().with_installed(installed);
            let apps = block_on(probe_all(&host));
            assert_eq!(apps[&ShareTarget::Twitter], expected, "{installed:?}");
        }
    }

    #[test]
    fn reports_every_target() {
        let host = FakeHost::new().with_installed(&["whatsapp", "fb", "sms"]);
        let apps = block_on(probe_all(&host));
        assert_eq!(apps.len(), ShareTarget::ALL.len());
        assert!(apps[&ShareTarget::Whatsapp]);
        assert!(apps[&ShareTarget::Facebook]);
        assert!(apps[&ShareTarget::Sms]);
        assert!(!apps[&ShareTarget::Telegram]);
        assert!(!apps[&ShareTarget::Instagram]);
        assert!(!apps[&ShareTarget::Email]);
    }

    #[test]
    fn probing_twice_gives_the_same_answer() {
        let host = FakeHost::new().with_installed(&["tg", "x", "mailto"]);
        assert_eq!(block_on(probe_all(&host)), block_on(probe_all(&host)));
    }
}
