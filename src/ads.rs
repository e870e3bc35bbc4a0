//! Ad slot lookup.
//!
//! Providers are checked in a fixed priority order:
//!
//! ```text
//! AdSense > Media.net > PropellerAds > Custom
//! ```
//!
//! The first enabled provider serves every slot. Nothing is served in
//! development (unless `show_in_development`), to Do Not Track visitors
//! (when `respect_do_not_track`), or when no provider is enabled.

use crate::config::{CustomAd, SiteConfig};
use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The four fixed ad positions on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdSlot {
    Header,
    Sidebar,
    Content,
    Footer,
}

impl AdSlot {
    pub const ALL: [AdSlot; 4] = [Self::Header, Self::Sidebar, Self::Content, Self::Footer];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Sidebar => "sidebar",
            Self::Content => "content",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for AdSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown ad slot `{0}` (expected header, sidebar, content or footer)")]
pub struct UnknownSlot(String);

impl FromStr for AdSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UnknownSlot(s.to_owned()))
    }
}

/// Request-time signals that can suppress ads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdContext {
    /// Running in a development build.
    pub development: bool,
    /// Visitor sent `DNT: 1`.
    pub do_not_track: bool,
}

/// What to render in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum AdPlacement {
    #[serde(rename_all = "camelCase")]
    Adsense { publisher_id: String, slot_id: String },
    #[serde(rename_all = "camelCase")]
    Medianet { site_id: String, slot_id: String },
    #[serde(rename_all = "camelCase")]
    Propellerads { zone_id: String },
    Custom { config: CustomAd },
}

/// Whether any ad may be shown in this context.
pub fn should_show_ads(config: &SiteConfig, ctx: AdContext) -> bool {
    let ads = &config.ads;

    if ctx.development && !ads.settings.show_in_development {
        return false;
    }
    if ads.settings.respect_do_not_track && ctx.do_not_track {
        return false;
    }
    ads.any_enabled()
}

/// Placement for `slot` from the highest-priority enabled provider.
pub fn ad_for_slot(slot: AdSlot, config: &SiteConfig, ctx: AdContext) -> Option<AdPlacement> {
    if !should_show_ads(config, ctx) {
        return None;
    }

    let ads = &config.ads;
    if ads.adsense.enabled {
        return Some(AdPlacement::Adsense {
            publisher_id: ads.adsense.publisher_id.clone(),
            slot_id: ads.adsense.slots.get(slot).clone(),
        });
    }
    if ads.medianet.enabled {
        return Some(AdPlacement::Medianet {
            site_id: ads.medianet.site_id.clone(),
            slot_id: ads.medianet.slots.get(slot).clone(),
        });
    }
    if ads.propellerads.enabled {
        return Some(AdPlacement::Propellerads {
            zone_id: ads.propellerads.zone_ids.get(slot).clone(),
        });
    }
    if ads.custom.enabled {
        return Some(AdPlacement::Custom {
            config: ads.custom.ads.get(slot).clone(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SlotMap, tests::sample_config};
    use serde_json::json;

    fn all_enabled() -> SiteConfig {
        let mut config = sample_config();
        config.ads.adsense.enabled = true;
        config.ads.adsense.publisher_id = "ca-pub-1".into();
        config.ads.medianet.enabled = true;
        config.ads.medianet.site_id = "site-1".into();
        config.ads.medianet.slots = SlotMap::filled("mn".into());
        config.ads.propellerads.enabled = true;
        config.ads.propellerads.zone_ids = SlotMap {
            header: "zone-id-1".into(),
            sidebar: "zone-id-2".into(),
            content: "zone-id-3".into(),
            footer: "zone-id-4".into(),
        };
        config.ads.custom.enabled = true;
        config
    }

    #[test]
    fn test_slot_from_str() {
        assert_eq!("header".parse(), Ok(AdSlot::Header));
        assert_eq!("footer".parse(), Ok(AdSlot::Footer));
        assert_eq!(
            "popup".parse::<AdSlot>(),
            Err(UnknownSlot("popup".into()))
        );
        assert!("Header".parse::<AdSlot>().is_err());
    }

    #[test]
    fn test_no_provider_enabled() {
        let config = sample_config();
        assert!(!should_show_ads(&config, AdContext::default()));
        assert_eq!(ad_for_slot(AdSlot::Header, &config, AdContext::default()), None);
    }

    #[test]
    fn test_priority_order() {
        let mut config = all_enabled();
        let ctx = AdContext::default();

        assert!(matches!(
            ad_for_slot(AdSlot::Content, &config, ctx),
            Some(AdPlacement::Adsense { ref slot_id, .. }) if slot_id == "auto"
        ));

        config.ads.adsense.enabled = false;
        assert!(matches!(
            ad_for_slot(AdSlot::Content, &config, ctx),
            Some(AdPlacement::Medianet { .. })
        ));

        config.ads.medianet.enabled = false;
        assert_eq!(
            ad_for_slot(AdSlot::Sidebar, &config, ctx),
            Some(AdPlacement::Propellerads { zone_id: "zone-id-2".into() })
        );

        config.ads.propellerads.enabled = false;
        assert!(matches!(
            ad_for_slot(AdSlot::Footer, &config, ctx),
            Some(AdPlacement::Custom { .. })
        ));
    }

    #[test]
    fn test_development_suppresses_ads() {
        let mut config = all_enabled();
        let ctx = AdContext {
            development: true,
            ..AdContext::default()
        };
        assert_eq!(ad_for_slot(AdSlot::Header, &config, ctx), None);

        config.ads.settings.show_in_development = true;
        assert!(ad_for_slot(AdSlot::Header, &config, ctx).is_some());
    }

    #[test]
    fn test_do_not_track() {
        let mut config = all_enabled();
        let ctx = AdContext {
            do_not_track: true,
            ..AdContext::default()
        };
        assert_eq!(ad_for_slot(AdSlot::Header, &config, ctx), None);

        config.ads.settings.respect_do_not_track = false;
        assert!(ad_for_slot(AdSlot::Header, &config, ctx).is_some());
    }

    #[test]
    fn test_placement_json() {
        let config = all_enabled();
        let placement = ad_for_slot(AdSlot::Header, &config, AdContext::default()).unwrap();

        assert_eq!(
            serde_json::to_value(placement).unwrap(),
            json!({"platform": "adsense", "publisherId": "ca-pub-1", "slotId": "auto"})
        );
    }
}
