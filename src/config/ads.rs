//! `[ads]` section configuration.
//!
//! One table per provider plus global display settings. Providers are
//! consulted in a fixed order by [`crate::ads::ad_for_slot`]; the table
//! order in the file does not matter.
//!
//! # Example
//!
//! ```toml
//! [ads.adsense]
//! enabled = true
//! publisher_id = "ca-pub-5573623649456971"
//!
//! [ads.medianet]
//! enabled = false
//! site_id = "YOUR_SITE_ID"
//! slots = { header = "h", sidebar = "s", content = "c", footer = "f" }
//!
//! [ads.settings]
//! show_in_development = false
//! ```

use super::defaults;
use crate::ads::AdSlot;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// One value per ad slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotMap<T> {
    pub header: T,
    pub sidebar: T,
    pub content: T,
    pub footer: T,
}

impl<T: Clone> SlotMap<T> {
    /// Same value in every slot.
    pub fn filled(value: T) -> Self {
        Self {
            header: value.clone(),
            sidebar: value.clone(),
            content: value.clone(),
            footer: value,
        }
    }
}

impl<T> SlotMap<T> {
    pub const fn get(&self, slot: AdSlot) -> &T {
        match slot {
            AdSlot::Header => &self.header,
            AdSlot::Sidebar => &self.sidebar,
            AdSlot::Content => &self.content,
            AdSlot::Footer => &self.footer,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdsConfig {
    #[serde(default)]
    pub adsense: AdsenseConfig,
    #[serde(default)]
    pub medianet: MedianetConfig,
    #[serde(default)]
    pub propellerads: PropellerAdsConfig,
    #[serde(default)]
    pub custom: CustomAdsConfig,
    #[serde(default)]
    pub settings: AdSettings,
}

impl AdsConfig {
    pub const fn any_enabled(&self) -> bool {
        self.adsense.enabled
            || self.medianet.enabled
            || self.propellerads.enabled
            || self.custom.enabled
    }
}

/// Google AdSense.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AdsenseConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub publisher_id: String,

    /// Ad unit ids; `auto` lets AdSense pick adaptive units.
    #[serde(default = "defaults::ads::adsense_slots")]
    #[educe(Default = defaults::ads::adsense_slots())]
    pub slots: SlotMap<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MedianetConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub site_id: String,
    #[serde(default)]
    pub slots: SlotMap<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropellerAdsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub zone_ids: SlotMap<String>,
}

/// Directly sold or self-hosted ads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomAdsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub ads: SlotMap<CustomAd>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomAd {
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub script: String,
}

/// `[ads.settings]` - global display rules.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AdSettings {
    /// Show ads when running in a development context.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub show_in_development: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub lazy_load: bool,

    /// Hide ads for visitors sending a Do Not Track signal.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub respect_do_not_track: bool,

    /// Ads wait for a GDPR consent signal before loading.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub consent_required: bool,
}
