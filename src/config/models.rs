//! Configuration data models
//!
//! This module defines the data structures for the static service
//! configuration. Defaults mirror a typical dual-display deployment: preview
//! features on, presentation layouts available but off.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Keys identifying the four user-facing feature toggles.
///
/// The serialized form doubles as the widget id on the touch panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKey {
    /// Auto-preview new video signals while in a call
    AutoPreview,
    /// Restore local preview stopped by conference entry
    LocalRestore,
    /// Dedicate the second and third displays to presentation content
    DualPres,
    /// Dedicate the fourth connector as well (three-display systems)
    TriplePres,
}

impl FeatureKey {
    /// All feature keys, in panel display order.
    pub const ALL: [FeatureKey; 4] = [
        FeatureKey::AutoPreview,
        FeatureKey::LocalRestore,
        FeatureKey::DualPres,
        FeatureKey::TriplePres,
    ];

    /// The widget id this feature's toggle uses on the panel.
    pub fn as_widget_id(self) -> &'static str {
        match self {
            FeatureKey::AutoPreview => "autoPreview",
            FeatureKey::LocalRestore => "localRestore",
            FeatureKey::DualPres => "dualPres",
            FeatureKey::TriplePres => "triplePres",
        }
    }

    /// Resolve a widget id back to its feature key.
    pub fn from_widget_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_widget_id() == id)
    }
}

/// A single configurable feature toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureToggle {
    /// Whether the feature is available at all
    pub enabled: bool,
    /// Value applied at startup and on default reapplication
    pub initial: bool,
    /// Name shown on the touch panel row
    pub display_name: String,
}

impl FeatureToggle {
    fn new(enabled: bool, initial: bool, display_name: &str) -> Self {
        Self {
            enabled,
            initial,
            display_name: display_name.to_string(),
        }
    }
}

/// The four feature toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Features {
    /// Auto-preview toggle
    pub auto_preview: FeatureToggle,
    /// Local-restore toggle
    pub local_restore: FeatureToggle,
    /// Dual presentation layout toggle
    pub dual_pres: FeatureToggle,
    /// Triple presentation layout toggle
    pub triple_pres: FeatureToggle,
}

impl Features {
    /// Look up a feature by key.
    pub fn get(&self, key: FeatureKey) -> &FeatureToggle {
        match key {
            FeatureKey::AutoPreview => &self.auto_preview,
            FeatureKey::LocalRestore => &self.local_restore,
            FeatureKey::DualPres => &self.dual_pres,
            FeatureKey::TriplePres => &self.triple_pres,
        }
    }
}

/// Global behaviour flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Behaviour {
    /// Show the panel and its feature toggles
    pub show_menu: bool,
    /// Show alerts when the service changes device state
    pub show_notifications: bool,
    /// Reapply initial values when a call disconnects
    pub reapply_defaults: bool,
}

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the panel and alert title
    pub name: String,
    /// Feature toggles
    pub features: Features,
    /// Behaviour flags
    pub behaviour: Behaviour,
}

impl Config {
    /// Parse a configuration document embedded at compile time.
    ///
    /// Intended for `Config::from_json_str(include_str!("config.json"))`;
    /// there is no runtime file loading.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            auto_preview: FeatureToggle::new(true, true, "Auto Preview"),
            local_restore: FeatureToggle::new(true, true, "Local Restore"),
            dual_pres: FeatureToggle::new(true, false, "Dual Presentation"),
            triple_pres: FeatureToggle::new(true, false, "Triple Presentation"),
        }
    }
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            show_menu: true,
            show_notifications: true,
            reapply_defaults: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "Presentation Controls".to_string(),
            features: Features::default(),
            behaviour: Behaviour::default(),
        }
    }
}
