//! One-directional widget sync, store → device
//!
//! The panel is purely a mirror of internal state. There is no read-back;
//! sync failures are logged and the next sync overwrites whatever the panel
//! currently shows.

use crate::config::{Config, FeatureKey};
use crate::controller::state::ToggleState;
use crate::device::Device;
use tracing::warn;

/// Push the current toggle values to the panel widgets.
///
/// Entirely skipped when the menu is configured hidden; disabled features
/// have no widget to update.
pub fn sync_widgets<D: Device>(device: &D, config: &Config, toggles: ToggleState) {
    if !config.behaviour.show_menu {
        return;
    }
    for key in FeatureKey::ALL {
        if !config.features.get(key).enabled {
            continue;
        }
        let value = if toggles.value_of(key) { "on" } else { "off" };
        if let Err(e) = device.set_widget_value(key.as_widget_id(), value) {
            warn!("Failed to sync widget {}: {e}", key.as_widget_id());
        }
    }
}
