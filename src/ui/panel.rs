//! Touch-panel document generation
//!
//! Markup generation is a pure function from the configuration to the panel
//! document; only [`install_panel`] touches the device. The panel shows one
//! toggle row per enabled feature and is removed entirely when the menu is
//! configured hidden.

use crate::config::{Config, FeatureKey};
use crate::device::Device;
use crate::error::Result;
use std::fmt::Write as _;

/// Panel id under which the menu is saved on the endpoint.
pub const PANEL_ID: &str = "presentation_mode_controls";

/// Build the declarative panel document for the enabled features.
pub fn build_panel(config: &Config) -> String {
    let mut rows = String::new();
    for key in FeatureKey::ALL {
        let feature = config.features.get(key);
        if !feature.enabled {
            continue;
        }
        // write! to a String is infallible
        let _ = write!(
            rows,
            "
      <Row>
        <Name>{}</Name>
        <Widget>
          <WidgetId>{}</WidgetId>
          <Type>ToggleButton</Type>
          <Options>size=1</Options>
        </Widget>
      </Row>",
            feature.display_name,
            key.as_widget_id()
        );
    }

    format!(
        "<Extensions>
  <Version>1.8</Version>
  <Panel>
    <Order>1</Order>
    <PanelId>{PANEL_ID}</PanelId>
    <Location>HomeScreenAndCallControls</Location>
    <Icon>Sliders</Icon>
    <Color>#CF7900</Color>
    <Name>{name}</Name>
    <ActivityType>Custom</ActivityType>
    <Page>
      <Name>{name}</Name>{rows}
      <Options/>
    </Page>
  </Panel>
</Extensions>",
        name = config.name,
    )
}

/// Save the panel, or remove it when the menu is configured hidden.
pub fn install_panel<D: Device>(device: &D, config: &Config) -> Result<()> {
    if !config.behaviour.show_menu {
        return device.remove_panel(PANEL_ID);
    }
    device.save_panel(PANEL_ID, &build_panel(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeDevice;

    #[test]
    fn test_panel_contains_only_enabled_features() {
        let mut config = Config::default();
        config.features.triple_pres.enabled = false;

        let markup = build_panel(&config);

        assert!(markup.contains("<WidgetId>autoPreview</WidgetId>"));
        assert!(markup.contains("<WidgetId>dualPres</WidgetId>"));
        assert!(markup.contains("Dual Presentation"));
        assert!(!markup.contains("triplePres"));
    }

    #[test]
    fn test_panel_carries_configured_name() {
        let mut config = Config::default();
        config.name = "Boardroom Controls".to_string();

        let markup = build_panel(&config);

        assert!(markup.contains("<Name>Boardroom Controls</Name>"));
        assert!(markup.contains(&format!("<PanelId>{PANEL_ID}</PanelId>")));
    }

    #[test]
    fn test_install_saves_panel() {
        let device = FakeDevice::new(2);
        install_panel(&device, &Config::default()).unwrap();

        assert_eq!(device.saved_panels().len(), 1);
        assert!(device.removed_panels().is_empty());
    }

    #[test]
    fn test_install_removes_panel_when_menu_hidden() {
        let device = FakeDevice::new(2);
        let mut config = Config::default();
        config.behaviour.show_menu = false;

        install_panel(&device, &config).unwrap();

        assert!(device.saved_panels().is_empty());
        assert_eq!(device.removed_panels(), vec![PANEL_ID.to_string()]);
    }
}
