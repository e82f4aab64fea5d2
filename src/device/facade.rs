//! Device facade: the capability surface the reconciler drives
//!
//! The embedding runtime implements [`Device`] over whatever transport it has
//! to the endpoint and hands the implementation to the reconciler. The
//! reconciler never caches answers across events; each reconciliation
//! re-derives truth from these queries.

use crate::device::types::{
    AnswerState, ConnectorId, InputSourceType, MonitorRole, PresentationMode,
    PresentationSelection, SendingMode,
};
use crate::error::Result;

/// Capability interface to the video-conferencing endpoint.
///
/// Status queries return `Ok(None)` when the referenced status does not
/// currently exist (no call, no conference, no local instance). `Err` is
/// reserved for transport-level failures; the reconciler treats both the
/// same way, as "feature/mode absent".
pub trait Device {
    /// Conference-wide presentation mode. `Ok(None)` when not in a conference.
    fn presentation_mode(&self) -> Result<Option<PresentationMode>>;

    /// Answer state of the current call. `Ok(None)` when no call exists.
    fn call_answer_state(&self) -> Result<Option<AnswerState>>;

    /// Sending mode of the local presentation instance. `Ok(None)` when none
    /// is active.
    fn local_sending_mode(&self) -> Result<Option<SendingMode>>;

    /// Number of physical video output connectors.
    fn output_connector_count(&self) -> Result<u32>;

    /// The configured default presentation source connector.
    fn default_presentation_source(&self) -> Result<ConnectorId>;

    /// Input source type of the given input connector.
    fn input_source_type(&self, connector: ConnectorId) -> Result<InputSourceType>;

    /// Set the monitor role of an output connector.
    fn set_monitor_role(&self, connector: ConnectorId, role: MonitorRole) -> Result<()>;

    /// Set the presentation-selection mode of an input connector.
    fn set_presentation_selection(
        &self,
        connector: ConnectorId,
        selection: PresentationSelection,
    ) -> Result<()>;

    /// Start a presentation preview from the given source.
    fn start_preview(&self, source: ConnectorId, mode: SendingMode) -> Result<()>;

    /// Show a timed alert on the touch panel and on-screen display.
    fn display_alert(&self, title: &str, text: &str, duration_secs: u32) -> Result<()>;

    /// Set a named widget's value.
    fn set_widget_value(&self, widget_id: &str, value: &str) -> Result<()>;

    /// Save (or replace) a declarative panel document.
    fn save_panel(&self, panel_id: &str, markup: &str) -> Result<()>;

    /// Remove a previously saved panel.
    fn remove_panel(&self, panel_id: &str) -> Result<()>;
}
