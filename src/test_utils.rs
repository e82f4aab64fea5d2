//! Shared test utilities for `presmode` unit tests.
//!
//! This module provides the scripted device double used across test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::device::Device;
use crate::device::types::{
    AnswerState, ConnectorId, InputSourceType, MonitorRole, PresentationMode,
    PresentationSelection, SendingMode,
};
use crate::error::{PresModeError, Result, StringError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Scripted device double: status queries answer from preset state, every
/// write is recorded. Clones share the same underlying state, so a test can
/// hand one clone to the reconciler and inspect the other.
#[derive(Clone)]
pub struct FakeDevice {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    // Scripted answers
    presentation_mode: Option<PresentationMode>,
    answer_state: Option<AnswerState>,
    local_sending: Option<SendingMode>,
    connector_count: u32,
    default_source: ConnectorId,
    source_types: HashMap<ConnectorId, InputSourceType>,
    fail_status_queries: bool,
    // Recorded effects
    roles: Vec<(ConnectorId, MonitorRole)>,
    selections: Vec<(ConnectorId, PresentationSelection)>,
    previews: Vec<(ConnectorId, SendingMode)>,
    alerts: Vec<String>,
    widgets: HashMap<String, String>,
    saved_panels: Vec<String>,
    removed_panels: Vec<String>,
}

impl FakeDevice {
    /// A device with the given number of display outputs, a desktop source
    /// on connector 1 as the default presentation source, and no call or
    /// presentation in progress.
    pub fn new(displays: u32) -> Self {
        let mut source_types = HashMap::new();
        source_types.insert(ConnectorId(1), InputSourceType::Desktop);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                presentation_mode: None,
                answer_state: None,
                local_sending: None,
                connector_count: displays,
                default_source: ConnectorId(1),
                source_types,
                fail_status_queries: false,
                roles: Vec::new(),
                selections: Vec::new(),
                previews: Vec::new(),
                alerts: Vec::new(),
                widgets: HashMap::new(),
                saved_panels: Vec::new(),
                removed_panels: Vec::new(),
            })),
        }
    }

    pub fn set_presentation_mode(&self, mode: Option<PresentationMode>) {
        self.inner.lock().presentation_mode = mode;
    }

    pub fn set_answer_state(&self, state: Option<AnswerState>) {
        self.inner.lock().answer_state = state;
    }

    pub fn set_local_sending(&self, mode: Option<SendingMode>) {
        self.inner.lock().local_sending = mode;
    }

    pub fn set_default_source(&self, connector: ConnectorId, source_type: InputSourceType) {
        let mut inner = self.inner.lock();
        inner.default_source = connector;
        inner.source_types.insert(connector, source_type);
    }

    /// Make the three status queries fail, as when no call or conference
    /// exists and the transport rejects the lookup outright.
    pub fn set_fail_status_queries(&self, fail: bool) {
        self.inner.lock().fail_status_queries = fail;
    }

    /// Forget recorded writes (roles, selections, previews, alerts). The
    /// widget mirror and saved panels persist, like on the real endpoint.
    pub fn clear_recorded(&self) {
        let mut inner = self.inner.lock();
        inner.roles.clear();
        inner.selections.clear();
        inner.previews.clear();
        inner.alerts.clear();
    }

    pub fn roles(&self) -> Vec<(ConnectorId, MonitorRole)> {
        self.inner.lock().roles.clone()
    }

    pub fn selections(&self) -> Vec<(ConnectorId, PresentationSelection)> {
        self.inner.lock().selections.clone()
    }

    pub fn previews(&self) -> Vec<(ConnectorId, SendingMode)> {
        self.inner.lock().previews.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.inner.lock().alerts.clone()
    }

    pub fn widget(&self, widget_id: &str) -> Option<String> {
        self.inner.lock().widgets.get(widget_id).cloned()
    }

    pub fn saved_panels(&self) -> Vec<String> {
        self.inner.lock().saved_panels.clone()
    }

    pub fn removed_panels(&self) -> Vec<String> {
        self.inner.lock().removed_panels.clone()
    }

    fn status_failure() -> PresModeError {
        PresModeError::QueryFailed(StringError::new("status does not currently exist"))
    }
}

impl Device for FakeDevice {
    fn presentation_mode(&self) -> Result<Option<PresentationMode>> {
        let inner = self.inner.lock();
        if inner.fail_status_queries {
            return Err(Self::status_failure());
        }
        Ok(inner.presentation_mode)
    }

    fn call_answer_state(&self) -> Result<Option<AnswerState>> {
        let inner = self.inner.lock();
        if inner.fail_status_queries {
            return Err(Self::status_failure());
        }
        Ok(inner.answer_state)
    }

    fn local_sending_mode(&self) -> Result<Option<SendingMode>> {
        let inner = self.inner.lock();
        if inner.fail_status_queries {
            return Err(Self::status_failure());
        }
        Ok(inner.local_sending)
    }

    fn output_connector_count(&self) -> Result<u32> {
        Ok(self.inner.lock().connector_count)
    }

    fn default_presentation_source(&self) -> Result<ConnectorId> {
        Ok(self.inner.lock().default_source)
    }

    fn input_source_type(&self, connector: ConnectorId) -> Result<InputSourceType> {
        self.inner
            .lock()
            .source_types
            .get(&connector)
            .copied()
            .ok_or(PresModeError::UnknownConnector(connector.0))
    }

    fn set_monitor_role(&self, connector: ConnectorId, role: MonitorRole) -> Result<()> {
        self.inner.lock().roles.push((connector, role));
        Ok(())
    }

    fn set_presentation_selection(
        &self,
        connector: ConnectorId,
        selection: PresentationSelection,
    ) -> Result<()> {
        self.inner.lock().selections.push((connector, selection));
        Ok(())
    }

    fn start_preview(&self, source: ConnectorId, mode: SendingMode) -> Result<()> {
        self.inner.lock().previews.push((source, mode));
        Ok(())
    }

    fn display_alert(&self, _title: &str, text: &str, _duration_secs: u32) -> Result<()> {
        self.inner.lock().alerts.push(text.to_string());
        Ok(())
    }

    fn set_widget_value(&self, widget_id: &str, value: &str) -> Result<()> {
        self.inner
            .lock()
            .widgets
            .insert(widget_id.to_string(), value.to_string());
        Ok(())
    }

    fn save_panel(&self, _panel_id: &str, markup: &str) -> Result<()> {
        self.inner.lock().saved_panels.push(markup.to_string());
        Ok(())
    }

    fn remove_panel(&self, panel_id: &str) -> Result<()> {
        self.inner.lock().removed_panels.push(panel_id.to_string());
        Ok(())
    }
}
