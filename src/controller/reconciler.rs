//! Mode reconciler implementation
//!
//! This module implements the reconciliation state machine that coordinates
//! feature toggles, live presentation/call status, and connector monitor
//! roles. Each external event is handled exactly once and re-derives state
//! from live device queries, so a stale read is healed by the next event.

use crate::config::{Config, FeatureKey};
use crate::controller::state::{DisplayTopology, PresentationLayout, ToggleState, compute_roles};
use crate::device::types::{
    AnswerState, ConnectorId, InputSourceType, PresentationMode, PresentationSelection,
    PresentationStartCause, PresentationStopCause, PreviewStartCause, PreviewStopCause, SendingMode,
};
use crate::device::{Device, DeviceEvent};
use crate::error::Result;
use crate::ui;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use tracing::{debug, info, warn};

/// Seconds an alert stays on screen.
const ALERT_DURATION_SECS: u32 = 5;

/// The presentation-mode reconciliation state machine.
///
/// Owns the toggle state, the display topology, and the device handle.
/// Handlers run one at a time; the embedding runtime delivers events
/// serially through the channel consumed by [`run`](Self::run) or
/// [`spawn_event_loop`](Self::spawn_event_loop).
pub struct ModeReconciler<D: Device> {
    /// Device facade handle
    device: D,
    /// Static service configuration
    config: Config,
    /// Current toggle state (single writer: this reconciler)
    toggles: ToggleState,
    /// Display topology, detected at construction
    displays: DisplayTopology,
}

impl<D: Device> ModeReconciler<D> {
    /// Create a reconciler and detect the display topology.
    pub fn new(device: D, config: Config) -> Result<Self> {
        let count = device.output_connector_count()?;
        info!("Number of displays: {count}");

        Ok(Self {
            device,
            config,
            toggles: ToggleState::default(),
            displays: DisplayTopology { count },
        })
    }

    /// Install the panel and apply the configured initial values.
    ///
    /// Call once before entering the event loop.
    pub fn start(&mut self) -> Result<()> {
        ui::panel::install_panel(&self.device, &self.config)?;
        self.apply_defaults();
        Ok(())
    }

    /// Current toggle state.
    pub fn toggles(&self) -> ToggleState {
        self.toggles
    }

    /// Detected display topology.
    pub fn displays(&self) -> DisplayTopology {
        self.displays
    }

    /// Run the event loop until the sender side hangs up.
    pub fn run(&mut self, events: Receiver<DeviceEvent>) {
        info!("Entering presentation event loop");
        while let Ok(event) = events.recv() {
            self.handle_event(event);
        }
        info!("Presentation event loop exited");
    }

    /// Spawn the event loop on a background thread, sharing the reconciler.
    ///
    /// The lock is held only while one event is handled, so embedder
    /// callbacks touching the reconciler from other threads are not starved.
    pub fn spawn_event_loop(
        reconciler: Arc<Mutex<Self>>,
        events: Receiver<DeviceEvent>,
    ) -> std::thread::JoinHandle<()>
    where
        D: Send + 'static,
    {
        std::thread::spawn(move || {
            info!("Entering presentation event loop");
            while let Ok(event) = events.recv() {
                reconciler.lock().handle_event(event);
            }
            info!("Presentation event loop exited");
        })
    }

    /// Dispatch one external event to its trigger handler.
    pub fn handle_event(&mut self, event: DeviceEvent) {
        debug!("Device event: {event:?}");
        match event {
            DeviceEvent::PreviewStopped {
                cause,
                local_source,
            } => self.on_preview_stopped(cause, local_source),
            DeviceEvent::PreviewStarted { cause, .. } => self.on_preview_started(cause),
            DeviceEvent::PresentationStarted { cause } => self.on_presentation_started(cause),
            DeviceEvent::PresentationStopped { cause } => self.on_presentation_stopped(cause),
            DeviceEvent::CallAnswerState(state) => self.on_call_answer_state(state),
            DeviceEvent::CallDisconnected => self.on_call_disconnected(),
            DeviceEvent::WidgetAction { widget_id, value } => {
                self.on_widget_action(&widget_id, &value);
            }
        }
    }

    /// Preview stopped. `EnteringConference` is compensated by restarting a
    /// local-only preview on the same source; other causes release the
    /// outputs once no remote share is masking the local stop.
    fn on_preview_stopped(&mut self, cause: PreviewStopCause, local_source: Option<ConnectorId>) {
        match cause {
            PreviewStopCause::EnteringConference => {
                info!("Preview stopped entering conference");
                if !self.feature_on(FeatureKey::LocalRestore) {
                    return;
                }
                let Some(source) = local_source else {
                    warn!("Preview stop event carried no local source, cannot restore");
                    return;
                };
                self.notify("Preview stopped entering conference, restoring");
                if let Err(e) = self.device.start_preview(source, SendingMode::LocalOnly) {
                    warn!("Failed to restore local preview on connector {source}: {e}");
                }
                // No output-role evaluation this cycle
            }
            PreviewStopCause::UserRequested
            | PreviewStopCause::NoSignal
            | PreviewStopCause::Disconnect => {
                if !self.layout_features_enabled() {
                    return;
                }
                if self.presentation_mode_or_off().is_active() {
                    debug!("Remote share still active, keeping outputs");
                    return;
                }
                self.update_outputs(false);
                self.notify("No presentations, releasing display outputs");
            }
            PreviewStopCause::Other => {}
        }
    }

    /// Preview started. Outputs are only dedicated when an answered call is
    /// in progress; a bare local preview never claims displays.
    fn on_preview_started(&mut self, cause: PreviewStartCause) {
        match cause {
            PreviewStartCause::UserRequested | PreviewStartCause::AutoStartDesktop => {
                if !self.layout_features_enabled() {
                    return;
                }
                if !self.call_answered() {
                    debug!("No active call, preview stays local");
                    return;
                }
                self.update_outputs(true);
                self.notify("Presentation started, applying display preferences");
            }
            PreviewStartCause::Other => {}
        }
    }

    /// A remote share began: dedicate the outputs unconditionally.
    fn on_presentation_started(&mut self, cause: PresentationStartCause) {
        if cause != PresentationStartCause::StartReceiving {
            return;
        }
        info!("Remote presentation started");
        self.update_outputs(true);
        self.notify("Presentation started, applying display preferences");
    }

    /// A presentation stopped on the remote side. With auto-preview on, a
    /// local preview may still be feeding the outputs; only release them
    /// once nothing local is sending.
    fn on_presentation_stopped(&mut self, cause: PresentationStopCause) {
        if cause != PresentationStopCause::RemoteNormal {
            return;
        }
        if self.feature_on(FeatureKey::AutoPreview) && self.local_sending() {
            debug!("Local instance still sending, keeping outputs");
            return;
        }
        self.update_outputs(false);
        self.notify("No presentations, releasing display outputs");
    }

    /// A call changed answer state. On answer, outputs follow whatever
    /// presentation is live right now.
    fn on_call_answer_state(&mut self, state: AnswerState) {
        if !state.is_answered() {
            return;
        }
        if !self.layout_features_enabled() {
            return;
        }
        let mode = self.presentation_mode_or_off();
        debug!("Call answered, presentation mode {mode:?}");
        self.update_outputs(mode.is_active());
    }

    /// The call ended: reapply the configured initial values if enabled.
    fn on_call_disconnected(&mut self) {
        if !self.config.behaviour.reapply_defaults {
            return;
        }
        self.notify("Call disconnected, applying defaults");
        self.apply_defaults();
    }

    /// Route a panel widget action to its toggle handler.
    fn on_widget_action(&mut self, widget_id: &str, value: &str) {
        let on = value == "on";
        match FeatureKey::from_widget_id(widget_id) {
            Some(FeatureKey::AutoPreview) => self.set_auto_preview(on),
            Some(FeatureKey::LocalRestore) => self.set_local_restore(on),
            Some(FeatureKey::DualPres) => self.set_presentation(on, PresentationLayout::Dual),
            Some(FeatureKey::TriplePres) => self.set_presentation(on, PresentationLayout::Triple),
            None => debug!("Ignoring action on unknown widget {widget_id}"),
        }
    }

    /// Apply the configured initial values, as at startup.
    ///
    /// Triple only becomes the default layout when it is enabled, defaulted
    /// on, and the topology has more than two displays; otherwise the dual
    /// initial value applies.
    pub fn apply_defaults(&mut self) {
        info!("Applying defaults");
        let auto_preview = self.config.features.auto_preview.initial;
        let local_restore = self.config.features.local_restore.initial;
        let triple_default = self.config.features.triple_pres.enabled
            && self.config.features.triple_pres.initial
            && self.displays.supports_triple();
        let dual_default = self.config.features.dual_pres.initial;

        self.set_auto_preview(auto_preview);
        self.set_local_restore(local_restore);

        self.toggles.layout = PresentationLayout::Off;
        if triple_default {
            self.set_presentation(true, PresentationLayout::Triple);
        } else {
            self.set_presentation(dual_default, PresentationLayout::Dual);
        }
    }

    /// Enable or disable automatic preview of new signals while in-call.
    ///
    /// The configured default presentation source must not be a camera: a
    /// camera source rejects the toggle with an alert and the state is
    /// forced off regardless of the requested value.
    pub fn set_auto_preview(&mut self, on: bool) {
        if !self.config.features.auto_preview.enabled {
            return;
        }
        self.toggles.auto_preview = on;
        info!("Auto preview set to {on}");

        match self.default_source_type() {
            Ok((source, InputSourceType::Camera)) => {
                debug!("Default presentation source {source} is a camera");
                self.notify("Cannot enable, the default presentation source is a camera");
                self.toggles.auto_preview = false;
            }
            Ok((source, _)) => {
                let selection = if on {
                    PresentationSelection::Desktop
                } else {
                    PresentationSelection::OnConnect
                };
                match self.device.set_presentation_selection(source, selection) {
                    Ok(()) => debug!("Source {source} presentation selection set to {selection:?}"),
                    Err(e) => {
                        warn!("Failed to set presentation selection on connector {source}: {e}");
                    }
                }
            }
            Err(e) => warn!("Could not read default presentation source: {e}"),
        }
        self.sync_ui();
    }

    /// Enable or disable local preview restoration.
    pub fn set_local_restore(&mut self, on: bool) {
        if !self.config.features.local_restore.enabled {
            return;
        }
        self.toggles.local_restore = on;
        info!("Local restore set to {on}");
        self.sync_ui();
    }

    /// Select or clear a presentation layout, then re-derive the outputs
    /// from the live presentation mode.
    ///
    /// Selecting one layout clears the other (the layout is a single value).
    /// Turning a layout off only clears it when it is the one selected.
    pub fn set_presentation(&mut self, on: bool, layout: PresentationLayout) {
        let enabled = match layout {
            PresentationLayout::Dual => self.config.features.dual_pres.enabled,
            PresentationLayout::Triple => self.config.features.triple_pres.enabled,
            PresentationLayout::Off => return,
        };
        if !enabled {
            return;
        }

        self.toggles.layout = if !on {
            if self.toggles.layout == layout {
                PresentationLayout::Off
            } else {
                self.toggles.layout
            }
        } else if layout == PresentationLayout::Triple && !self.displays.supports_triple() {
            self.notify("Three displays are required for triple presentation");
            if self.config.features.dual_pres.enabled {
                PresentationLayout::Dual
            } else {
                PresentationLayout::Off
            }
        } else {
            layout
        };
        info!("Presentation layout set to {:?}", self.toggles.layout);

        let mode = self.presentation_mode_or_off();
        self.update_outputs(mode.is_active());
        self.sync_ui();
    }

    /// Push the role assignment derived from the current state.
    ///
    /// Write failures are logged and do not abort the event; the next event
    /// recomputes the full assignment anyway.
    fn update_outputs(&self, show_presentation: bool) {
        let writes = compute_roles(self.toggles.layout, self.displays, show_presentation);
        for (connector, role) in &writes {
            if let Err(e) = self.device.set_monitor_role(*connector, *role) {
                warn!("Failed to set monitor role on connector {connector}: {e}");
            }
        }
        debug!("Outputs updated: {writes:?}");
    }

    /// Whether a feature is administratively enabled and currently toggled on.
    fn feature_on(&self, key: FeatureKey) -> bool {
        self.config.features.get(key).enabled && self.toggles.value_of(key)
    }

    /// Whether either presentation layout feature is administratively enabled.
    fn layout_features_enabled(&self) -> bool {
        self.config.features.dual_pres.enabled || self.config.features.triple_pres.enabled
    }

    /// Read the conference presentation mode, treating absence as `Off`.
    fn presentation_mode_or_off(&self) -> PresentationMode {
        match self.device.presentation_mode() {
            Ok(Some(mode)) => mode,
            Ok(None) => PresentationMode::Off,
            Err(e) => {
                debug!("Presentation mode query failed, treating as off: {e}");
                PresentationMode::Off
            }
        }
    }

    /// Whether an answered call is in progress; absence reads as no call.
    fn call_answered(&self) -> bool {
        match self.device.call_answer_state() {
            Ok(Some(state)) => state.is_answered(),
            Ok(None) => false,
            Err(e) => {
                debug!("Call state query failed, treating as no call: {e}");
                false
            }
        }
    }

    /// Whether a local presentation instance is still sending.
    fn local_sending(&self) -> bool {
        match self.device.local_sending_mode() {
            Ok(Some(_)) => true,
            Ok(None) => false,
            Err(e) => {
                debug!("Local instance query failed, treating as not sending: {e}");
                false
            }
        }
    }

    fn default_source_type(&self) -> Result<(ConnectorId, InputSourceType)> {
        let source = self.device.default_presentation_source()?;
        let source_type = self.device.input_source_type(source)?;
        Ok((source, source_type))
    }

    /// Raise a user-visible alert when notifications are enabled.
    fn notify(&self, message: &str) {
        info!("Alert: {message}");
        if !self.config.behaviour.show_notifications {
            return;
        }
        if let Err(e) = self
            .device
            .display_alert(&self.config.name, message, ALERT_DURATION_SECS)
        {
            warn!("Failed to display alert: {e}");
        }
    }

    fn sync_ui(&self) {
        ui::sync::sync_widgets(&self.device, &self.config, self.toggles);
    }
}
