//! Typed event bus
//!
//! One variant per external event kind the service reacts to. The embedding
//! runtime translates its subscription callbacks into these values and sends
//! them over an `mpsc` channel; the platform delivers events serially, so a
//! single consumer loop preserves that ordering.

use crate::device::types::{
    AnswerState, ConnectorId, PresentationStartCause, PresentationStopCause, PreviewStartCause,
    PreviewStopCause,
};

/// An external event notification from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// A local presentation preview started.
    PreviewStarted {
        /// Why the preview started
        cause: PreviewStartCause,
        /// The source connector, when the platform reports one
        local_source: Option<ConnectorId>,
    },
    /// A local presentation preview stopped.
    PreviewStopped {
        /// Why the preview stopped
        cause: PreviewStopCause,
        /// The source connector that was previewing, when reported
        local_source: Option<ConnectorId>,
    },
    /// A presentation started (local send or remote receive).
    PresentationStarted {
        /// Why the presentation started
        cause: PresentationStartCause,
    },
    /// A presentation stopped.
    PresentationStopped {
        /// Why the presentation stopped
        cause: PresentationStopCause,
    },
    /// The answer state of the active call changed.
    CallAnswerState(AnswerState),
    /// The active call disconnected.
    CallDisconnected,
    /// The user actioned a widget on the touch panel.
    WidgetAction {
        /// The widget's id
        widget_id: String,
        /// The widget's new value (`"on"` / `"off"` for toggles)
        value: String,
    },
}
