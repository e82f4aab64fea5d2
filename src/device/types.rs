//! Endpoint vocabulary shared by the facade, the event bus, and the controller
//!
//! Serialized forms match the endpoint's own wire strings so a transport
//! implementation can map values straight through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical video connector (display output or source input), addressed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectorId(pub u32);

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output monitor role: general call/home content, or dedicated to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorRole {
    /// The device decides what the display shows
    Auto,
    /// The display is dedicated to presentation content
    PresentationOnly,
}

/// Conference-wide presentation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PresentationMode {
    /// No presentation in progress
    #[default]
    Off,
    /// A presentation is being sent to the far end
    Sending,
    /// A presentation is being received from the far end
    Receiving,
}

impl PresentationMode {
    /// Whether any presentation is currently in progress.
    pub fn is_active(self) -> bool {
        !matches!(self, PresentationMode::Off)
    }
}

/// Answer state of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerState {
    /// The call is ringing and has not been answered
    Unanswered,
    /// The call was ignored locally
    Ignored,
    /// The call was answered automatically
    Autoanswered,
    /// The call was answered
    Answered,
}

impl AnswerState {
    /// Whether the call has been answered by the user.
    pub fn is_answered(self) -> bool {
        matches!(self, AnswerState::Answered)
    }
}

/// Direction of a local presentation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendingMode {
    /// Shown locally and sent to the far end
    LocalRemote,
    /// Shown locally only (preview)
    LocalOnly,
}

/// Input source kind of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSourceType {
    /// A camera; cannot sensibly auto-preview as a desktop source
    Camera,
    /// A desktop/laptop source
    Desktop,
    /// A media player
    Mediaplayer,
    /// A whiteboard camera
    Whiteboard,
    /// Anything else
    Other,
}

/// Presentation-selection behaviour of an input connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationSelection {
    /// Show local content automatically, even in-call
    Desktop,
    /// Share automatically when a new signal connects
    AutoShare,
    /// Preview on new-signal connect, the call default
    OnConnect,
    /// Only share when explicitly requested
    Manual,
}

/// Reason code on a presentation-preview-started event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewStartCause {
    /// The user started the preview
    UserRequested,
    /// A desktop source connected and auto-started
    AutoStartDesktop,
    /// Any cause this service does not react to
    Other,
}

/// Reason code on a presentation-preview-stopped event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewStopCause {
    /// The platform stopped the preview upon joining a conference
    EnteringConference,
    /// The user stopped the preview
    UserRequested,
    /// The source signal was lost
    NoSignal,
    /// The source was unplugged
    Disconnect,
    /// Any cause this service does not react to
    Other,
}

/// Reason code on a presentation-started event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationStartCause {
    /// A remote share began
    StartReceiving,
    /// The user started sending a presentation
    UserRequested,
    /// Any cause this service does not react to
    Other,
}

/// Reason code on a presentation-stopped event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationStopCause {
    /// The remote share ended normally
    RemoteNormal,
    /// The user stopped the presentation
    UserRequested,
    /// Any cause this service does not react to
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_mode_activity() {
        assert!(!PresentationMode::Off.is_active());
        assert!(PresentationMode::Sending.is_active());
        assert!(PresentationMode::Receiving.is_active());
    }

    #[test]
    fn test_answer_state() {
        assert!(AnswerState::Answered.is_answered());
        assert!(!AnswerState::Unanswered.is_answered());
        assert!(!AnswerState::Autoanswered.is_answered());
    }

    #[test]
    fn test_wire_strings() {
        // Serialized forms must match the endpoint's own value strings
        assert_eq!(
            serde_json::to_string(&MonitorRole::PresentationOnly).unwrap(),
            "\"PresentationOnly\""
        );
        assert_eq!(
            serde_json::to_string(&PresentationSelection::OnConnect).unwrap(),
            "\"OnConnect\""
        );
        assert_eq!(
            serde_json::to_string(&InputSourceType::Camera).unwrap(),
            "\"camera\""
        );
    }

    #[test]
    fn test_connector_display() {
        assert_eq!(ConnectorId(3).to_string(), "3");
    }
}
