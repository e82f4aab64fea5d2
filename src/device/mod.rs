//! Device integration layer
//!
//! The endpoint itself is an external collaborator: the reconciler only ever
//! talks to it through the [`Device`] capability trait, and only ever hears
//! from it through [`DeviceEvent`] values delivered on a channel.
//!
//! # Overview
//!
//! - [`facade::Device`]: status queries, configuration reads/writes, and
//!   commands (preview start, alerts, widget values, panel save/remove)
//! - [`events::DeviceEvent`]: one variant per external event kind, dispatched
//!   through a single reconciler entry point
//! - [`types`]: the endpoint vocabulary (connector ids, monitor roles,
//!   presentation/call status values, event cause codes)
//!
//! Status queries return `Ok(None)` when the referenced status does not
//! currently exist (no call, no conference). That is expected absence, not a
//! failure, and callers map it to a default reading.

pub mod events;
pub mod facade;
pub mod types;

pub use events::DeviceEvent;
pub use facade::Device;
pub use types::{
    AnswerState, ConnectorId, InputSourceType, MonitorRole, PresentationMode,
    PresentationSelection, PresentationStartCause, PresentationStopCause, PreviewStartCause,
    PreviewStopCause, SendingMode,
};
