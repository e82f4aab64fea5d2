//! `presmode` - Automatic presentation display control for video-conferencing endpoints
//!
//! Adjusts which physical displays on a multi-monitor endpoint are dedicated to
//! presentation content, restores local preview across call-state transitions,
//! and mirrors the feature toggles onto a touch-panel menu. Event-driven:
//! [`controller::ModeReconciler`] consumes typed device events and reconciles
//! connector monitor roles through the [`device::Device`] facade.
//!
//! The embedding runtime owns the transport to the endpoint: it implements
//! [`device::Device`], feeds [`device::DeviceEvent`]s into the reconciler's
//! channel, and the reconciler pushes role, widget, and panel writes back out.
//! All state is process-lifetime only and re-derived from live device queries
//! on each event.

// Module declarations
pub mod config;
pub mod controller;
pub mod device;
pub mod error;
pub mod ui;
pub mod utils;

// Shared test doubles, compiled only for unit tests
#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{PresModeError, Result};
