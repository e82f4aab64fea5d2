//! Touch-panel integration
//!
//! Panel document generation and the one-directional widget mirror. The UI
//! never feeds state back into the service directly; user actions arrive as
//! [`crate::device::DeviceEvent::WidgetAction`] events like every other
//! external notification.

pub mod panel;
pub mod sync;
