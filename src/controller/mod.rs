//! Presentation-mode reconciliation
//!
//! The core of the service: [`ModeReconciler`] consumes the typed event feed
//! and decides, per triggering event, whether presentation content should
//! occupy the secondary and tertiary displays, applying the decision as
//! connector monitor-role writes. [`state`] holds the toggle state and the
//! pure output-role table.

pub mod reconciler;
pub mod state;

pub use reconciler::ModeReconciler;
pub use state::{DisplayTopology, PresentationLayout, RoleWrites, ToggleState, compute_roles};
