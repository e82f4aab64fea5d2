//! Service configuration
//!
//! Static, compile-time configuration for the presentation controls service:
//! four feature toggles (enable flag, initial value, display name) plus the
//! global behaviour flags. Constructed in code or parsed from a JSON document
//! embedded with `include_str!`; never mutated after startup.

pub mod models;

pub use models::{Behaviour, Config, FeatureKey, FeatureToggle, Features};
