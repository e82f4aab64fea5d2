//! Toggle state and the output-role table
//!
//! The dual/triple pair is represented as a single [`PresentationLayout`]
//! value, which makes the mutual-exclusion invariant structural rather than
//! something handlers have to maintain.

use crate::config::FeatureKey;
use crate::device::types::{ConnectorId, MonitorRole};
use smallvec::SmallVec;

/// Which presentation layout is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationLayout {
    /// No displays dedicated to presentation
    #[default]
    Off,
    /// The second and third displays are dedicated while presenting
    Dual,
    /// The fourth connector is dedicated as well (three-display systems)
    Triple,
}

impl PresentationLayout {
    /// Whether any presentation layout is selected.
    pub fn is_selected(self) -> bool {
        !matches!(self, PresentationLayout::Off)
    }
}

/// Physical display topology, queried once at startup.
///
/// Assumed stable for the process lifetime; there is no re-detection on
/// hotplug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTopology {
    /// Number of video output connectors
    pub count: u32,
}

impl DisplayTopology {
    /// Whether the topology can host the triple layout.
    pub fn supports_triple(self) -> bool {
        self.count > 2
    }
}

/// Current values of the user-facing toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    /// Auto-preview new signals while in-call
    pub auto_preview: bool,
    /// Restore local preview stopped by conference entry
    pub local_restore: bool,
    /// Selected presentation layout
    pub layout: PresentationLayout,
}

impl ToggleState {
    /// The boolean value a feature's panel widget should mirror.
    pub fn value_of(self, key: FeatureKey) -> bool {
        match key {
            FeatureKey::AutoPreview => self.auto_preview,
            FeatureKey::LocalRestore => self.local_restore,
            FeatureKey::DualPres => self.layout == PresentationLayout::Dual,
            FeatureKey::TriplePres => self.layout == PresentationLayout::Triple,
        }
    }
}

/// Connector role writes produced by one reconciliation.
pub type RoleWrites = SmallVec<[(ConnectorId, MonitorRole); 3]>;

/// The dual pair: the second and third physical outputs.
const DUAL_PAIR: [ConnectorId; 2] = [ConnectorId(2), ConnectorId(3)];

/// The triple extension connector, present only on three-display systems.
const TRIPLE_CONNECTOR: ConnectorId = ConnectorId(4);

/// Compute the per-connector role assignment for the given state.
///
/// Connectors 2 and 3 get `PresentationOnly` iff a layout is selected and a
/// presentation is to be shown; connector 4 additionally requires the triple
/// layout and only exists when the topology has three displays. The primary
/// connector is never written. Pure: no I/O, same inputs always yield the
/// same writes.
pub fn compute_roles(
    layout: PresentationLayout,
    displays: DisplayTopology,
    show_presentation: bool,
) -> RoleWrites {
    let dual_role = if layout.is_selected() && show_presentation {
        MonitorRole::PresentationOnly
    } else {
        MonitorRole::Auto
    };
    let triple_role = if layout == PresentationLayout::Triple && show_presentation {
        MonitorRole::PresentationOnly
    } else {
        MonitorRole::Auto
    };

    let mut writes = RoleWrites::new();
    for connector in DUAL_PAIR {
        writes.push((connector, dual_role));
    }
    if displays.count == 3 {
        writes.push((TRIPLE_CONNECTOR, triple_role));
    }
    writes
}
