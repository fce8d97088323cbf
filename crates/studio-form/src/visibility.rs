//! Discriminator-driven visibility of dependent field groups.

use serde::{Deserialize, Serialize};
use studio_model::{FormProfile, Toggle};

/// Display state of a dependent field group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    fn shown_if(condition: bool) -> Self {
        if condition { Self::Shown } else { Self::Hidden }
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Enabled state of a resource configuration tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    Enabled,
    Disabled,
}

impl TabState {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Enabled state of the four landing-zone resource tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTabs {
    pub storage: TabState,
    pub ingestion: TabState,
    pub warehouse: TabState,
    pub monitoring: TabState,
}

impl ResourceTabs {
    fn all(state: TabState) -> Self {
        Self {
            storage: state,
            ingestion: state,
            warehouse: state,
            monitoring: state,
        }
    }
}

/// Visibility of every dependent group plus the resource tab states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityState {
    /// Zone name and environment inputs.
    pub zone_identity: Visibility,
    /// The governance yes/no toggle itself.
    pub governance_toggle: Visibility,
    /// Governance public-network and admin-tenant inputs.
    pub governance_detail: Visibility,
    /// The explicit DMZ subscription id input.
    pub dmz_subscription: Visibility,
    /// The shared-subscription yes/no toggle itself.
    pub shared_subscription_toggle: Visibility,
    pub tabs: ResourceTabs,
}

/// Derive the visibility state for a form profile.
///
/// Total over every representable profile; an unset zone hides every
/// dependent group and disables every resource tab.
pub fn compute_visibility(profile: &FormProfile) -> VisibilityState {
    match *profile {
        FormProfile::Unset => VisibilityState {
            zone_identity: Visibility::Hidden,
            governance_toggle: Visibility::Hidden,
            governance_detail: Visibility::Hidden,
            dmz_subscription: Visibility::Hidden,
            shared_subscription_toggle: Visibility::Hidden,
            tabs: ResourceTabs::all(TabState::Disabled),
        },
        FormProfile::Perimeter { governance } => VisibilityState {
            zone_identity: Visibility::Hidden,
            governance_toggle: Visibility::Shown,
            governance_detail: Visibility::shown_if(governance == Some(Toggle::Yes)),
            dmz_subscription: Visibility::Shown,
            shared_subscription_toggle: Visibility::Hidden,
            tabs: ResourceTabs::all(TabState::Disabled),
        },
        FormProfile::Landing { shared_subscription } => VisibilityState {
            zone_identity: Visibility::Shown,
            governance_toggle: Visibility::Hidden,
            governance_detail: Visibility::Hidden,
            dmz_subscription: Visibility::shown_if(shared_subscription == Some(Toggle::No)),
            shared_subscription_toggle: Visibility::Shown,
            tabs: ResourceTabs::all(TabState::Enabled),
        },
    }
}

/// Visibility of the documentation client/author inputs, driven by the
/// separate documentation toggle.
pub fn documentation_visibility(doc_enabled: Option<Toggle>) -> Visibility {
    Visibility::shown_if(doc_enabled == Some(Toggle::Yes))
}
