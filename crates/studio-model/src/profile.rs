//! Discriminator values and the derived form profile.
//!
//! Three inputs steer the rest of the form: the deployment zone kind, the
//! governance toggle (perimeter zones only) and the shared-subscription
//! toggle (landing zones only). [`FormProfile`] folds the raw selections
//! into one tagged value so every consumer matches on an explicit state
//! instead of re-deriving boolean combinations.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Deployment target class. Exactly one of two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// The shared perimeter zone hosting governance and network edge.
    Perimeter,
    /// A landing zone carrying workload resources.
    Landing,
}

impl Zone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Perimeter => "perimeter",
            Self::Landing => "landing",
        }
    }

    /// Uppercase tag written into the platform feature block.
    pub fn type_tag(self) -> &'static str {
        match self {
            Self::Perimeter => "PERIMETER",
            Self::Landing => "LANDING",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "perimeter" => Ok(Self::Perimeter),
            "landing" => Ok(Self::Landing),
            _ => Err(ModelError::UnknownOption {
                field: "zone",
                value: value.to_string(),
            }),
        }
    }
}

/// A yes/no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Yes,
    No,
}

impl Toggle {
    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub fn as_bool(self) -> bool {
        self.is_yes()
    }

    pub fn from_bool(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }

    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            _ => Err(ModelError::UnknownOption {
                field: "toggle",
                value: value.to_string(),
            }),
        }
    }
}

/// The discriminator state of the whole form.
///
/// Only combinations that can actually occur are representable: the
/// governance toggle exists for perimeter zones, the shared-subscription
/// toggle for landing zones. An unanswered toggle is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormProfile {
    /// No zone selected yet; all dependent groups stay hidden.
    Unset,
    Perimeter { governance: Option<Toggle> },
    Landing { shared_subscription: Option<Toggle> },
}

impl FormProfile {
    /// Fold the three raw widget selections into a profile. Total: any
    /// combination of inputs maps to a defined profile, with toggles that
    /// do not apply to the selected zone discarded.
    pub fn from_selections(
        zone: Option<Zone>,
        governance: Option<Toggle>,
        shared_subscription: Option<Toggle>,
    ) -> Self {
        match zone {
            None => Self::Unset,
            Some(Zone::Perimeter) => Self::Perimeter { governance },
            Some(Zone::Landing) => Self::Landing { shared_subscription },
        }
    }

    pub fn zone(self) -> Option<Zone> {
        match self {
            Self::Unset => None,
            Self::Perimeter { .. } => Some(Zone::Perimeter),
            Self::Landing { .. } => Some(Zone::Landing),
        }
    }

    pub fn governance(self) -> Option<Toggle> {
        match self {
            Self::Perimeter { governance } => governance,
            _ => None,
        }
    }

    pub fn shared_subscription(self) -> Option<Toggle> {
        match self {
            Self::Landing { shared_subscription } => shared_subscription,
            _ => None,
        }
    }
}
