//! Closed option sets backing the form's choice widgets.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::profile::Toggle;

/// Deployment location offered by the location dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    WestEurope,
    NorthEurope,
    AustraliaEast,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WestEurope => "westeurope",
            Self::NorthEurope => "northeurope",
            Self::AustraliaEast => "australiaeast",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "westeurope" => Ok(Self::WestEurope),
            "northeurope" => Ok(Self::NorthEurope),
            "australiaeast" => Ok(Self::AustraliaEast),
            _ => Err(ModelError::UnknownOption {
                field: "location",
                value: value.to_string(),
            }),
        }
    }
}

/// Landing-zone environment stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Test,
    Acc,
    Prod,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Acc => "acc",
            Self::Prod => "prod",
        }
    }
}

/// Network prefix length for the zone virtual network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VnetSuffix {
    Slash16,
    Slash20,
    Slash24,
}

impl VnetSuffix {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slash16 => "16",
            Self::Slash20 => "20",
            Self::Slash24 => "24",
        }
    }
}

/// Prefix length for the default subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubnetSuffix {
    Slash24,
    Slash26,
    Slash28,
}

impl SubnetSuffix {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slash24 => "24",
            Self::Slash26 => "26",
            Self::Slash28 => "28",
        }
    }
}

/// Enabled/disabled choice used by several network-facing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    Enabled,
    Disabled,
}

impl Access {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }

    pub fn as_bool(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Storage replication sku.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageSku {
    StandardLrs,
    StandardGrs,
    StandardRagrs,
}

impl StorageSku {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StandardLrs => "Standard_LRS",
            Self::StandardGrs => "Standard_GRS",
            Self::StandardRagrs => "Standard_RAGRS",
        }
    }
}

/// Requested backup storage redundancy for the ingestion database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackupRedundancy {
    Local,
    Zone,
    Geo,
}

impl BackupRedundancy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Zone => "Zone",
            Self::Geo => "Geo",
        }
    }
}

/// Per-resource feature toggles from the resources tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFeatures {
    pub governance: Toggle,
    pub data_factory: Toggle,
    pub databricks: Toggle,
    pub streaming: Toggle,
    pub data_share: Toggle,
    pub monitoring: Toggle,
}

impl Default for PlatformFeatures {
    fn default() -> Self {
        Self {
            governance: Toggle::No,
            data_factory: Toggle::No,
            databricks: Toggle::No,
            streaming: Toggle::No,
            data_share: Toggle::No,
            monitoring: Toggle::No,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_maps_to_bool() {
        assert!(Access::Enabled.as_bool());
        assert!(!Access::Disabled.as_bool());
    }

    #[test]
    fn location_parse_rejects_unknown() {
        assert!(Location::parse("moon-base-1").is_err());
        assert_eq!(Location::parse("WestEurope").unwrap(), Location::WestEurope);
    }
}
