//! Typed snapshot of a validated form, consumed by the assembler.
//!
//! The embedding dashboard builds this once the form validates; the
//! assembler never sees raw widget state.

use serde::{Deserialize, Serialize};

use studio_model::{
    Access, BackupRedundancy, Environment, Location, PlatformFeatures, StorageSku, SubnetSuffix,
    Toggle, VnetSuffix,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    pub ip_range: String,
    pub vnet_suffix: VnetSuffix,
    pub subnet_suffix: SubnetSuffix,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernanceSettings {
    pub public_network: Access,
    /// Explicit admin tenant id; `None` keeps the template placeholder.
    pub admin_tenant_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseStamp {
    pub released_by: String,
    pub version: String,
}

/// Settings applied to both zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonSettings {
    pub organisation: String,
    pub project: String,
    pub location: Location,
    pub subscription_id: String,
    pub network: NetworkSettings,
    pub governance: GovernanceSettings,
    pub features: PlatformFeatures,
    pub release: ReleaseStamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub raw_name: String,
    pub curated_name: String,
    pub public_network: Access,
    pub blob_public_access: Access,
    pub sku: StorageSku,
    pub lock: Access,
    pub retention_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSettings {
    pub public_network: Access,
    pub backup_redundancy: BackupRedundancy,
    pub admin_login: String,
    pub admin_sid: String,
    pub admin_tenant_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseSettings {
    pub public_network: Access,
    pub admin_login: String,
    pub admin_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSettings {
    pub action_group: String,
    pub email: String,
}

/// Landing-zone-only settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingSettings {
    pub zone_name: String,
    pub environment: Environment,
    pub shared_subscription: Toggle,
    /// Explicit DMZ subscription id; only honoured when
    /// `shared_subscription` is `No`.
    pub dmz_subscription_id: Option<String>,
    pub storage: StorageSettings,
    pub ingest: IngestSettings,
    pub warehouse: WarehouseSettings,
    pub monitoring: MonitoringSettings,
}

/// Everything the assembler needs for one export session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentSettings {
    pub common: CommonSettings,
    pub landing: Option<LandingSettings>,
}
