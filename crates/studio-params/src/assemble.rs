//! Merge form settings into a cloned base template.

use serde_json::json;

use studio_model::{Toggle, Zone};

use crate::document::ParameterDocument;
use crate::error::{ParamsError, Result};
use crate::settings::{DeploymentSettings, LandingSettings};
use crate::templates::{BaseTemplates, PLACEHOLDER_TENANT_ID};

/// Assemble the parameter document for one zone.
///
/// Starts from a deep copy of the zone's base template, applies the
/// common overrides, then the zone-specific rules. Only names the
/// template already declares are ever written.
pub fn assemble_parameters(
    zone: Zone,
    settings: &DeploymentSettings,
    templates: &BaseTemplates,
) -> Result<ParameterDocument> {
    let mut doc = templates.clone_for(zone);
    apply_common(zone, &mut doc, settings)?;
    match zone {
        Zone::Perimeter => apply_perimeter(&mut doc, settings)?,
        Zone::Landing => {
            let landing = settings
                .landing
                .as_ref()
                .ok_or(ParamsError::MissingLandingSettings)?;
            apply_landing(&mut doc, settings, landing)?;
        }
    }
    Ok(doc)
}

fn apply_common(
    zone: Zone,
    doc: &mut ParameterDocument,
    settings: &DeploymentSettings,
) -> Result<()> {
    let common = &settings.common;
    doc.override_parameter(zone, "organisation", json!(common.organisation.to_lowercase()))?;
    doc.override_parameter(zone, "project", json!(common.project))?;
    doc.override_parameter(zone, "location", json!(common.location.as_str()))?;
    doc.override_parameter(zone, "targetSubscriptionId", json!(common.subscription_id))?;
    doc.override_parameter(
        zone,
        "networkParams",
        json!({
            "ipRange": common.network.ip_range,
            "vnetSuffix": common.network.vnet_suffix.as_str(),
            "subnetSuffix": common.network.subnet_suffix.as_str(),
        }),
    )?;
    // The placeholder tenant survives until the perimeter-specific rule
    // decides an explicit id applies.
    doc.override_parameter(
        zone,
        "governanceParams",
        json!({
            "publicNetworkAccess": common.governance.public_network.as_str(),
            "adminTenantId": PLACEHOLDER_TENANT_ID,
        }),
    )?;
    doc.override_parameter(
        zone,
        "platformParams",
        json!({
            "isGovernanceEnabled": common.features.governance.as_bool(),
            "isDataFactoryEnabled": common.features.data_factory.as_bool(),
            "isDataBricksEnabled": common.features.databricks.as_bool(),
            "isStreamingEnabled": common.features.streaming.as_bool(),
            "isDataShareEnabled": common.features.data_share.as_bool(),
            "isMonitoringEnabled": common.features.monitoring.as_bool(),
            "zoneType": zone.type_tag(),
        }),
    )?;
    doc.override_parameter(
        zone,
        "releaseParams",
        json!({
            "releasedBy": common.release.released_by,
            "version": common.release.version,
        }),
    )?;
    Ok(())
}

fn apply_perimeter(doc: &mut ParameterDocument, settings: &DeploymentSettings) -> Result<()> {
    let common = &settings.common;
    let explicit_tenant = common
        .governance
        .admin_tenant_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());
    if common.features.governance.is_yes() {
        if let Some(tenant_id) = explicit_tenant {
            doc.override_parameter(
                Zone::Perimeter,
                "governanceParams",
                json!({
                    "publicNetworkAccess": common.governance.public_network.as_str(),
                    "adminTenantId": tenant_id,
                }),
            )?;
        }
    }
    Ok(())
}

fn apply_landing(
    doc: &mut ParameterDocument,
    settings: &DeploymentSettings,
    landing: &LandingSettings,
) -> Result<()> {
    let zone = Zone::Landing;
    doc.override_parameter(zone, "zone", json!(landing.zone_name))?;
    doc.override_parameter(zone, "environment", json!(landing.environment.as_str()))?;

    // The perimeter reference defaults to the target subscription; an
    // explicit DMZ subscription replaces it only when the zones are not
    // sharing one.
    let mut dmz_subscription = settings.common.subscription_id.as_str();
    if landing.shared_subscription == Toggle::No {
        if let Some(explicit) = landing
            .dmz_subscription_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
        {
            dmz_subscription = explicit;
        }
    }
    doc.override_parameter(zone, "dmzSubscriptionId", json!(dmz_subscription))?;

    doc.override_parameter(
        zone,
        "storageParams",
        json!({
            "dataLakeNames": [landing.storage.raw_name, landing.storage.curated_name],
            "publicNetworkAccess": landing.storage.public_network.as_str(),
            "allowBlobPublicAccess": landing.storage.blob_public_access.as_bool(),
            "sku": landing.storage.sku.as_str(),
            "storageLock": landing.storage.lock.as_bool(),
            "storageRetentionDays": landing.storage.retention_days,
        }),
    )?;
    doc.override_parameter(
        zone,
        "ingestParams",
        json!({
            "publicNetworkAccess": landing.ingest.public_network.as_str(),
            "requestedBackupRedundancy": landing.ingest.backup_redundancy.as_str(),
            "adminLogin": landing.ingest.admin_login,
            "adminSid": landing.ingest.admin_sid,
            "adminTenantId": landing.ingest.admin_tenant_id,
        }),
    )?;
    doc.override_parameter(
        zone,
        "warehouseParams",
        json!({
            "publicNetworkAccess": landing.warehouse.public_network.as_str(),
            "adminLogin": landing.warehouse.admin_login,
            "adminPassword": landing.warehouse.admin_password,
        }),
    )?;
    doc.override_parameter(
        zone,
        "monitoringParams",
        json!({
            "actionGroupName": landing.monitoring.action_group,
            "emailAddress": landing.monitoring.email,
        }),
    )?;
    Ok(())
}
