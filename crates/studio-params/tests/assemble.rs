use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::json;

use studio_model::{
    Access, BackupRedundancy, Environment, Location, PlatformFeatures, StorageSku, SubnetSuffix,
    Toggle, VnetSuffix, Zone,
};
use studio_params::{
    BaseTemplates, CommonSettings, DeploymentSettings, GovernanceSettings, IngestSettings,
    LandingSettings, MonitoringSettings, NetworkSettings, ParamsError, ReleaseStamp,
    StorageSettings, WarehouseSettings, assemble_parameters, PLACEHOLDER_TENANT_ID,
};

const GUID: &str = "12345678-1234-1234-1234-123456789abc";
const OTHER_GUID: &str = "87654321-4321-4321-4321-cba987654321";

fn sample_common() -> CommonSettings {
    CommonSettings {
        organisation: "EXP".to_string(),
        project: "Data Platform".to_string(),
        location: Location::WestEurope,
        subscription_id: GUID.to_string(),
        network: NetworkSettings {
            ip_range: "10.20.0.0".to_string(),
            vnet_suffix: VnetSuffix::Slash16,
            subnet_suffix: SubnetSuffix::Slash24,
        },
        governance: GovernanceSettings {
            public_network: Access::Disabled,
            admin_tenant_id: None,
        },
        features: PlatformFeatures {
            governance: Toggle::No,
            data_factory: Toggle::Yes,
            databricks: Toggle::Yes,
            streaming: Toggle::No,
            data_share: Toggle::No,
            monitoring: Toggle::Yes,
        },
        release: ReleaseStamp {
            released_by: "release@company.com".to_string(),
            version: "1.2.0".to_string(),
        },
    }
}

fn sample_landing() -> LandingSettings {
    LandingSettings {
        zone_name: "sales01".to_string(),
        environment: Environment::Dev,
        shared_subscription: Toggle::Yes,
        dmz_subscription_id: None,
        storage: StorageSettings {
            raw_name: "raw1".to_string(),
            curated_name: "cur1".to_string(),
            public_network: Access::Disabled,
            blob_public_access: Access::Disabled,
            sku: StorageSku::StandardLrs,
            lock: Access::Enabled,
            retention_days: 30,
        },
        ingest: IngestSettings {
            public_network: Access::Disabled,
            backup_redundancy: BackupRedundancy::Geo,
            admin_login: "ingest@company.com".to_string(),
            admin_sid: GUID.to_string(),
            admin_tenant_id: GUID.to_string(),
        },
        warehouse: WarehouseSettings {
            public_network: Access::Disabled,
            admin_login: "sqladmin".to_string(),
            admin_password: "s3cr3t-value".to_string(),
        },
        monitoring: MonitoringSettings {
            action_group: "AlertsGroup".to_string(),
            email: "alerts@company.com".to_string(),
        },
    }
}

fn sample_settings() -> DeploymentSettings {
    DeploymentSettings {
        common: sample_common(),
        landing: Some(sample_landing()),
    }
}

#[test]
fn organisation_is_lowercased() {
    let templates = BaseTemplates::embedded().unwrap();
    let doc = assemble_parameters(Zone::Perimeter, &sample_settings(), &templates).unwrap();
    assert_eq!(doc.value_of("organisation"), Some(&json!("exp")));
}

#[test]
fn governance_placeholder_survives_without_an_explicit_tenant() {
    let templates = BaseTemplates::embedded().unwrap();
    let mut settings = sample_settings();
    settings.common.features.governance = Toggle::Yes;

    let doc = assemble_parameters(Zone::Perimeter, &settings, &templates).unwrap();
    let governance = doc.value_of("governanceParams").unwrap();
    assert_eq!(governance["adminTenantId"], json!(PLACEHOLDER_TENANT_ID));

    settings.common.governance.admin_tenant_id = Some(OTHER_GUID.to_string());
    let doc = assemble_parameters(Zone::Perimeter, &settings, &templates).unwrap();
    let governance = doc.value_of("governanceParams").unwrap();
    assert_eq!(governance["adminTenantId"], json!(OTHER_GUID));
}

#[test]
fn governance_disabled_ignores_an_explicit_tenant() {
    let templates = BaseTemplates::embedded().unwrap();
    let mut settings = sample_settings();
    settings.common.features.governance = Toggle::No;
    settings.common.governance.admin_tenant_id = Some(OTHER_GUID.to_string());

    let doc = assemble_parameters(Zone::Perimeter, &settings, &templates).unwrap();
    let governance = doc.value_of("governanceParams").unwrap();
    assert_eq!(governance["adminTenantId"], json!(PLACEHOLDER_TENANT_ID));
}

#[test]
fn dmz_subscription_defaults_to_the_target_subscription() {
    let templates = BaseTemplates::embedded().unwrap();

    // Shared subscription: explicit id is ignored even if supplied.
    let mut settings = sample_settings();
    {
        let landing = settings.landing.as_mut().unwrap();
        landing.shared_subscription = Toggle::Yes;
        landing.dmz_subscription_id = Some(OTHER_GUID.to_string());
    }
    let doc = assemble_parameters(Zone::Landing, &settings, &templates).unwrap();
    assert_eq!(doc.value_of("dmzSubscriptionId"), Some(&json!(GUID)));

    // Separate subscription with an explicit id.
    {
        let landing = settings.landing.as_mut().unwrap();
        landing.shared_subscription = Toggle::No;
    }
    let doc = assemble_parameters(Zone::Landing, &settings, &templates).unwrap();
    assert_eq!(doc.value_of("dmzSubscriptionId"), Some(&json!(OTHER_GUID)));

    // Separate subscription but the id was left blank: keep the target.
    {
        let landing = settings.landing.as_mut().unwrap();
        landing.dmz_subscription_id = Some("   ".to_string());
    }
    let doc = assemble_parameters(Zone::Landing, &settings, &templates).unwrap();
    assert_eq!(doc.value_of("dmzSubscriptionId"), Some(&json!(GUID)));
}

#[test]
fn landing_assembly_requires_landing_settings() {
    let templates = BaseTemplates::embedded().unwrap();
    let settings = DeploymentSettings {
        common: sample_common(),
        landing: None,
    };
    let err = assemble_parameters(Zone::Landing, &settings, &templates).unwrap_err();
    assert!(matches!(err, ParamsError::MissingLandingSettings));
}

#[test]
fn missing_template_key_is_fatal() {
    let thinned = serde_json::from_value(json!({
        "$schema": "https://example.com/parameters.json#",
        "contentVersion": "1.0.0.0",
        "parameters": {
            "organisation": { "value": "org" }
        }
    }))
    .unwrap();
    let templates = BaseTemplates::new(
        thinned,
        BaseTemplates::embedded().unwrap().clone_for(Zone::Landing),
    );
    let err = assemble_parameters(Zone::Perimeter, &sample_settings(), &templates).unwrap_err();
    assert!(matches!(
        err,
        ParamsError::MissingTemplateKey { zone: Zone::Perimeter, key } if key == "project"
    ));
}

#[test]
fn assembled_blocks_match_the_form_snapshot() {
    let templates = BaseTemplates::embedded().unwrap();
    let doc = assemble_parameters(Zone::Landing, &sample_settings(), &templates).unwrap();
    insta::assert_json_snapshot!(doc.value_of("monitoringParams").unwrap(), @r###"
    {
      "actionGroupName": "AlertsGroup",
      "emailAddress": "alerts@company.com"
    }
    "###);
    insta::assert_json_snapshot!(doc.value_of("storageParams").unwrap(), @r###"
    {
      "allowBlobPublicAccess": false,
      "dataLakeNames": [
        "raw1",
        "cur1"
      ],
      "publicNetworkAccess": "Disabled",
      "sku": "Standard_LRS",
      "storageLock": true,
      "storageRetentionDays": 30
    }
    "###);
}

proptest! {
    /// Output key-set is a subset of the template key-set for any
    /// combination of override values.
    #[test]
    fn assembler_never_introduces_keys(
        organisation in "[A-Za-z]{3}",
        project in "[A-Za-z ]{1,24}",
        zone_name in "[a-z0-9]{5,10}",
        retention_days in 1u32..3650,
        shared in any::<bool>(),
        explicit_dmz in proptest::option::of("[0-9a-f]{8}"),
    ) {
        let templates = BaseTemplates::embedded().unwrap();
        let mut settings = sample_settings();
        settings.common.organisation = organisation;
        settings.common.project = project;
        {
            let landing = settings.landing.as_mut().unwrap();
            landing.zone_name = zone_name;
            landing.storage.retention_days = retention_days;
            landing.shared_subscription = Toggle::from_bool(shared);
            landing.dmz_subscription_id = explicit_dmz;
        }

        for zone in [Zone::Perimeter, Zone::Landing] {
            let base: BTreeSet<String> = templates
                .document(zone)
                .parameter_names()
                .into_iter()
                .map(str::to_string)
                .collect();
            let doc = assemble_parameters(zone, &settings, &templates).unwrap();
            let assembled: BTreeSet<String> = doc
                .parameter_names()
                .into_iter()
                .map(str::to_string)
                .collect();
            prop_assert!(assembled.is_subset(&base));
            prop_assert_eq!(assembled.len(), base.len());
        }
    }
}
