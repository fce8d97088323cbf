use studio_form::{compute_visibility, is_form_valid, validate_form};
use studio_model::{FieldId, FieldValidity, FieldValues, FormProfile, Toggle, Zone};

const GUID: &str = "12345678-1234-1234-1234-123456789abc";

fn common_values() -> FieldValues {
    let mut values = FieldValues::new();
    values.set(FieldId::OrganisationCode, "exp");
    values.set(FieldId::Project, "Data Platform");
    values.set(FieldId::SubscriptionId, GUID);
    values.set(FieldId::ReleasedBy, "release@company.com");
    values.set(FieldId::Version, "1.2.0");
    values.set(FieldId::IpRange, "10.20.0.0");
    values
}

fn landing_values() -> FieldValues {
    let mut values = common_values();
    values.set(FieldId::ZoneName, "sales01");
    values.set(FieldId::StorageRawName, "raw1");
    values.set(FieldId::StorageCuratedName, "cur1");
    values.set(FieldId::IngestAdminSid, GUID);
    values.set(FieldId::IngestAdminTenantId, GUID);
    values.set(FieldId::WarehouseLogin, "sqladmin");
    values.set(FieldId::WarehousePassword, "s3cr3t-value");
    values.set(FieldId::AlertsActionGroup, "AlertsGroup");
    values.set(FieldId::AlertsEmail, "alerts@company.com");
    values
}

fn known_profiles() -> [FormProfile; 4] {
    [
        FormProfile::Perimeter {
            governance: Some(Toggle::Yes),
        },
        FormProfile::Perimeter {
            governance: Some(Toggle::No),
        },
        FormProfile::Landing {
            shared_subscription: Some(Toggle::Yes),
        },
        FormProfile::Landing {
            shared_subscription: Some(Toggle::No),
        },
    ]
}

#[test]
fn visibility_is_deterministic_for_every_profile() {
    let mut profiles = vec![
        FormProfile::Unset,
        FormProfile::Perimeter { governance: None },
        FormProfile::Landing {
            shared_subscription: None,
        },
    ];
    profiles.extend(known_profiles());

    for profile in profiles {
        let first = compute_visibility(&profile);
        let second = compute_visibility(&profile);
        assert_eq!(first, second, "visibility not stable for {profile:?}");
    }
}

#[test]
fn perimeter_without_governance_validates_on_common_fields() {
    let profile = FormProfile::Perimeter {
        governance: Some(Toggle::No),
    };
    assert!(is_form_valid(&profile, &common_values()));

    // Landing-only fields are exempt even when garbage.
    let mut values = common_values();
    values.set(FieldId::ZoneName, "!!");
    assert!(is_form_valid(&profile, &values));
}

#[test]
fn governed_perimeter_requires_the_admin_tenant() {
    let profile = FormProfile::Perimeter {
        governance: Some(Toggle::Yes),
    };
    let mut values = common_values();
    assert!(!is_form_valid(&profile, &values));

    values.set(FieldId::GovernanceAdminTenantId, GUID);
    assert!(is_form_valid(&profile, &values));

    values.set(FieldId::GovernanceAdminTenantId, "not-a-guid");
    let validation = validate_form(&profile, &values);
    assert!(!validation.is_valid);
    assert_eq!(
        validation.fields[&FieldId::GovernanceAdminTenantId],
        FieldValidity::LengthOutOfRange
    );
}

#[test]
fn landing_requires_the_full_resource_set() {
    for shared_subscription in [Some(Toggle::Yes), Some(Toggle::No)] {
        let profile = FormProfile::Landing { shared_subscription };
        assert!(!is_form_valid(&profile, &common_values()));
        assert!(is_form_valid(&profile, &landing_values()));
    }
}

#[test]
fn every_known_profile_rejects_an_empty_required_field() {
    for profile in known_profiles() {
        let mut values = landing_values();
        values.set(FieldId::GovernanceAdminTenantId, GUID);
        assert!(is_form_valid(&profile, &values), "baseline for {profile:?}");

        values.set(FieldId::Project, "");
        assert!(!is_form_valid(&profile, &values), "empty project accepted for {profile:?}");
    }
}

#[test]
fn undefined_discriminator_combinations_disable_export() {
    let values = landing_values();
    assert!(!is_form_valid(&FormProfile::Unset, &values));
    assert!(!is_form_valid(
        &FormProfile::Perimeter { governance: None },
        &values
    ));
}

#[test]
fn pattern_mismatch_blocks_the_form() {
    let profile = FormProfile::Landing {
        shared_subscription: Some(Toggle::Yes),
    };
    let mut values = landing_values();
    values.set(FieldId::IpRange, "999.1.1.1");
    let validation = validate_form(&profile, &values);
    assert!(!validation.is_valid);
    assert_eq!(
        validation.fields[&FieldId::IpRange],
        FieldValidity::PatternMismatch
    );
    assert_eq!(validation.invalid_fields(), vec![FieldId::IpRange]);
}

#[test]
fn selections_map_through_profile_to_the_same_result() {
    let profile = FormProfile::from_selections(
        Some(Zone::Landing),
        Some(Toggle::Yes),
        Some(Toggle::No),
    );
    assert!(is_form_valid(&profile, &landing_values()));
}
