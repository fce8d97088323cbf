//! The fixed requirement table.
//!
//! Each known (zone, governance) combination selects the set of fields
//! that must validate before the export controls unlock. Fields outside
//! the active set are exempt from validation entirely, which is how
//! hidden groups and disabled tabs stay out of the way.

use studio_model::{FieldId, FormProfile, Toggle};

/// Required for every profile that can export at all.
const REQUIRED_COMMON: [FieldId; 6] = [
    FieldId::OrganisationCode,
    FieldId::Project,
    FieldId::SubscriptionId,
    FieldId::ReleasedBy,
    FieldId::Version,
    FieldId::IpRange,
];

/// Perimeter zone with governance enabled: common plus the admin tenant.
const REQUIRED_PERIMETER_GOVERNED: [FieldId; 7] = [
    FieldId::OrganisationCode,
    FieldId::Project,
    FieldId::SubscriptionId,
    FieldId::ReleasedBy,
    FieldId::Version,
    FieldId::IpRange,
    FieldId::GovernanceAdminTenantId,
];

/// Landing zone: common plus the zone identity and resource credentials.
/// The shared-subscription answer does not change the set; the explicit
/// DMZ subscription id stays optional either way.
const REQUIRED_LANDING: [FieldId; 15] = [
    FieldId::OrganisationCode,
    FieldId::Project,
    FieldId::SubscriptionId,
    FieldId::ReleasedBy,
    FieldId::Version,
    FieldId::IpRange,
    FieldId::StorageRawName,
    FieldId::StorageCuratedName,
    FieldId::IngestAdminSid,
    FieldId::IngestAdminTenantId,
    FieldId::WarehouseLogin,
    FieldId::WarehousePassword,
    FieldId::AlertsActionGroup,
    FieldId::AlertsEmail,
    FieldId::ZoneName,
];

/// Look up the required-field set for a profile.
///
/// Returns `None` for combinations with no defined set — an unset zone,
/// or a perimeter zone whose governance toggle is unanswered. Callers
/// treat `None` as export-disabled.
pub fn required_fields(profile: &FormProfile) -> Option<&'static [FieldId]> {
    match *profile {
        FormProfile::Unset => None,
        FormProfile::Perimeter { governance: None } => None,
        FormProfile::Perimeter {
            governance: Some(Toggle::Yes),
        } => Some(&REQUIRED_PERIMETER_GOVERNED),
        FormProfile::Perimeter {
            governance: Some(Toggle::No),
        } => Some(&REQUIRED_COMMON),
        FormProfile::Landing { .. } => Some(&REQUIRED_LANDING),
    }
}
