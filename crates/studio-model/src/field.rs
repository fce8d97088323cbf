//! Field registry for the template-builder form.
//!
//! Every validated input has a [`FieldSpec`] describing its semantic kind,
//! validation pattern and length bounds. The registry is data, not state:
//! current values live in [`FieldValues`], visibility and requirement are
//! derived elsewhere from the form profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validation patterns shared between fields.
///
/// These mirror the patterns enforced by the form widgets, so a value that
/// passes here renders without a widget-level warning as well.
pub mod patterns {
    /// Three-letter organisation code.
    pub const ORG_CODE: &str = r"^[A-Za-z]{3}$";
    /// Unbroken alphanumeric token (zone names, storage account names).
    pub const ALPHANUMERIC: &str = r"^[A-Za-z0-9]+$";
    /// Canonical lowercase-hex GUID with dashes.
    pub const GUID: &str =
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";
    /// Dotted-quad IPv4 address.
    pub const IPV4: &str =
        r"^(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}$";
}

/// Identifier of a validated form field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    OrganisationCode,
    Project,
    SubscriptionId,
    DmzSubscriptionId,
    GovernanceAdminTenantId,
    ReleasedBy,
    Version,
    IpRange,
    StorageRawName,
    StorageCuratedName,
    IngestAdminSid,
    IngestAdminTenantId,
    WarehouseLogin,
    WarehousePassword,
    AlertsActionGroup,
    AlertsEmail,
    ZoneName,
}

impl FieldId {
    /// Every validated field, in form order.
    pub const ALL: [FieldId; 17] = [
        FieldId::OrganisationCode,
        FieldId::Project,
        FieldId::SubscriptionId,
        FieldId::DmzSubscriptionId,
        FieldId::GovernanceAdminTenantId,
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
}

/// Semantic kind of an input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Choice,
}

/// Static description of one form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Regex the value must satisfy when the field is required.
    pub pattern: Option<&'static str>,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub placeholder: Option<&'static str>,
    pub default: Option<&'static str>,
}

impl FieldSpec {
    fn text(id: FieldId, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Text,
            pattern: None,
            min_len: None,
            max_len: None,
            placeholder: None,
            default: None,
        }
    }

    fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    fn bounds(mut self, min: usize, max: usize) -> Self {
        self.min_len = Some(min);
        self.max_len = Some(max);
        self
    }

    fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// The full field registry, in form order.
pub fn field_registry() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text(FieldId::OrganisationCode, "Organisation code")
            .pattern(patterns::ORG_CODE)
            .bounds(3, 3)
            .placeholder("abc"),
        FieldSpec::text(FieldId::Project, "Project").placeholder("Data Platform"),
        FieldSpec::text(FieldId::SubscriptionId, "Subscription")
            .pattern(patterns::GUID)
            .bounds(36, 36)
            .placeholder("00000000-0000-0000-0000-000000000000"),
        FieldSpec::text(FieldId::DmzSubscriptionId, "DMZ subscription")
            .pattern(patterns::GUID)
            .bounds(36, 36)
            .placeholder("00000000-0000-0000-0000-000000000000"),
        FieldSpec::text(FieldId::GovernanceAdminTenantId, "Governance admin tenant id")
            .pattern(patterns::GUID)
            .bounds(36, 36)
            .placeholder("00000000-0000-0000-0000-000000000000"),
        FieldSpec::text(FieldId::ReleasedBy, "Released by").placeholder("name@company.com"),
        FieldSpec::text(FieldId::Version, "Version").placeholder("1.0.0"),
        FieldSpec::text(FieldId::IpRange, "IP range")
            .pattern(patterns::IPV4)
            .bounds(7, 15)
            .default_value("10.0.0.0"),
        FieldSpec::text(FieldId::StorageRawName, "Raw storage account name")
            .pattern(patterns::ALPHANUMERIC)
            .default_value("raw1"),
        FieldSpec::text(FieldId::StorageCuratedName, "Curated storage account name")
            .pattern(patterns::ALPHANUMERIC)
            .default_value("cur1"),
        FieldSpec::text(FieldId::IngestAdminSid, "SQL admin sid")
            .pattern(patterns::GUID)
            .bounds(36, 36)
            .placeholder("00000000-0000-0000-0000-000000000000"),
        FieldSpec::text(FieldId::IngestAdminTenantId, "SQL admin tenant id")
            .pattern(patterns::GUID)
            .bounds(36, 36)
            .placeholder("00000000-0000-0000-0000-000000000000"),
        FieldSpec::text(FieldId::WarehouseLogin, "Warehouse admin login")
            .pattern(patterns::ALPHANUMERIC)
            .placeholder("sqladmin"),
        FieldSpec::text(FieldId::WarehousePassword, "Warehouse admin password"),
        FieldSpec::text(FieldId::AlertsActionGroup, "Action group")
            .default_value("AlertsGroup"),
        FieldSpec::text(FieldId::AlertsEmail, "Alerts email").placeholder("name@company.com"),
        FieldSpec::text(FieldId::ZoneName, "Zone name")
            .pattern(patterns::ALPHANUMERIC)
            .bounds(5, 10)
            .placeholder("zone01"),
    ]
}

/// Current values of the form fields.
///
/// Absent entries read as the empty string, matching a widget the user has
/// not touched. Defaults from the registry are applied by the embedding
/// layout at construction, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    values: BTreeMap<FieldId, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values seeded with every registry default.
    pub fn with_defaults() -> Self {
        let mut values = Self::new();
        for spec in field_registry() {
            if let Some(default) = spec.default {
                values.set(spec.id, default);
            }
        }
        values
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.values.insert(id, value.into());
    }

    pub fn get(&self, id: FieldId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self, id: FieldId) -> bool {
        self.get(id).trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_only_fields_that_declare_one() {
        let values = FieldValues::with_defaults();
        assert_eq!(values.get(FieldId::IpRange), "10.0.0.0");
        assert_eq!(values.get(FieldId::StorageRawName), "raw1");
        assert_eq!(values.get(FieldId::Project), "");
    }

    #[test]
    fn bounds_follow_the_widget_constraints() {
        let registry = field_registry();
        let zone = registry
            .iter()
            .find(|spec| spec.id == FieldId::ZoneName)
            .unwrap();
        assert_eq!(zone.min_len, Some(5));
        assert_eq!(zone.max_len, Some(10));
    }
}
