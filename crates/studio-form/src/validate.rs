//! Form validation against the field registry.

use regex::Regex;
use tracing::warn;

use studio_model::{FieldSpec, FieldValidity, FieldValues, FormProfile, FormValidation, field_registry};

use crate::required::required_fields;

/// Validate every field under the given profile.
///
/// A required field must be non-empty, sit inside its length bounds, and
/// match its pattern when one is declared. Fields outside the active
/// required set are reported [`FieldValidity::Valid`] regardless of
/// content. Profiles with no defined requirement set produce an
/// export-disabled result.
pub fn validate_form(profile: &FormProfile, values: &FieldValues) -> FormValidation {
    let Some(required) = required_fields(profile) else {
        return FormValidation::export_disabled();
    };

    let mut validation = FormValidation {
        fields: Default::default(),
        is_valid: true,
    };
    for spec in field_registry() {
        let validity = if required.contains(&spec.id) {
            check_field(&spec, values.get(spec.id))
        } else {
            FieldValidity::Valid
        };
        if !validity.is_valid() {
            validation.is_valid = false;
        }
        validation.fields.insert(spec.id, validity);
    }
    validation
}

/// Single-flag shorthand used to gate the export controls.
pub fn is_form_valid(profile: &FormProfile, values: &FieldValues) -> bool {
    validate_form(profile, values).is_valid
}

fn check_field(spec: &FieldSpec, value: &str) -> FieldValidity {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldValidity::Empty;
    }
    let length = trimmed.chars().count();
    if spec.min_len.is_some_and(|min| length < min)
        || spec.max_len.is_some_and(|max| length > max)
    {
        return FieldValidity::LengthOutOfRange;
    }
    if let Some(pattern) = spec.pattern {
        if !pattern_matches(pattern, trimmed) {
            return FieldValidity::PatternMismatch;
        }
    }
    FieldValidity::Valid
}

fn pattern_matches(pattern: &str, value: &str) -> bool {
    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(value),
        Err(error) => {
            // Registry patterns are static; failing closed keeps the
            // export controls disabled if one is ever broken.
            warn!(%pattern, %error, "field pattern failed to compile");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use studio_model::FieldId;

    use super::*;

    #[test]
    fn length_bounds_checked_before_pattern() {
        let spec = field_registry()
            .into_iter()
            .find(|spec| spec.id == FieldId::ZoneName)
            .unwrap();
        assert_eq!(check_field(&spec, "abc"), FieldValidity::LengthOutOfRange);
        assert_eq!(check_field(&spec, "zone-01-x"), FieldValidity::PatternMismatch);
        assert_eq!(check_field(&spec, "zone01"), FieldValidity::Valid);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let spec = field_registry()
            .into_iter()
            .find(|spec| spec.id == FieldId::Project)
            .unwrap();
        assert_eq!(check_field(&spec, "   "), FieldValidity::Empty);
    }
}
