//! Validation outcome types.
//!
//! Validation problems are data, never errors: the form controller reports
//! a [`FormValidation`] and the embedder reacts by enabling or disabling
//! the export controls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// Validity of a single field under the current profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValidity {
    /// Satisfied, or exempt because the profile does not require the field.
    Valid,
    /// Required but empty.
    Empty,
    /// Required, non-empty, but the pattern does not match.
    PatternMismatch,
    /// Required, non-empty, but outside the declared length bounds.
    LengthOutOfRange,
}

impl FieldValidity {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Aggregated validation state of the whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidation {
    pub fields: BTreeMap<FieldId, FieldValidity>,
    /// True only when every required field validated. Gates the export
    /// controls.
    pub is_valid: bool,
}

impl FormValidation {
    /// An all-invalid result used for profiles with no defined requirement
    /// set (zone unset, unanswered governance toggle).
    pub fn export_disabled() -> Self {
        Self {
            fields: BTreeMap::new(),
            is_valid: false,
        }
    }

    /// Fields that currently block the export controls.
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|(_, validity)| !validity.is_valid())
            .map(|(id, _)| *id)
            .collect()
    }
}
