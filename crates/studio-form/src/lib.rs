//! Form controller for the template builder.
//!
//! This crate derives everything the form layout needs from the three
//! discriminator inputs:
//!
//! - **visibility**: which dependent field groups are shown and which
//!   resource tabs are enabled, as a pure total function of the profile
//! - **requirements**: the fixed table of fields each profile demands
//! - **validation**: per-field validity and the single flag gating the
//!   export controls

pub mod required;
pub mod validate;
pub mod visibility;

pub use required::required_fields;
pub use validate::{is_form_valid, validate_form};
pub use visibility::{
    ResourceTabs, TabState, Visibility, VisibilityState, compute_visibility,
    documentation_visibility,
};
