pub mod error;
pub mod field;
pub mod options;
pub mod profile;
pub mod validity;

pub use error::{ModelError, Result};
pub use field::{FieldId, FieldKind, FieldSpec, FieldValues, field_registry};
pub use options::{
    Access, BackupRedundancy, Environment, Location, PlatformFeatures, StorageSku, SubnetSuffix,
    VnetSuffix,
};
pub use profile::{FormProfile, Toggle, Zone};
pub use validity::{FieldValidity, FormValidation};
