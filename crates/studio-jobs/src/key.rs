//! Invocation keys.

use serde::Serialize;
use sha2::Digest;

use crate::error::{JobError, Result};

/// Identity of one job invocation: a sha256 over the operation name and
/// its serialized inputs. Two clicks with identical inputs share a key,
/// which is what de-duplicates them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobKey(String);

impl JobKey {
    /// Derive a key from an operation name and its input payload.
    pub fn derive<P: Serialize>(operation: &str, payload: &P) -> Result<Self> {
        let body = serde_json::to_vec(payload).map_err(JobError::CacheEncode)?;
        let mut hasher = sha2::Sha256::new();
        hasher.update(operation.as_bytes());
        hasher.update([0u8]);
        hasher.update(&body);
        Ok(Self(hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_invocation_same_key() {
        let a = JobKey::derive("export", &("landing", 3)).unwrap();
        let b = JobKey::derive("export", &("landing", 3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn operation_name_separates_keys() {
        let a = JobKey::derive("export", &"landing").unwrap();
        let b = JobKey::derive("summary", &"landing").unwrap();
        assert_ne!(a, b);
    }
}
