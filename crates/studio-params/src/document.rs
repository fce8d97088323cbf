//! The parameter-file document shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use studio_model::Zone;

use crate::error::{ParamsError, Result};

/// A deployment parameter file: schema header plus named parameters, each
/// wrapped in a `{ "value": … }` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "contentVersion")]
    pub content_version: String,
    pub parameters: Map<String, Value>,
}

impl ParameterDocument {
    /// Names of every declared parameter.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.keys().map(String::as_str).collect()
    }

    /// The unwrapped `value` of a parameter, if declared.
    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name).and_then(|wrapper| wrapper.get("value"))
    }

    /// Replace an existing parameter's value.
    ///
    /// Never inserts: a name the template does not declare is a
    /// [`ParamsError::MissingTemplateKey`].
    pub fn override_parameter(&mut self, zone: Zone, name: &str, value: Value) -> Result<()> {
        if !self.parameters.contains_key(name) {
            return Err(ParamsError::MissingTemplateKey {
                zone,
                key: name.to_string(),
            });
        }
        self.parameters
            .insert(name.to_string(), json!({ "value": value }));
        Ok(())
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| ParamsError::Template {
            name: "assembled",
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParameterDocument {
        serde_json::from_value(json!({
            "$schema": "https://example.com/parameters.json#",
            "contentVersion": "1.0.0.0",
            "parameters": {
                "organisation": { "value": "org" }
            }
        }))
        .expect("sample document")
    }

    #[test]
    fn override_replaces_existing_value() {
        let mut doc = sample();
        doc.override_parameter(Zone::Perimeter, "organisation", json!("abc"))
            .unwrap();
        assert_eq!(doc.value_of("organisation"), Some(&json!("abc")));
    }

    #[test]
    fn override_never_inserts() {
        let mut doc = sample();
        let err = doc
            .override_parameter(Zone::Perimeter, "unknownParam", json!(1))
            .unwrap_err();
        assert!(matches!(
            err,
            ParamsError::MissingTemplateKey { key, .. } if key == "unknownParam"
        ));
        assert_eq!(doc.parameter_names(), vec!["organisation"]);
    }
}
