//! Classification options
//!
//! Passed in from JavaScript as a plain object; every field has a default so
//! `{}` is a valid options value.

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;
use crate::registry::FormatRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyOptions {
    // Log every format tested
    #[serde(default)]
    pub verbose_debug: bool,
    // Restrict partner matching to these keys; chain detection always runs
    #[serde(default)]
    pub partners: Option<Vec<String>>,
}

impl ClassifyOptions {
    /// Reject filters naming partners the registry does not know
    pub fn validate(&self, registry: &FormatRegistry) -> Result<(), ClassifyError> {
        if let Some(keys) = &self.partners {
            for key in keys {
                if registry.partner(key).is_none() {
                    return Err(ClassifyError::UnknownPartner(key.clone()));
                }
            }
        }
        Ok(())
    }

    pub fn allows_partner(&self, key: &str) -> bool {
        match &self.partners {
            Some(keys) => keys.iter().any(|k| k == key),
            None => true,
        }
    }
}
