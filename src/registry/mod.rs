//! Format registry
//!
//! Holds the partner order-ID formats and the blockchain transaction-hash
//! formats the classifier tests input against. Tables are compiled once and
//! never mutated.

pub mod formats;
pub mod table;


use std::collections::HashSet;
use lazy_static::lazy_static;

use crate::error::RegistryError;
pub use formats::{anchored, ChainFormat, ChainDescriptor, PartnerFormat, PartnerDescriptor, UrlTemplate};

lazy_static! {
    static ref BUILTIN: FormatRegistry = FormatRegistry::from_descriptors(table::PARTNERS, table::CHAINS)
        .expect("built-in format table must compile");
}

/// Ordered, read-only collection of partner and chain formats
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    partners: Vec<PartnerFormat>,
    chains: Vec<ChainFormat>,
}

impl FormatRegistry {
    /// Compile descriptor tables, keeping their order
    pub fn from_descriptors(partners: &[PartnerDescriptor], chains: &[ChainDescriptor]) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut partner_formats = Vec::with_capacity(partners.len());
        for desc in partners {
            if !seen.insert(desc.key) {
                return Err(RegistryError::DuplicateKey(desc.key.to_string()));
            }
            partner_formats.push(PartnerFormat {
                key: desc.key,
                display_name: desc.display_name,
                pattern: compile(desc.key, desc.pattern, desc.case_insensitive)?,
                url_template: desc.url_template,
                static_url: desc.static_url,
                description: desc.description,
            });
        }

        seen.clear();
        let mut chain_formats = Vec::with_capacity(chains.len());
        for desc in chains {
            if !seen.insert(desc.key) {
                return Err(RegistryError::DuplicateKey(desc.key.to_string()));
            }
            chain_formats.push(ChainFormat {
                key: desc.key,
                display_name: desc.display_name,
                pattern: compile(desc.key, desc.pattern, desc.case_insensitive)?,
                explorer: desc.explorer,
                description: desc.description,
            });
        }

        Ok(Self {
            partners: partner_formats,
            chains: chain_formats,
        })
    }

    /// The baked-in table
    pub fn builtin() -> &'static FormatRegistry {
        &BUILTIN
    }

    pub fn partner_formats(&self) -> &[PartnerFormat] {
        &self.partners
    }

    /// Chain formats in priority order
    pub fn chain_formats(&self) -> &[ChainFormat] {
        &self.chains
    }

    pub fn partner(&self, key: &str) -> Option<&PartnerFormat> {
        self.partners.iter().find(|p| p.key == key)
    }

    pub fn chain(&self, key: &str) -> Option<&ChainFormat> {
        self.chains.iter().find(|c| c.key == key)
    }

    pub fn partner_keys(&self) -> Vec<&'static str> {
        self.partners.iter().map(|p| p.key).collect()
    }

    pub fn chain_keys(&self) -> Vec<&'static str> {
        self.chains.iter().map(|c| c.key).collect()
    }
}

fn compile(key: &str, pattern: &str, case_insensitive: bool) -> Result<regex::Regex, RegistryError> {
    anchored(pattern, case_insensitive).map_err(|source| RegistryError::InvalidPattern {
        key: key.to_string(),
        source,
    })
}
