//! Data structures returned by the classifier

use serde::{Deserialize, Serialize};

/// One partner whose order-ID format accepted the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerMatch {
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub tracking_url: String,
    /// The link is a static landing page; the user has to log in to find the order.
    pub login_required: bool,
}

/// The blockchain whose transaction-hash format accepted the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMatch {
    pub chain_key: String,
    pub display_name: String,
    pub description: String,
    pub explorer_url: String,
    pub raw_input: String,
}

/// Outcome of one classification.
///
/// A chain match and partner matches never appear together: when `chain` is
/// set, `partners` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub input: String,
    pub is_chain_transaction: bool,
    pub chain: Option<ChainMatch>,
    pub partners: Vec<PartnerMatch>,
}

impl ClassificationResult {
    pub fn from_chain(input: &str, chain: ChainMatch) -> Self {
        Self {
            input: input.to_string(),
            is_chain_transaction: true,
            chain: Some(chain),
            partners: Vec::new(),
        }
    }

    pub fn from_partners(input: &str, partners: Vec<PartnerMatch>) -> Self {
        Self {
            input: input.to_string(),
            is_chain_transaction: false,
            chain: None,
            partners,
        }
    }

    /// Number of partner matches
    pub fn count(&self) -> usize {
        self.partners.len()
    }

    /// Neither a chain hash nor any partner format
    pub fn is_empty(&self) -> bool {
        self.chain.is_none() && self.partners.is_empty()
    }

    /// More than one partner shares this ID shape; only the user knows which one they used
    pub fn is_ambiguous(&self) -> bool {
        self.partners.len() > 1
    }
}
