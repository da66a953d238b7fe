//! REST-shaped responses
//!
//! Pure builders for the payloads an HTTP layer serves:
//! - `GET  /api/lookup/{id}` -> [`lookup`]
//! - `POST /api/lookup`      -> [`lookup_body`]
//! - `GET  /api/health`      -> [`health`]
//!
//! The HTTP layer only has to serialize the value and use [`LookupResponse::status_code`].

use serde::{Deserialize, Serialize};

use crate::classify::classify_with;
use crate::console_log;
use crate::error::ClassifyError;
use crate::registry::FormatRegistry;
use crate::types::{ChainMatch, ClassificationResult, PartnerMatch};

/// Reason code for body parse failures
pub const MALFORMED_BODY: &str = "malformed_body";

/// Lookup payload, shared by the GET and POST accessors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub is_chain_transaction: bool,
    pub chain: Option<ChainMatch>,
    pub results: Vec<PartnerMatch>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LookupResponse {
    pub fn from_result(result: ClassificationResult) -> Self {
        let count = result.count();
        Self {
            success: true,
            order_id: Some(result.input),
            is_chain_transaction: result.is_chain_transaction,
            chain: result.chain,
            results: result.partners,
            count,
            error: None,
            reason: None,
        }
    }

    pub fn input_error(reason: &str, message: String) -> Self {
        Self {
            success: false,
            order_id: None,
            is_chain_transaction: false,
            chain: None,
            results: Vec::new(),
            count: 0,
            error: Some(message),
            reason: Some(reason.to_string()),
        }
    }

    /// HTTP status an HTTP layer should answer with
    pub fn status_code(&self) -> u16 {
        if self.success {
            200
        } else {
            400
        }
    }
}

impl From<ClassifyError> for LookupResponse {
    fn from(e: ClassifyError) -> Self {
        LookupResponse::input_error(e.reason_code(), e.to_string())
    }
}

/// `POST /api/lookup` body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    #[serde(default, alias = "id")]
    pub order_id: Option<OrderIdField>,
}

/// Numeric IDs such as Banxa's are often sent as JSON numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrderIdField {
    Text(String),
    Number(serde_json::Number),
}

impl OrderIdField {
    pub fn into_string(self) -> String {
        match self {
            OrderIdField::Text(s) => s,
            OrderIdField::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub supported_partners: Vec<String>,
    pub supported_chains: Vec<String>,
}

/// Lookup keyed by path segment
pub fn lookup(id: &str) -> LookupResponse {
    lookup_in(FormatRegistry::builtin(), id)
}

pub fn lookup_in(registry: &FormatRegistry, id: &str) -> LookupResponse {
    match classify_with(registry, id) {
        Ok(result) => LookupResponse::from_result(result),
        Err(e) => e.into(),
    }
}

/// Lookup keyed by a JSON body field
pub fn lookup_body(body: &str) -> LookupResponse {
    let request: LookupRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            console_log!("Rejecting lookup body: {}", e);
            return LookupResponse::input_error(MALFORMED_BODY, format!("Invalid request body: {}", e));
        }
    };
    let order_id = request.order_id.map(OrderIdField::into_string).unwrap_or_default();
    lookup(&order_id)
}

/// Liveness and capabilities
pub fn health(timestamp: String) -> HealthResponse {
    let registry = FormatRegistry::builtin();
    HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        supported_partners: registry.partner_keys().into_iter().map(String::from).collect(),
        supported_chains: registry.chain_keys().into_iter().map(String::from).collect(),
    }
}
