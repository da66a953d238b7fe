//! Order lookup: guess which partner service issued an order ID
//!
//! The browser page calls the `#[wasm_bindgen]` exports below and gets plain
//! JS objects back. Native hosts use the modules directly.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use lazy_static::lazy_static;

pub mod utils;
pub mod error;
pub mod types;
pub mod options;
pub mod registry;
pub mod classify;
pub mod api;
pub mod chat;
pub mod stats;

pub use classify::{classify, classify_with, classify_with_options};
pub use error::{ClassifyError, RegistryError, StatsError};
pub use options::ClassifyOptions;
pub use registry::FormatRegistry;
pub use types::{ChainMatch, ClassificationResult, PartnerMatch};

use api::LookupResponse;
use stats::{StatsCounter, StatsResponse};

lazy_static! {
    static ref LINK_STATS: StatsCounter = StatsCounter::new();
}

/// Result structure returned to JavaScript for classification
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResult {
    pub success: bool,
    pub error: Option<String>,
    pub reason: Option<String>,
    pub result: Option<ClassificationResult>,
}

impl From<Result<ClassificationResult, ClassifyError>> for ClassifyResult {
    fn from(outcome: Result<ClassificationResult, ClassifyError>) -> Self {
        match outcome {
            Ok(result) => ClassifyResult {
                success: true,
                error: None,
                reason: None,
                result: Some(result),
            },
            Err(e) => ClassifyResult {
                success: false,
                error: Some(e.to_string()),
                reason: Some(e.reason_code().to_string()),
                result: None,
            },
        }
    }
}

/// Partner and chain formats the page can show as a legend
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatInfo {
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub is_chain: bool,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        console_log!("Failed to serialize result for JS: {}", e);
        JsValue::NULL
    })
}

/// Get current ISO 8601 timestamp from JavaScript
fn get_current_timestamp() -> String {
    let date = js_sys::Date::new_0();
    date.to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string())
}

#[wasm_bindgen]
pub fn classify_order_id(input: &str) -> JsValue {
    console_log!("Classifying: {}", input);
    to_js(&ClassifyResult::from(classify(input)))
}

#[wasm_bindgen]
pub fn classify_order_id_with_options(input: &str, options: JsValue) -> JsValue {
    let options: ClassifyOptions = if options.is_undefined() || options.is_null() {
        ClassifyOptions::default()
    } else {
        match serde_wasm_bindgen::from_value(options) {
            Ok(options) => options,
            Err(e) => {
                return to_js(&ClassifyResult {
                    success: false,
                    error: Some(format!("Invalid options: {}", e)),
                    reason: Some("invalid_options".to_string()),
                    result: None,
                })
            }
        }
    };

    let outcome = classify_with_options(FormatRegistry::builtin(), input, &options);
    to_js(&ClassifyResult::from(outcome))
}

/// `GET /api/lookup/{id}` payload
#[wasm_bindgen]
pub fn lookup_order(id: &str) -> JsValue {
    let response: LookupResponse = api::lookup(id);
    to_js(&response)
}

/// `POST /api/lookup` payload from a raw JSON body
#[wasm_bindgen]
pub fn lookup_order_body(body: &str) -> JsValue {
    to_js(&api::lookup_body(body))
}

#[wasm_bindgen]
pub fn health() -> JsValue {
    to_js(&api::health(get_current_timestamp()))
}

#[wasm_bindgen]
pub fn supported_formats() -> JsValue {
    let registry = FormatRegistry::builtin();
    let chains = registry.chain_formats().iter().map(|c| FormatInfo {
        key: c.key.to_string(),
        display_name: c.display_name.to_string(),
        description: c.description.to_string(),
        is_chain: true,
    });
    let partners = registry.partner_formats().iter().map(|p| FormatInfo {
        key: p.key.to_string(),
        display_name: p.display_name.to_string(),
        description: p.description.to_string(),
        is_chain: false,
    });
    let formats: Vec<FormatInfo> = partners.chain(chains).collect();
    to_js(&formats)
}

#[wasm_bindgen]
pub fn extract_order_id_from_message(message: &str) -> Option<String> {
    chat::extract_order_id(message)
}

#[wasm_bindgen]
pub fn chat_reply(message: &str) -> JsValue {
    to_js(&chat::handle_message(message))
}

/// Count one opened provider link and return the new tally
#[wasm_bindgen]
pub fn record_lookup(provider: &str) -> JsValue {
    to_js(&StatsResponse::from_increment(provider, LINK_STATS.increment(provider)))
}

/// Restore tallies saved by the page, e.g. from localStorage
#[wasm_bindgen]
pub fn load_stats(json: &str) -> Result<(), JsValue> {
    let counts = serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid stats JSON: {}", e)))?;
    LINK_STATS.replace(counts).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tallies as a JSON object string, ready for localStorage
#[wasm_bindgen]
pub fn stats_snapshot() -> Result<String, JsValue> {
    LINK_STATS.to_json().map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(start)]
pub fn main() {
    let registry = FormatRegistry::builtin();
    console_log!(
        "Order lookup module loaded: {} partner formats, {} chain formats",
        registry.partner_formats().len(),
        registry.chain_formats().len()
    );
}
