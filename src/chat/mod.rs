//! Chat-bot adapter
//!
//! Pulls a candidate identifier out of a free-text support message and turns
//! the classification into a chat reply. Extraction is a substring *search*;
//! the classifier still requires the extracted token to match a format in full.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::console_log;
use crate::types::ClassificationResult;

// Candidates are capture group 1. Word boundaries are spelled out as ASCII
// classes: a non-ASCII letter next to a token still counts as a boundary.
lazy_static! {
    static ref EVM_HASH: Regex =
        Regex::new(r"(?:^|[^0-9A-Za-z_])(0x[0-9a-fA-F]{64})(?:$|[^0-9A-Za-z_])").unwrap();
    static ref UUID: Regex =
        Regex::new(r"(?i-u)([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})").unwrap();
    static ref CHAR14: Regex =
        Regex::new(r"(?:^|[^0-9A-Za-z_])([a-zA-Z0-9]{14})(?:$|[^0-9A-Za-z_])").unwrap();
}

const GREETING: &str = "I can help you look up your cryptocurrency order! \
    Please share your order ID and I'll find the relevant transaction details for you.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum ChatReply {
    Text(String),
    RichMessage(RichMessage),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichMessage {
    pub text: String,
    pub buttons: Vec<ChatButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatButton {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub value: String,
    pub style: String,
}

impl ChatButton {
    fn link(text: String, url: &str) -> Self {
        Self {
            kind: "button".to_string(),
            text,
            value: url.to_string(),
            style: "primary".to_string(),
        }
    }
}

/// Find the first identifier-looking token in a message
pub fn extract_order_id(message: &str) -> Option<String> {
    [&*EVM_HASH, &*UUID, &*CHAR14]
        .iter()
        .find_map(|re| re.captures(message).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str().to_string())
}

/// Answer one inbound chat message
pub fn handle_message(message: &str) -> ChatReply {
    let order_id = match extract_order_id(message) {
        Some(id) => id,
        None => return ChatReply::Text(GREETING.to_string()),
    };

    match classify(&order_id) {
        Ok(result) => format_reply(&order_id, &result),
        Err(e) => {
            console_log!("Chat lookup failed for '{}': {}", order_id, e);
            ChatReply::Text(
                "Sorry, I couldn't process your order ID. Please make sure it's a valid order ID and try again."
                    .to_string(),
            )
        }
    }
}

/// Rich reply with one button per match
pub fn format_reply(order_id: &str, result: &ClassificationResult) -> ChatReply {
    if let Some(chain) = &result.chain {
        return ChatReply::RichMessage(RichMessage {
            text: format!(
                "{} looks like a {} transaction hash, not an order ID. \
                 You can follow it on the block explorer:",
                order_id, chain.display_name
            ),
            buttons: vec![ChatButton::link(
                format!("View {} Transaction", chain.display_name),
                &chain.explorer_url,
            )],
        });
    }

    if result.partners.is_empty() {
        return ChatReply::Text(format!(
            "I couldn't find any matching services for order ID: {}. Please check the order ID and try again.",
            order_id
        ));
    }

    let mut text = format!(
        "I found {} matching service(s) for your order ID: {}\n\n",
        result.count(),
        order_id
    );
    let lines: Vec<String> = result
        .partners
        .iter()
        .map(|p| format!("• **{}**: {}", p.display_name, p.description))
        .collect();
    text.push_str(&lines.join("\n"));
    if result.is_ambiguous() {
        text.push_str("\n\nThis order format could match more than one partner. Please pick the one you used.");
    }
    text.push_str("\n\nClick the buttons below to view your order details:");

    ChatReply::RichMessage(RichMessage {
        text,
        buttons: result
            .partners
            .iter()
            .map(|p| ChatButton::link(format!("View {} Order", p.display_name), &p.tracking_url))
            .collect(),
    })
}

/// Plain-text reply listing `name: url` lines
pub fn format_simple_reply(order_id: &str, result: &ClassificationResult) -> ChatReply {
    if let Some(chain) = &result.chain {
        return ChatReply::Text(format!(
            "{} transaction hash detected: {}",
            chain.display_name, chain.explorer_url
        ));
    }

    if result.partners.is_empty() {
        return ChatReply::Text(format!("No matching services found for order ID: {}", order_id));
    }

    let links: Vec<String> = result
        .partners
        .iter()
        .map(|p| format!("{}: {}", p.display_name, p.tracking_url))
        .collect();
    ChatReply::Text(format!(
        "Found {} matching service(s) for order ID: {}\n\n{}",
        result.count(),
        order_id,
        links.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_uuid_from_sentence() {
        let message = "hi, my moonpay order 5a062495-c006-4e91-b243-f5c9880079a7 is stuck";
        assert_eq!(
            extract_order_id(message).as_deref(),
            Some("5a062495-c006-4e91-b243-f5c9880079a7")
        );
    }

    #[test]
    fn test_extract_char14_needs_word_boundary() {
        assert_eq!(extract_order_id("id is 1234567890abcd.").as_deref(), Some("1234567890abcd"));
        assert_eq!(extract_order_id("id is 1234567890abcdef"), None);
    }

    #[test]
    fn test_extract_next_to_non_ascii_letter() {
        assert_eq!(extract_order_id("é1234567890abcd").as_deref(), Some("1234567890abcd"));
        assert_eq!(extract_order_id("ref:1234567890abcdé").as_deref(), Some("1234567890abcd"));
        assert_eq!(extract_order_id("a_1234567890abcd"), None);
    }

    #[test]
    fn test_extract_prefers_evm_hash() {
        let hash = format!("0x{}", "a".repeat(64));
        let message = format!("sent it, tx {} thanks", hash);
        assert_eq!(extract_order_id(&message), Some(hash));
    }

    #[test]
    fn test_no_id_gets_greeting() {
        assert_eq!(handle_message("where is my order?"), ChatReply::Text(GREETING.to_string()));
    }

    #[test]
    fn test_ambiguous_reply_has_button_per_partner() {
        match handle_message("order 1234567890abcd please") {
            ChatReply::RichMessage(rich) => {
                assert_eq!(rich.buttons.len(), 2);
                assert_eq!(rich.buttons[0].value, "https://changenow.io/exchange/1234567890abcd");
                assert_eq!(rich.buttons[1].value, "https://letsexchange.io/exchange/1234567890abcd");
                assert!(rich.text.contains("more than one partner"));
            }
            other => panic!("expected rich message, got {:?}", other),
        }
    }

    #[test]
    fn test_chain_reply_points_to_explorer() {
        let hash = format!("0x{}", "b".repeat(64));
        match handle_message(&hash) {
            ChatReply::RichMessage(rich) => {
                assert_eq!(rich.buttons.len(), 1);
                assert_eq!(rich.buttons[0].value, format!("https://blockscan.com/tx/{}", hash));
            }
            other => panic!("expected rich message, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_reply_lists_links() {
        let result = classify("17258381").unwrap();
        assert_eq!(
            format_simple_reply("17258381", &result),
            ChatReply::Text(
                "Found 1 matching service(s) for order ID: 17258381\n\nBanxa: https://edge3.banxa.com/status/17258381"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_reply_wire_shape() {
        let value = serde_json::to_value(ChatReply::Text("hello".to_string())).unwrap();
        assert_eq!(value, serde_json::json!({"type": "text", "content": "hello"}));
    }
}
