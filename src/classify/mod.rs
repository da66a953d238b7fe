//! Order ID classification
//!
//! Chain transaction hashes are checked first, in priority order, and the first
//! hit ends classification. Only when no chain format matches are partner
//! formats tried, and then every match is collected.

use crate::console_log;
use crate::error::ClassifyError;
use crate::options::ClassifyOptions;
use crate::registry::FormatRegistry;
use crate::types::{ChainMatch, ClassificationResult, PartnerMatch};

/// Classify against the built-in registry
pub fn classify(input: &str) -> Result<ClassificationResult, ClassifyError> {
    classify_with(FormatRegistry::builtin(), input)
}

/// Classify against a specific registry
pub fn classify_with(registry: &FormatRegistry, input: &str) -> Result<ClassificationResult, ClassifyError> {
    classify_with_options(registry, input, &ClassifyOptions::default())
}

pub fn classify_with_options(
    registry: &FormatRegistry,
    input: &str,
    options: &ClassifyOptions,
) -> Result<ClassificationResult, ClassifyError> {
    let id = input.trim();
    if id.is_empty() {
        return Err(ClassifyError::EmptyInput);
    }
    options.validate(registry)?;

    if let Some(chain) = detect_chain(registry, id, options.verbose_debug) {
        console_log!("'{}' is a {} transaction hash", id, chain.display_name);
        return Ok(ClassificationResult::from_chain(id, chain));
    }

    let partners = match_partners(registry, id, options);
    console_log!("'{}' matched {} partner format(s)", id, partners.len());
    Ok(ClassificationResult::from_partners(id, partners))
}

/// First chain format, in priority order, that accepts the whole hash
pub fn detect_chain(registry: &FormatRegistry, id: &str, verbose: bool) -> Option<ChainMatch> {
    registry
        .chain_formats()
        .iter()
        .find(|format| {
            let hit = format.matches(id);
            if verbose {
                console_log!("chain {}: {}", format.key, hit);
            }
            hit
        })
        .map(|format| ChainMatch {
            chain_key: format.key.to_string(),
            display_name: format.display_name.to_string(),
            description: format.description.to_string(),
            explorer_url: format.explorer_url(id),
            raw_input: id.to_string(),
        })
}

/// Every allowed partner format that accepts the whole ID, in table order
pub fn match_partners(registry: &FormatRegistry, id: &str, options: &ClassifyOptions) -> Vec<PartnerMatch> {
    registry
        .partner_formats()
        .iter()
        .filter(|format| options.allows_partner(format.key))
        .filter(|format| {
            let hit = format.matches(id);
            if options.verbose_debug {
                console_log!("partner {}: {}", format.key, hit);
            }
            hit
        })
        .map(|format| PartnerMatch {
            key: format.key.to_string(),
            display_name: format.display_name.to_string(),
            description: format.description.to_string(),
            tracking_url: format.tracking_url(id),
            login_required: format.static_url.is_some(),
        })
        .collect()
}
