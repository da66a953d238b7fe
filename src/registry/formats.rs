use regex::{Regex, RegexBuilder};

/// How a tracking or explorer URL is built from an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlTemplate {
    /// `base + id`
    Append(&'static str),
    /// Every `{id}` in the template is replaced by the identifier
    Substitute(&'static str),
}

impl UrlTemplate {
    pub fn render(&self, id: &str) -> String {
        match self {
            UrlTemplate::Append(base) => format!("{}{}", base, id),
            UrlTemplate::Substitute(template) => template.replace("{id}", id),
        }
    }
}

/// Raw descriptor record for one partner's order-ID shape
#[derive(Debug, Clone, Copy)]
pub struct PartnerDescriptor {
    pub key: &'static str,
    pub display_name: &'static str,
    pub pattern: &'static str,
    pub case_insensitive: bool,
    pub url_template: UrlTemplate,
    pub static_url: Option<&'static str>,
    pub description: &'static str,
}

/// Raw descriptor record for one blockchain transaction-hash shape
#[derive(Debug, Clone, Copy)]
pub struct ChainDescriptor {
    pub key: &'static str,
    pub display_name: &'static str,
    pub pattern: &'static str,
    pub case_insensitive: bool,
    pub explorer: UrlTemplate,
    pub description: &'static str,
}

/// Compiled partner format
#[derive(Debug, Clone)]
pub struct PartnerFormat {
    pub key: &'static str,
    pub display_name: &'static str,
    pub pattern: Regex,
    pub url_template: UrlTemplate,
    /// Fixed link used instead of the template, for partners whose status page
    /// sits behind a login and cannot be deep-linked.
    pub static_url: Option<&'static str>,
    pub description: &'static str,
}

impl PartnerFormat {
    pub fn matches(&self, id: &str) -> bool {
        self.pattern.is_match(id)
    }

    pub fn tracking_url(&self, id: &str) -> String {
        match self.static_url {
            Some(url) => url.to_string(),
            None => self.url_template.render(id),
        }
    }
}

/// Compiled chain format
#[derive(Debug, Clone)]
pub struct ChainFormat {
    pub key: &'static str,
    pub display_name: &'static str,
    pub pattern: Regex,
    pub explorer: UrlTemplate,
    pub description: &'static str,
}

impl ChainFormat {
    pub fn matches(&self, hash: &str) -> bool {
        self.pattern.is_match(hash)
    }

    pub fn explorer_url(&self, hash: &str) -> String {
        self.explorer.render(hash)
    }
}

/// Compile a pattern so it must match the whole identifier.
///
/// Identifiers are ASCII: `\d` means `[0-9]` and case folding only maps `a-z`
/// to `A-Z`, so digits from other scripts or letters like U+212A KELVIN SIGN
/// never match.
pub fn anchored(pattern: &str, case_insensitive: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{})$", pattern))
        .unicode(false)
        .case_insensitive(case_insensitive)
        .build()
}
