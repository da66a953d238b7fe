//! Built-in format tables
//!
//! Partner rows keep insertion order, which is the order matches are reported in.
//! Chain rows are in priority order: a `0x` hash must be seen as EVM before the
//! bare 64-hex Bitcoin shape gets a chance.

use super::formats::{ChainDescriptor, PartnerDescriptor, UrlTemplate};

const UUID: &str = r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";
const PAYMENT_PROCESSOR: &str = "Cryptocurrency payment processor";
const EXCHANGE_SERVICE: &str = "Cryptocurrency exchange service";

pub const PARTNERS: &[PartnerDescriptor] = &[
    PartnerDescriptor {
        key: "banxa",
        display_name: "Banxa",
        // strictly 6-8 digits, e.g. 17258381
        pattern: r"\d{6,8}",
        case_insensitive: false,
        url_template: UrlTemplate::Append("https://edge3.banxa.com/status/"),
        static_url: None,
        description: PAYMENT_PROCESSOR,
    },
    PartnerDescriptor {
        key: "paybis",
        display_name: "Paybis",
        // PB-prefixed, e.g. PB25014430124TX8
        pattern: r"PB[A-Z0-9]{10,15}",
        case_insensitive: true,
        url_template: UrlTemplate::Append("https://onramp.payb.is/?requestId="),
        static_url: Some("https://payb.is"),
        description: PAYMENT_PROCESSOR,
    },
    PartnerDescriptor {
        key: "moonpay",
        display_name: "Moonpay",
        pattern: UUID,
        case_insensitive: true,
        url_template: UrlTemplate::Append("https://buy.moonpay.com/transaction_receipt?transactionId="),
        static_url: None,
        description: PAYMENT_PROCESSOR,
    },
    PartnerDescriptor {
        key: "simplex",
        display_name: "Simplex",
        pattern: UUID,
        case_insensitive: true,
        url_template: UrlTemplate::Append("https://payment-status.simplex.com/#/"),
        static_url: None,
        description: PAYMENT_PROCESSOR,
    },
    PartnerDescriptor {
        key: "changenow",
        display_name: "ChangeNow",
        pattern: r"[a-zA-Z0-9]{14}",
        case_insensitive: false,
        url_template: UrlTemplate::Append("https://changenow.io/exchange/"),
        static_url: None,
        description: EXCHANGE_SERVICE,
    },
    PartnerDescriptor {
        key: "letsexchange",
        display_name: "LetsExchange",
        pattern: r"[a-zA-Z0-9]{14}",
        case_insensitive: false,
        url_template: UrlTemplate::Append("https://letsexchange.io/exchange/"),
        static_url: None,
        description: EXCHANGE_SERVICE,
    },
    PartnerDescriptor {
        key: "bity",
        display_name: "Bity",
        pattern: UUID,
        case_insensitive: true,
        url_template: UrlTemplate::Append("https://go.bity.com/order-status?reference="),
        static_url: None,
        description: "Swiss crypto exchange & payment processor",
    },
];

pub const CHAINS: &[ChainDescriptor] = &[
    ChainDescriptor {
        key: "evm",
        display_name: "EVM",
        pattern: r"0x[0-9a-f]{64}",
        case_insensitive: true,
        explorer: UrlTemplate::Substitute("https://blockscan.com/tx/{id}"),
        description: "EVM transaction hash (Ethereum, Polygon, BNB Chain, ...)",
    },
    ChainDescriptor {
        key: "bitcoin",
        display_name: "Bitcoin",
        pattern: r"[0-9a-f]{64}",
        case_insensitive: true,
        explorer: UrlTemplate::Substitute("https://mempool.space/tx/{id}"),
        description: "Bitcoin transaction ID",
    },
    ChainDescriptor {
        key: "solana",
        display_name: "Solana",
        // base58: no 0, O, I or l
        pattern: r"[1-9A-HJ-NP-Za-km-z]{87,88}",
        case_insensitive: false,
        explorer: UrlTemplate::Substitute("https://solscan.io/tx/{id}"),
        description: "Solana transaction signature",
    },
];
