//! The supported payment-API providers and their static knowledge table.

use std::fmt::{self, Formatter};
use std::str::FromStr;

use crate::error::RagError;

/// One of the two supported payment-API providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Stripe,
    Adyen,
}

impl Provider {
    /// All providers in the fixed default order.
    pub const ALL: [Provider; 2] = [Provider::Stripe, Provider::Adyen];

    /// Stable lowercase key used in paths and chunk IDs.
    pub fn key(&self) -> &'static str {
        match self {
            Provider::Stripe => "stripe",
            Provider::Adyen => "adyen",
        }
    }

    /// The static descriptive record for this provider.
    pub fn info(&self) -> &'static ProviderInfo {
        match self {
            Provider::Stripe => &STRIPE_INFO,
            Provider::Adyen => &ADYEN_INFO,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Provider {
    type Err = RagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        if normalized.eq_ignore_ascii_case("stripe") {
            Ok(Provider::Stripe)
        } else if normalized.eq_ignore_ascii_case("adyen") {
            Ok(Provider::Adyen)
        } else {
            Err(RagError::Config(format!(
                "unknown provider '{s}' (expected 'stripe' or 'adyen')"
            )))
        }
    }
}

/// The category of documentation indexed for a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    /// Pricing and positioning material.
    Business,
    /// Integration and API material.
    Technical,
}

impl DocType {
    /// Both document types in the fixed default order.
    pub const ALL: [DocType; 2] = [DocType::Business, DocType::Technical];

    /// Stable lowercase key used in paths and chunk IDs.
    pub fn key(&self) -> &'static str {
        match self {
            DocType::Business => "business",
            DocType::Technical => "technical",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Static descriptive attributes of a provider. Never mutated at runtime.
#[derive(Debug)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub best_for: &'static [&'static str],
}

static STRIPE_INFO: ProviderInfo = ProviderInfo {
    name: "Stripe",
    pros: &[
        "Easy and fast setup for developers",
        "Supports 135+ currencies and payment methods",
        "Great documentation and SDKs",
        "Powerful fraud detection (Stripe Radar)",
    ],
    cons: &[
        "Slightly higher fees for international transactions",
        "Limited customization in some regions",
    ],
    best_for: &[
        "Startups",
        "Quick go-to-market",
        "Businesses focused on North America and Europe",
    ],
};

static ADYEN_INFO: ProviderInfo = ProviderInfo {
    name: "Adyen",
    pros: &[
        "Unified global payments platform",
        "Direct acquiring licenses in many countries",
        "Better for scaling large enterprise businesses",
        "Advanced risk management and local compliance support",
    ],
    cons: &[
        "Complex setup compared to Stripe",
        "Better suited for larger companies",
    ],
    best_for: &[
        "Enterprises",
        "Global merchants",
        "Businesses operating across multiple continents",
    ],
};

/// Keywords that bias a query toward Stripe.
const STRIPE_KEYWORDS: [&str; 5] = ["startup", "fast", "simple", "quick", "easy"];
/// Keywords that bias a query toward Adyen.
const ADYEN_KEYWORDS: [&str; 5] =
    ["global", "international", "multi-currency", "enterprise", "scaling"];

/// Suggest providers matching a free-text description of the user's needs.
///
/// Keyword membership is tested on the lowercased query. A two-element
/// result is always ordered `[Stripe, Adyen]`; if neither keyword set
/// matches, both providers are returned in that default order.
pub fn recommend_providers(query: &str) -> Vec<Provider> {
    let query = query.to_lowercase();

    let mut recommendations = Vec::new();
    if STRIPE_KEYWORDS.iter().any(|keyword| query.contains(keyword)) {
        recommendations.push(Provider::Stripe);
    }
    if ADYEN_KEYWORDS.iter().any(|keyword| query.contains(keyword)) {
        recommendations.push(Provider::Adyen);
    }

    if recommendations.is_empty() {
        recommendations = Provider::ALL.to_vec();
    }

    recommendations
}

/// Render provider records as a Markdown block for display to the user.
pub fn format_recommendations(providers: &[Provider]) -> String {
    let mut output = String::new();

    for provider in providers {
        let info = provider.info();
        output.push_str(&format!("\n\n**{}**\n", info.name));
        output.push_str(&format!("**Best For:** {}\n", info.best_for.join(", ")));
        output.push_str(&format!("**Pros:** {}\n", info.pros.join(", ")));
        output.push_str(&format!("**Cons:** {}\n", info.cons.join(", ")));
    }

    output
}
