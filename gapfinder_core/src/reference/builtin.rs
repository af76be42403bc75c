//! Built-in reference tables.

use indexmap::IndexMap;

use super::{IndustryData, ReferenceData};
use crate::benchmarks::BenchmarkRegistry;
use crate::catalog::CardCatalog;
use crate::types::{
    BenchmarkRule, CardTags, CommunicationType as C, ConversionProximity as P, Stage,
    TouchpointCard, TrustLevel as T,
};

fn card(id: &str, name: &str, communication: C, trust: T, proximity: P) -> TouchpointCard {
    TouchpointCard::new(id, name, CardTags::new(communication, trust, proximity))
}

fn ecommerce_catalog() -> CardCatalog {
    CardCatalog::from_stages([
        (
            Stage::Awareness,
            vec![
                card("social-ads", "Social Media Ads", C::Persuasive, T::LowTrust, P::Discovery),
                card("google-ads", "Google Search Ads", C::Informational, T::LowTrust, P::Discovery),
                card("content-blog", "SEO Content/Blog", C::Informational, T::MediumTrust, P::Discovery),
                card("influencer", "Influencer Partnerships", C::SocialProof, T::MediumTrust, P::Discovery),
            ],
        ),
        (
            Stage::Consideration,
            vec![
                card("product-pages", "Product Detail Pages", C::Informational, T::MediumTrust, P::ConversionPrep),
                card("reviews", "Customer Reviews", C::SocialProof, T::HighTrust, P::ConversionPrep),
                card("comparison", "Product Comparison Tools", C::Informational, T::MediumTrust, P::ConversionPrep),
                card("live-chat", "Live Chat Support", C::Informational, T::MediumTrust, P::ConversionPrep),
                card("size-guide", "Size Guides/Product Info", C::Informational, T::LowTrust, P::ConversionPrep),
            ],
        ),
        (
            Stage::Decision,
            vec![
                card("cart", "Shopping Cart Page", C::Transactional, T::LowTrust, P::DirectConversion),
                card("checkout", "Checkout Process", C::Transactional, T::LowTrust, P::DirectConversion),
                card("security-badges", "Security Badges/Trust Signals", C::Informational, T::HighTrust, P::ConversionPrep),
                card("payment-options", "Payment Options Display", C::Informational, T::MediumTrust, P::ConversionPrep),
                card("return-policy", "Return Policy Clear Display", C::Informational, T::HighTrust, P::ConversionPrep),
            ],
        ),
        (
            Stage::Retention,
            vec![
                card("order-confirm", "Order Confirmation Email", C::Transactional, T::LowTrust, P::Nurture),
                card("shipping-notify", "Shipping Notification", C::Informational, T::LowTrust, P::Nurture),
                card("review-request", "Review Request Email", C::Relational, T::LowTrust, P::Nurture),
                card("loyalty-program", "Loyalty Program Invitation", C::Persuasive, T::MediumTrust, P::Nurture),
            ],
        ),
    ])
}

fn ecommerce_benchmarks() -> BenchmarkRegistry {
    BenchmarkRegistry::new(vec![
        BenchmarkRule::new(
            Stage::Consideration,
            "reviews",
            "95% of successful eCommerce sites show customer reviews",
        ),
        BenchmarkRule::new(
            Stage::Decision,
            "security-badges",
            "Security signals are crucial for online purchasing confidence",
        ),
    ])
}

/// Builds the built-in reference data.
///
/// `nonprofit` and `service` are selectable but carry no cards or benchmarks yet.
pub(super) fn reference_data() -> ReferenceData {
    let mut industries = IndexMap::new();

    industries.insert(
        "ecommerce".to_string(),
        IndustryData {
            label: "eCommerce".to_string(),
            catalog: ecommerce_catalog(),
            benchmarks: ecommerce_benchmarks(),
        },
    );

    for (id, label) in [("nonprofit", "Nonprofit"), ("service", "Service-Based")] {
        industries.insert(
            id.to_string(),
            IndustryData {
                label: label.to_string(),
                catalog: CardCatalog::empty(),
                benchmarks: BenchmarkRegistry::empty(),
            },
        );
    }

    ReferenceData { industries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecommerce_catalog_is_valid() {
        let catalog = ecommerce_catalog();
        assert!(catalog.validate("ecommerce").is_ok());
        assert_eq!(catalog.cards(Stage::Consideration).len(), 5);
    }

    #[test]
    fn test_benchmarks_reference_catalog_cards() {
        let catalog = ecommerce_catalog();
        for rule in ecommerce_benchmarks().rules() {
            assert_eq!(catalog.stage_of(&rule.touchpoint_id), Some(rule.stage));
        }
    }
}
