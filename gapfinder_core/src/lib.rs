//! GapFinder - Customer journey gap detection
//!
//! This crate evaluates a customer journey, built from predefined touchpoint
//! cards placed into funnel stages, against a small set of heuristic rules.
//!
//! # Overview
//!
//! - **Card Catalog**: touchpoint cards per industry, grouped by stage
//! - **Benchmark Registry**: per-industry touchpoints expected in a stage
//! - **Gap Rules**: independent heuristics (benchmark coverage, trust
//!   sequencing, social-proof density)
//! - **Gap Detector**: runs the rules in a fixed order and concatenates findings
//!
//! # Quick Start
//!
//! ```rust
//! use gapfinder_core::{detect_gaps, Journey, ReferenceData, Stage};
//!
//! let data = ReferenceData::builtin();
//! let checkout = data.resolve_card("ecommerce", "checkout").unwrap().clone();
//! let journey = Journey::new().with_card(Stage::Decision, checkout);
//!
//! for gap in detect_gaps(&journey, "ecommerce") {
//!     println!("[{}] {}: {}", gap.severity, gap.stage, gap.message);
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`]: Stages, cards, journeys and gaps
//! - [`error`]: Error types for data loading
//! - [`catalog`]: Card catalog
//! - [`benchmarks`]: Benchmark registry
//! - [`reference`]: Built-in and file-backed reference data
//! - [`config`]: Rule parameters
//! - [`rules`]: The rule contract and standard rules
//! - [`engine`]: Gap detection
//! - [`presentation`]: Display lookup table for findings

pub mod error;
pub mod types;

pub mod benchmarks;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod presentation;
pub mod reference;
pub mod rules;

// Re-export commonly used types
pub use benchmarks::BenchmarkRegistry;
pub use catalog::CardCatalog;
pub use config::DetectorConfig;
pub use engine::{detect_gaps, GapDetector};
pub use error::{GapFinderError, Result};
pub use presentation::{presentation_for, severity_accent, Accent, Banner, GapIcon, GapPresentation};
pub use reference::{IndustryData, ReferenceData, ReferenceDocument};
pub use rules::{FnRule, GapRule, RuleContext, RuleSet};
pub use types::{
    BenchmarkRule, CardTags, CommunicationType, ConversionProximity, Gap, GapType, Journey,
    Severity, Stage, TouchpointCard, TrustLevel,
};

/// Version of the gapfinder core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
