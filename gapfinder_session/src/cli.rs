//! Command-line interface for GapFinder.
//!
//! # Examples
//!
//! List the industries that can be selected:
//!
//! ```bash
//! $ gapfinder industries
//! ```
//!
//! Show the touchpoint cards for an industry:
//!
//! ```bash
//! $ gapfinder catalog --industry ecommerce
//! ```
//!
//! Check a journey file:
//!
//! ```bash
//! $ gapfinder check --journey journey.yaml --format json
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gapfinder_core::{
    presentation_for, severity_accent, Accent, Banner, Gap, GapDetector, GapIcon, ReferenceData,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::insights::JourneyInsights;
use crate::journey_file::JourneyFile;
use crate::session::JourneySession;

/// Environment variable holding log filter directives.
pub const LOG_ENV: &str = "GAPFINDER_LOG";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "gapfinder", version, about = "Find gaps in a customer journey")]
pub struct Cli {
    /// Reference data file (YAML or JSON) replacing the built-in catalog
    #[arg(long, global = true, env = "GAPFINDER_DATA")]
    pub data: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List selectable industries
    Industries,

    /// Print the touchpoint cards for an industry
    Catalog {
        #[arg(short, long, default_value = "ecommerce")]
        industry: String,
    },

    /// Evaluate a journey file and report gaps
    Check {
        /// Journey file mapping stage to card ids
        #[arg(short, long)]
        journey: PathBuf,

        #[arg(short, long, default_value = "ecommerce")]
        industry: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A finding together with its display treatment.
#[derive(Debug, Serialize)]
pub struct Finding {
    #[serde(flatten)]
    pub gap: Gap,
    pub title: &'static str,
    pub banner: Banner,
    pub icon: GapIcon,
    pub accent: Accent,
}

impl From<Gap> for Finding {
    fn from(gap: Gap) -> Self {
        let style = presentation_for(&gap.gap_type);
        let accent = severity_accent(gap.severity);
        Self {
            gap,
            title: style.title,
            banner: style.banner,
            icon: style.icon,
            accent,
        }
    }
}

/// Full result of `check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub industry: String,
    pub findings: Vec<Finding>,
    pub insights: JourneyInsights,
}

/// Parses arguments, sets up logging and runs the command against stdout.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let directives = std::env::var(LOG_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Filter from `GAPFINDER_LOG` directives, falling back to `warn` (`debug` when verbose).
fn log_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

/// Runs a parsed command, writing results to `out`.
pub fn execute(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let data = match &cli.data {
        Some(path) => ReferenceData::from_path(path)
            .with_context(|| format!("failed to load reference data from {}", path.display()))?,
        None => ReferenceData::builtin(),
    };

    match cli.command {
        Command::Industries => {
            for (id, label) in data.industries() {
                writeln!(out, "{:<12} {}", id, label)?;
            }
        }
        Command::Catalog { industry } => print_catalog(&data, &industry, out)?,
        Command::Check {
            journey,
            industry,
            format,
        } => {
            let report = check(Arc::new(data), &journey, &industry)?;
            match format {
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, &report)?;
                    writeln!(out)?;
                }
                OutputFormat::Text => print_report(&report, out)?,
            }
        }
    }

    Ok(())
}

/// Loads a journey file into a fresh session and evaluates it.
pub fn check(data: Arc<ReferenceData>, journey_path: &Path, industry: &str) -> anyhow::Result<CheckReport> {
    let file = JourneyFile::load(journey_path)?;

    let mut session = JourneySession::new(Arc::new(GapDetector::new(data)), industry);
    session
        .load_journey(&file)
        .with_context(|| format!("failed to resolve journey for {}", industry))?;

    let gaps = session.gaps();
    let insights = JourneyInsights::from_findings(session.journey(), &gaps);

    Ok(CheckReport {
        industry: industry.to_string(),
        findings: gaps.into_iter().map(Finding::from).collect(),
        insights,
    })
}

fn print_catalog(data: &ReferenceData, industry: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = data.get_cards(industry);
    if catalog.is_empty() {
        writeln!(out, "No touchpoint cards available for {}", industry)?;
        return Ok(());
    }

    for (stage, cards) in catalog.iter() {
        writeln!(out, "{}", stage)?;
        for card in cards {
            writeln!(
                out,
                "  {:<16} {} ({} \u{2022} {})",
                card.id,
                card.name,
                card.tags.communication_type.as_str(),
                card.tags.trust_level.as_str()
            )?;
        }
    }
    Ok(())
}

fn print_report(report: &CheckReport, out: &mut impl Write) -> anyhow::Result<()> {
    for stage_issues in &report.insights.stage_issues {
        let Some(badge) = stage_issues.badge() else {
            continue;
        };
        writeln!(out, "{} ({})", stage_issues.stage, badge)?;
        for finding in report.findings.iter().filter(|f| f.gap.stage == stage_issues.stage) {
            writeln!(
                out,
                "  [{}] {}: {}",
                finding.gap.severity, finding.title, finding.gap.message
            )?;
        }
    }

    if report.findings.is_empty() {
        writeln!(out, "No detected issues")?;
        return Ok(());
    }

    let insights = &report.insights;
    writeln!(out)?;
    writeln!(out, "Critical issues:    {}", insights.critical_issues)?;
    writeln!(out, "Opportunities:      {}", insights.opportunities)?;
    writeln!(out, "Strong touchpoints: {}", insights.strong_touchpoints)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults() {
        assert_eq!(log_filter(None, false).to_string(), EnvFilter::new("warn").to_string());
        assert_eq!(log_filter(None, true).to_string(), EnvFilter::new("debug").to_string());
    }

    #[test]
    fn test_log_filter_uses_directives() {
        let filter = log_filter(Some("gapfinder_core=debug"), false);
        assert_eq!(filter.to_string(), EnvFilter::new("gapfinder_core=debug").to_string());
        assert_ne!(filter.to_string(), EnvFilter::new("warn").to_string());
    }

    #[test]
    fn test_check_runs_through_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journey.yaml");
        std::fs::write(&path, "decision: [cart]\n").unwrap();

        let report = check(Arc::new(ReferenceData::builtin()), &path, "ecommerce").unwrap();
        assert_eq!(report.findings.len(), 3);
        assert_eq!(report.insights.critical_issues, 2);

        std::fs::write(&path, "decision: [carrier-pigeon]\n").unwrap();
        let err = check(Arc::new(ReferenceData::builtin()), &path, "ecommerce").unwrap_err();
        assert!(err.to_string().contains("failed to resolve journey"));
    }
}
