//! GapFinder session layer.
//!
//! Sits on top of `gapfinder_core` and owns the state a journey builder
//! needs between edits:
//!
//! - [`session`]: the editable journey and selected industry
//! - [`insights`]: summary counts for the findings panel
//! - [`journey_file`]: journeys stored as stage -> card ids
//! - [`cli`]: the `gapfinder` command-line front end

pub mod cli;
pub mod error;
pub mod insights;
pub mod journey_file;
pub mod session;

pub use error::{Result, SessionError};
pub use insights::{JourneyInsights, StageIssues};
pub use journey_file::JourneyFile;
pub use session::{JourneySession, SessionId};
