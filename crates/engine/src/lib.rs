//! `dupescan-engine` — Approximate company-name duplicate detection engine.
//!
//! Pure engine crate: receives pre-loaded name lists, returns ranked match
//! records. No CLI or file-path IO dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod model;
pub mod normalize;
pub mod report;
pub mod similarity;

pub use config::MatchConfig;
pub use engine::run;
pub use error::MatchError;
pub use model::{MatchInput, MatchRecord, MatchReport, RawName};
