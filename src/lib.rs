//! phishguard library: URL phishing risk scoring
//!
//! This library scores URLs for phishing risk by gathering structural,
//! network, and reputation signals and combining them into a bounded risk
//! score with a three-way classification (safe / suspicious / phishing).
//!
//! # Example
//!
//! ```no_run
//! use phishguard::{EngineConfig, ScanEngine};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = ScanEngine::new(EngineConfig::default())?;
//!
//! let assessment = engine.scan("example-phishing-login.com", false).await?;
//! println!("{}: {:.2}", assessment.status, assessment.risk_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Degradation policy
//!
//! Network signal collectors are independent and each degrades to a
//! documented default when its signal source is unavailable; a scan returns
//! a complete assessment for any well-formed URL even when every collector
//! fails. Only malformed input is an error.
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod allowlist;
mod app;
pub mod config;
mod content;
mod domain;
mod engine;
mod error_handling;
pub mod initialization;
mod models;
mod probes;
mod scoring;
pub mod server;
mod structural;

// Re-export public API
pub use app::url::{normalize_url, NormalizedUrl};
pub use config::{EngineConfig, LogFormat, LogLevel, ProbeTimeouts, ScoringWeights, Thresholds};
pub use engine::ScanEngine;
pub use error_handling::{
    ErrorType, InfoType, InitializationError, ProcessingStats, ScanError, WarningType,
};
pub use models::{
    AnalysisBreakdown, ContentAnalysis, FeatureRecord, RiskAssessment, RiskStatus, SuspiciousForm,
};
pub use probes::{DnsLookup, HickoryDns, ProbeOutcome, SystemDns};
pub use scoring::{classify, score_features};
