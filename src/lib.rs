pub mod analysis;
pub mod config;
pub mod error;
pub mod ingest;
pub mod intake;
pub mod logging;
pub mod output;
pub mod ranking;
pub mod scoring;

pub use analysis::{analyze, AnalysisConfig, AnalysisResult, Analyzer};
pub use error::{AnalysisError, ErrorClass, MalformedInput};
pub use ranking::{ScoredProject, Summary};
