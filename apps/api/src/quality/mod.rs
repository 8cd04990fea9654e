// Draft quality engine: pattern tables, detectors, scorers, per-field issues,
// suggestions, and the wizard's step gate. Pure functions over an AnswerSet.

pub mod completeness;
pub mod detectors;
pub mod future_clarity;
pub mod handlers;
pub mod metrics;
pub mod patterns;
pub mod scoring;
pub mod specificity;
pub mod step_gate;
pub mod suggestions;

pub use patterns::{PatternLibrary, PatternOverrides};
pub use scoring::QualityWeights;
