use std::sync::Arc;

use crate::config::Config;
use crate::quality::{PatternLibrary, QualityWeights};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built-in tables merged with `PATTERNS_FILE`, fixed for the process lifetime.
    pub patterns: Arc<PatternLibrary>,
    pub weights: QualityWeights,
}
