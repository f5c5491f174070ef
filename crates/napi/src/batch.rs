//! Batch processing types for parallel generation.

use crate::types::GeneratedFile;
use napi_derive::napi;
use serde_json::Value as JsonValue;

/// One service to document.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller-chosen identifier echoed in the result.
    pub id: String,
    /// Service IR as parsed JSON.
    pub service: JsonValue,
}

/// Result for a single service in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Identifier matching the input.
    pub id: String,
    /// Generated file (present on success).
    pub file: Option<GeneratedFile>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of services processed.
    pub total: u32,
    /// Number of documents generated.
    pub succeeded: u32,
    /// Number of failures.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
    /// Whether to continue processing after an error. Defaults to true.
    pub continue_on_error: Option<bool>,
}

/// All batch results plus statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results in input order.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}
