#![deny(missing_docs)]
//! Node.js bindings for the irdoc reference generator.

use irdoc_core::DocError;
use irdoc_spec::{Generator, GeneratorOptions, Template};
use napi::bindgen_prelude::*;
use napi_derive::napi;
use once_cell::sync::Lazy;
use serde_json::Value as JsonValue;

/// Batch processing types.
pub mod batch;
/// The reusable generator class.
pub mod generator;
/// NAPI-exposed data structures.
pub mod types;

pub use batch::*;
pub use generator::IrDocGenerator;
pub use types::*;

static DEFAULT_GENERATOR: Lazy<Generator> =
    Lazy::new(|| Generator::with_template(GeneratorOptions::default(), &Template::bundled()));

/// Renders a Service IR with the given config, or the defaults when omitted.
#[napi]
pub fn generate(service: JsonValue, config: Option<GeneratorConfig>) -> Result<GeneratedFile> {
    let file = match config {
        Some(config) => {
            let generator = Generator::new(config.into()).map_err(convert_error)?;
            generator::render(&generator, service)
        }
        None => generator::render(&DEFAULT_GENERATOR, service),
    };
    file.map(GeneratedFile::from).map_err(convert_error)
}

pub(crate) fn convert_error(err: DocError) -> Error {
    match err {
        DocError::MissingServiceType
        | DocError::InvalidIr { .. }
        | DocError::InvalidValue { .. } => Error::new(Status::InvalidArg, err.to_string()),
        DocError::Io { .. } | DocError::Markdown { .. } => Error::from_reason(err.to_string()),
    }
}
