//! The reusable generator exposed to Node.

use crate::batch::{BatchInput, BatchOptions, BatchProcessingResult, BatchResult, BatchStats};
use crate::types::{GeneratedFile, GeneratorConfig};
use crate::convert_error;
use irdoc_core::{DocError, Service};
use irdoc_spec::Generator;
use napi_derive::napi;
use rayon::prelude::*;
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// Reference document generator that loads its template once.
#[napi]
pub struct IrDocGenerator {
    pub(crate) inner: Generator,
}

#[napi]
impl IrDocGenerator {
    #[napi(constructor)]
    /// Creates a generator; fails when a configured template cannot be read.
    pub fn new(config: Option<GeneratorConfig>) -> napi::Result<Self> {
        let options = config.unwrap_or_default().into();
        let inner = Generator::new(options).map_err(convert_error)?;
        Ok(Self { inner })
    }

    /// Renders the reference document for one Service IR.
    #[napi]
    pub fn generate(&self, service: JsonValue) -> napi::Result<GeneratedFile> {
        render(&self.inner, service)
            .map(GeneratedFile::from)
            .map_err(convert_error)
    }

    /// Renders several services in parallel.
    ///
    /// Results keep input order. With `continueOnError: false` inputs are
    /// processed sequentially and processing stops after the first failure.
    #[napi(js_name = "generateBatch")]
    pub fn generate_batch(
        &self,
        inputs: Vec<BatchInput>,
        options: Option<BatchOptions>,
    ) -> napi::Result<BatchProcessingResult> {
        let start = Instant::now();
        let opts = options.unwrap_or_default();
        let continue_on_error = opts.continue_on_error.unwrap_or(true);

        let pool = if let Some(max_threads) = opts.max_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(max_threads as usize)
                .build()
                .ok()
        } else {
            None
        };

        let total = inputs.len() as u32;
        let succeeded = AtomicU32::new(0);
        let failed = AtomicU32::new(0);

        let process_input = |input: BatchInput| -> BatchResult {
            match render(&self.inner, input.service) {
                Ok(file) => {
                    succeeded.fetch_add(1, Ordering::Relaxed);
                    BatchResult {
                        id: input.id,
                        file: Some(file.into()),
                        error: None,
                    }
                }
                Err(e) => {
                    failed.fetch_add(1, Ordering::Relaxed);
                    BatchResult {
                        id: input.id,
                        file: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        };

        let results: Vec<BatchResult> = if continue_on_error {
            if let Some(pool) = pool {
                pool.install(|| inputs.into_par_iter().map(process_input).collect())
            } else {
                inputs.into_par_iter().map(process_input).collect()
            }
        } else {
            let mut results = Vec::with_capacity(inputs.len());
            for input in inputs {
                let result = process_input(input);
                let stop = result.error.is_some();
                results.push(result);
                if stop {
                    break;
                }
            }
            results
        };

        Ok(BatchProcessingResult {
            results,
            stats: BatchStats {
                total,
                succeeded: succeeded.load(Ordering::Relaxed),
                failed: failed.load(Ordering::Relaxed),
                processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            },
        })
    }
}

pub(crate) fn render(
    generator: &Generator,
    service: JsonValue,
) -> Result<irdoc_spec::GeneratedFile, DocError> {
    generator.generate(&Service::from_value(service)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputVariant;
    use serde_json::json;

    fn service() -> JsonValue {
        json!({
            "types": [
                {
                    "name": {"value": "Service"},
                    "properties": [{
                        "name": {"value": "title"},
                        "value": {"kind": "ComplexValue", "typeName": {"value": "StringLiteral"}}
                    }]
                },
                {"name": {"value": "StringLiteral"}}
            ]
        })
    }

    #[test]
    fn generates_with_config() {
        let generator = IrDocGenerator::new(Some(GeneratorConfig {
            variant: Some(OutputVariant::Extended),
            heading_anchors: Some(true),
            ..GeneratorConfig::default()
        }))
        .unwrap();
        let file = generator.generate(service()).unwrap();
        assert_eq!(file.path, "ir.mdx");
        assert!(file.contents.contains("#### 3.4.1 StringLiteral {#341-string-literal}"));
        assert!(file.contents.contains("## 4 Plugin Contracts"));
    }

    #[test]
    fn missing_template_fails_construction() {
        let result = IrDocGenerator::new(Some(GeneratorConfig {
            template_path: Some("/no/such/template.md".to_string()),
            ..GeneratorConfig::default()
        }));
        assert!(result.is_err());
    }

    #[test]
    fn batch_reports_each_input() {
        let generator = IrDocGenerator::new(None).unwrap();
        let inputs = vec![
            BatchInput {
                id: "ok".to_string(),
                service: service(),
            },
            BatchInput {
                id: "no-root".to_string(),
                service: json!({"types": [{"name": {"value": "Other"}}]}),
            },
            BatchInput {
                id: "garbage".to_string(),
                service: json!({"types": 3}),
            },
        ];

        let result = generator.generate_batch(inputs, None).unwrap();
        assert_eq!(result.stats.total, 3);
        assert_eq!(result.stats.succeeded, 1);
        assert_eq!(result.stats.failed, 2);

        let ids: Vec<&str> = result.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["ok", "no-root", "garbage"]);
        assert!(result.results[0].file.is_some());
        assert!(
            result.results[1]
                .error
                .as_deref()
                .is_some_and(|e| e.contains("Service"))
        );
        assert!(result.results[2].error.is_some());
    }

    #[test]
    fn batch_stops_on_first_error_when_asked() {
        let generator = IrDocGenerator::new(None).unwrap();
        let inputs = vec![
            BatchInput {
                id: "bad".to_string(),
                service: json!({"types": []}),
            },
            BatchInput {
                id: "ok".to_string(),
                service: service(),
            },
        ];

        let result = generator
            .generate_batch(
                inputs,
                Some(BatchOptions {
                    max_threads: Some(1),
                    continue_on_error: Some(false),
                }),
            )
            .unwrap();
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.stats.failed, 1);
        assert_eq!(result.stats.succeeded, 0);
    }
}
