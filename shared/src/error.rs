use thiserror::Error;

/// Failure to decode one of the embedded mock datasets
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to decode {dataset} data: {source}")]
    Decode {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
