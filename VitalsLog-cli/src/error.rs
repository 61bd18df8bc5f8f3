use thiserror::Error;

/// Failures that stop a command before it can produce a result
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {source_name}: {error}")]
    Read {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Invalid health entry JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Blood pressure needs a diastolic value after the systolic value")]
    MissingDiastolic,
}
