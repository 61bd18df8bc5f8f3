use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use vitals_log_domain::HealthEntryCandidate;

use crate::error::CliError;

/// Path argument meaning "read standard input"
pub const STDIN_MARKER: &str = "-";

/// Read the whole of `source`, where `-` is standard input
pub fn read_source(source: &str) -> Result<String, CliError> {
    if source == STDIN_MARKER {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|error| CliError::Read { source_name: "stdin".to_string(), error })?;
        return Ok(raw);
    }

    fs::read_to_string(Path::new(source))
        .map_err(|error| CliError::Read { source_name: source.to_string(), error })
}

/// Decode a health entry candidate from a file or standard input
pub fn load_candidate(source: &str) -> Result<HealthEntryCandidate, CliError> {
    let raw = read_source(source)?;
    let candidate = HealthEntryCandidate::from_json(&raw)?;
    debug!(source, "Decoded health entry candidate");
    Ok(candidate)
}
