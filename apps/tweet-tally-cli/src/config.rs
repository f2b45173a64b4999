use std::fs;
use std::path::Path;
use tweet_tally_sdk::{TallyConfig, TallyError};

use crate::error::{CliError, CliResult};

/// Load a tally configuration from a YAML file, or the defaults without one.
///
/// Keys missing from the file keep their default value:
///
/// ```yaml
/// max_line_length: 374
/// max_row_count: 20000
/// top_count: 10
/// debug: false
/// ```
pub fn load_tally_config(path: Option<&Path>) -> CliResult<TallyConfig> {
    let config = match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            parse_tally_config(&contents)?
        }
        None => TallyConfig::default(),
    };

    config.validate().map_err(|e| match e {
        TallyError::InvalidConfig(message) => CliError::InvalidConfig(message),
        other => CliError::Tally(other),
    })?;

    Ok(config)
}

fn parse_tally_config(contents: &str) -> CliResult<TallyConfig> {
    // An empty file deserializes to `()` rather than a mapping.
    if contents.trim().is_empty() {
        return Ok(TallyConfig::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}
