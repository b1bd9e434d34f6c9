use std::path::PathBuf;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::{traits::TryResolve, LoggingConfigurationError, MissingLoggingDirectoryCreationError};


#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct UnresolvedLoggingConfiguration {
    console_output_level_filter: String,

    log_file_output_level_filter: String,

    log_file_output_directory: Option<String>,
}

impl Default for UnresolvedLoggingConfiguration {
    fn default() -> Self {
        Self {
            console_output_level_filter: "warn".to_string(),
            log_file_output_level_filter: "debug".to_string(),
            log_file_output_directory: None,
        }
    }
}


#[derive(Clone, Debug)]
pub struct LoggingConfiguration {
    console_output_level_filter: EnvFilterSource,

    log_file_output_level_filter: EnvFilterSource,

    /// Log files are only written when this is set.
    pub log_file_output_directory: Option<PathBuf>,
}

// `EnvFilter` isn't `Clone`, so the validated source string is kept instead.
#[derive(Clone, Debug)]
struct EnvFilterSource(String);


fn validate_tracing_filter(
    filter: String,
    kind: &'static str,
) -> Result<EnvFilterSource, LoggingConfigurationError> {
    match EnvFilter::try_new(&filter) {
        Ok(_) => Ok(EnvFilterSource(filter)),
        Err(error) => Err(LoggingConfigurationError::InvalidTracingFilter {
            invalid_filter: filter,
            kind: kind.into(),
            error,
        }),
    }
}


impl TryResolve for UnresolvedLoggingConfiguration {
    type Resolved = LoggingConfiguration;
    type Error = LoggingConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        let console_output_level_filter =
            validate_tracing_filter(self.console_output_level_filter, "console")?;

        let log_file_output_level_filter =
            validate_tracing_filter(self.log_file_output_level_filter, "log file")?;

        Ok(LoggingConfiguration {
            console_output_level_filter,
            log_file_output_level_filter,
            log_file_output_directory: self.log_file_output_directory.map(PathBuf::from),
        })
    }
}


impl LoggingConfiguration {
    pub fn console_output_level_filter(&self) -> EnvFilter {
        // Validated in `try_resolve`, so this falls back only if that invariant is broken.
        EnvFilter::try_new(&self.console_output_level_filter.0)
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }

    pub fn log_file_output_level_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_file_output_level_filter.0)
            .unwrap_or_else(|_| EnvFilter::new("debug"))
    }

    /// Makes sure the log file directory (if configured) exists.
    pub fn create_log_file_output_directory_if_missing(
        &self,
    ) -> Result<(), MissingLoggingDirectoryCreationError> {
        let Some(directory_path) = &self.log_file_output_directory else {
            return Ok(());
        };

        if directory_path.exists() {
            if !directory_path.is_dir() {
                return Err(MissingLoggingDirectoryCreationError::NotADirectory {
                    path: directory_path.clone(),
                });
            }

            return Ok(());
        }

        std::fs::create_dir_all(directory_path).map_err(|error| {
            MissingLoggingDirectoryCreationError::UnableToCreateDirectory {
                directory_path: directory_path.clone(),
                error,
            }
        })
    }
}
