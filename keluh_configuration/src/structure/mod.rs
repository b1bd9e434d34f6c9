use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

mod api;
mod logging;
mod session;

pub use api::*;
pub use logging::*;
pub use session::*;

use crate::traits::{Resolve, TryResolve, TryResolveWithContext};
use crate::utilities::get_default_configuration_file_path;
use crate::{ConfigurationLoadingError, ConfigurationResolutionError};



#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct UnresolvedConfiguration {
    /// Backend API-related configuration.
    api: UnresolvedApiConfiguration,

    /// Logging-related configuration.
    logging: UnresolvedLoggingConfiguration,

    /// Session (credential)-related configuration.
    session: UnresolvedSessionConfiguration,
}


/// The entire Keluh client configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// This is the file path this [`Configuration`] instance was loaded from,
    /// or `None` if it consists of built-in defaults only.
    pub configuration_file_path: Option<PathBuf>,

    /// Backend API-related configuration.
    pub api: ApiConfiguration,

    /// Logging-related configuration.
    pub logging: LoggingConfiguration,

    /// Session (credential)-related configuration.
    pub session: SessionConfiguration,
}



pub(crate) struct ConfigurationResolutionContext {
    configuration_file_path: Option<PathBuf>,
}


impl TryResolveWithContext for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = ConfigurationResolutionContext;
    type Error = ConfigurationResolutionError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        let api = self.api.try_resolve()?;
        let logging = self.logging.try_resolve()?;
        let session = self.session.resolve();

        Ok(Configuration {
            configuration_file_path: context.configuration_file_path,
            api,
            logging,
            session,
        })
    }
}


impl Configuration {
    /// Parse and resolve the configuration from a TOML string.
    pub fn from_toml_str(
        configuration_string: &str,
        configuration_file_path: Option<PathBuf>,
    ) -> Result<Self, ConfigurationLoadingError> {
        // Parse the string into the [`UnresolvedConfiguration`] structure and then resolve it.
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(configuration_string)
                .map_err(|error| ConfigurationLoadingError::ParsingError { error })?;

        let resolved_configuration =
            unresolved_configuration.try_resolve_with_context(ConfigurationResolutionContext {
                configuration_file_path,
            })?;

        Ok(resolved_configuration)
    }

    /// Load the configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(
        configuration_file_path: S,
    ) -> Result<Self, ConfigurationLoadingError> {
        let configuration_file_path = configuration_file_path.as_ref();

        // Read the configuration file into memory as a string.
        let configuration_string = fs::read_to_string(configuration_file_path).map_err(|error| {
            ConfigurationLoadingError::UnableToReadConfigurationFile {
                path: configuration_file_path.to_path_buf(),
                error,
            }
        })?;

        let canonical_configuration_file_path = dunce::canonicalize(configuration_file_path)
            .unwrap_or_else(|_| configuration_file_path.to_path_buf());

        Self::from_toml_str(
            &configuration_string,
            Some(canonical_configuration_file_path),
        )
    }

    /// Load the configuration from the default path (`./data/configuration.toml`),
    /// falling back to built-in defaults when that file does not exist.
    pub fn load_from_default_path_or_defaults() -> Result<Self, ConfigurationLoadingError> {
        let default_configuration_file_path = get_default_configuration_file_path();

        if default_configuration_file_path.exists() {
            Configuration::load_from_path(default_configuration_file_path)
        } else {
            Ok(UnresolvedConfiguration::default().try_resolve_with_context(
                ConfigurationResolutionContext {
                    configuration_file_path: None,
                },
            )?)
        }
    }
}
