use std::path::PathBuf;


/// Returns the default configuration file path, which is at
/// `{current directory}/data/configuration.toml`.
///
/// The file is not required to exist.
pub fn get_default_configuration_file_path() -> PathBuf {
    let mut configuration_file_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    configuration_file_path.push("data/configuration.toml");

    configuration_file_path
}
