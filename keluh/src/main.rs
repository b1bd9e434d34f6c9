use std::sync::Arc;

use clap::Parser;
use keluh::{
    cli::{CLIArgs, CliCommand},
    commands::run_command,
    logging::initialize_tracing,
    terminal::{TerminalConfirmation, TerminalNotifier},
};
use keluh_api_client::{ApiServer, Client, ClientOptions, SessionCredentials};
use keluh_configuration::Configuration;
use keluh_store::{CategoryStore, ConfirmDeletion, ConfirmationOutcome};
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing::info;



#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments.
    let arguments = CLIArgs::parse();

    // Load configuration.
    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => Configuration::load_from_path(path),
        None => Configuration::load_from_default_path_or_defaults(),
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration file.")?;


    configuration
        .logging
        .create_log_file_output_directory_if_missing()
        .into_diagnostic()
        .wrap_err("Failed to prepare the log file directory.")?;

    let guard = initialize_tracing(
        configuration.logging.console_output_level_filter(),
        configuration.logging.log_file_output_level_filter(),
        configuration.logging.log_file_output_directory.as_deref(),
        "keluh.log",
    )
    .into_diagnostic()
    .wrap_err("Failed to initialize tracing.")?;

    info!(
        file_path = ?configuration.configuration_file_path,
        base_url = configuration.api.base_url.as_str(),
        "Configuration loaded."
    );


    // The flag (or its environment variable) wins over the configuration file.
    let access_token = arguments
        .access_token
        .clone()
        .or_else(|| configuration.session.access_token.clone())
        .ok_or_else(|| {
            miette!(
                "No access token available. Pass --token, set KELUH_ACCESS_TOKEN \
                or set access_token in the [session] table of the configuration file."
            )
        })?;

    let api_server = Arc::new(ApiServer::from_base_url(&configuration.api.base_url));

    let client = Client::new(
        api_server,
        ClientOptions {
            request_timeout: configuration.api.request_timeout,
        },
    )
    .into_diagnostic()
    .wrap_err("Failed to set up the API client.")?
    .with_credentials(Arc::new(SessionCredentials::with_access_token(
        access_token,
    )));


    let confirmation: Arc<dyn ConfirmDeletion> = match &arguments.command {
        CliCommand::Delete { yes: true, .. } => Arc::new(ConfirmationOutcome::Confirmed),
        _ => Arc::new(TerminalConfirmation),
    };

    let store = CategoryStore::new(client, confirmation, Arc::new(TerminalNotifier));

    store
        .load()
        .await
        .into_diagnostic()
        .wrap_err("Failed to load categories.")?;

    run_command(&store, arguments.command)
        .await
        .into_diagnostic()
        .wrap_err("Category operation failed.")?;


    drop(guard);

    Ok(())
}
