//! CLI command implementations.

pub mod export;
pub mod movements;
pub mod products;
pub mod stock;

use thiserror::Error;

use almacen_client::{ApiError, ClientConfig, ConfigError, InventoryClient};

/// Errors a CLI command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The backend call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A screen-level flow rejected the request (validation or fetch error).
    #[error("{0}")]
    Flow(String),

    /// Bad command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Saving the export failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the backend client from the environment.
pub(crate) fn client() -> Result<InventoryClient, CliError> {
    let config = ClientConfig::from_env()?;
    Ok(InventoryClient::new(&config)?)
}
