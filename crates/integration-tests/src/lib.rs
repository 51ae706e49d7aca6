//! Integration tests for the Almacén inventory console.
//!
//! # Running Tests
//!
//! The tests in `tests/` talk to a live inventory backend and are
//! `#[ignore]`d by default:
//!
//! ```bash
//! ALMACEN_API_URL=http://localhost:8080 cargo test -p almacen-integration-tests -- --ignored
//! ```

use almacen_client::{ClientConfig, InventoryClient};

/// Build a client from `ALMACEN_API_URL`, defaulting to localhost.
///
/// # Panics
///
/// Panics if the client cannot be built; test-setup only.
#[must_use]
pub fn test_client() -> InventoryClient {
    let base_url =
        std::env::var("ALMACEN_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let config = ClientConfig::new(&base_url, None);
    InventoryClient::new(&config).expect("failed to build test client")
}
