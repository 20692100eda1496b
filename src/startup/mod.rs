//! Startup: configuration, logging and construction of the API client.
//!
//! ```ignore
//! let config = ClientConfig::from_env().with_cli_options(&options);
//! let _guard = init_logging(&config)?;
//! let client = build_client(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::ClientConfig;
pub use logging::init_logging;

use std::sync::Arc;

use color_eyre::Result;

use crate::adapters::ReqwestHttpClient;
use crate::api::ApiClient;

/// API client for `config.base_url` on a cookie-keeping reqwest transport.
pub fn build_client(config: &ClientConfig) -> Result<Arc<ApiClient>> {
    let http = ReqwestHttpClient::new()?;
    Ok(Arc::new(ApiClient::new(config.base_url.clone(), Arc::new(http))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_uses_configured_base_url() {
        let config = ClientConfig::default().with_base_url("http://localhost:9999/");
        let client = build_client(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
