pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use application::ordering_service::OrderingService;
use domain::catalog::PriceTable;
use infrastructure::http_api::HttpOrderingApi;
use infrastructure::session_store::JsonFileStore;

pub use config::ClientConfig;
pub use errors::AppError;

pub type DefaultOrderingService = OrderingService<HttpOrderingApi, JsonFileStore>;

/// Wire the HTTP client and the on-disk session store into a service.
///
/// The session is not loaded yet; call `restore_session` before use.
pub fn build_service(config: &ClientConfig) -> Result<DefaultOrderingService, AppError> {
    let api = HttpOrderingApi::new(&config.api_base_url, config.request_timeout)?;
    let store = JsonFileStore::new(&config.session_file);
    Ok(OrderingService::new(
        api,
        store,
        PriceTable::standard(),
        config.max_quantity_kg.clone(),
    ))
}
