use api::HttpBackend;
use store::config::PortfolioConfig;

// app-wide values provided once by App and read with use_context
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    pub config: PortfolioConfig,
    pub backend: HttpBackend,
}

impl AppContext {
    pub fn new(config: PortfolioConfig) -> Self {
        let backend = HttpBackend::new(config.api_base.clone());

        AppContext { config, backend }
    }
}
