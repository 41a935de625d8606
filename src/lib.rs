use std::sync::Arc;

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gyms;
pub mod http;
pub mod search;
pub mod session;

use cache::QueryStore;
use config::Config;
use error::AppError;
use http::HttpClient;

/// 应用状态：显式构造的 HTTP 客户端与查询缓存，传给需要它们的组件
#[derive(Clone)]
pub struct AppState {
    pub http: HttpClient,
    pub cache: Arc<QueryStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http,
            cache: Arc::new(QueryStore::new()),
            config,
        })
    }
}
