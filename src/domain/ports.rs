use crate::domain::model::AppInfo;
use std::net::SocketAddr;

/// Resolved runtime settings consumed by the HTTP adapter.
pub trait ConfigProvider: Send + Sync {
    fn service_name(&self) -> &str;
    fn service_version(&self) -> &str;
    fn bind_addr(&self) -> crate::utils::error::Result<SocketAddr>;
    fn max_body_bytes(&self) -> usize;

    fn app_info(&self) -> AppInfo {
        AppInfo {
            name: self.service_name().to_string(),
            version: self.service_version().to_string(),
        }
    }
}
