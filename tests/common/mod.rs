use calc_service::config::toml_config::ServiceConfig;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service on an ephemeral port with the given config.
#[allow(dead_code)]
pub async fn spawn_server_with(config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = calc_service::build_router(&config);

    tokio::spawn(calc_service::serve_on(
        listener,
        router,
        std::future::pending(),
    ));

    TestServer {
        addr,
        client: reqwest::Client::new(),
    }
}

pub async fn spawn_server() -> TestServer {
    spawn_server_with(ServiceConfig::default()).await
}
