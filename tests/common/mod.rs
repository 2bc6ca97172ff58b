//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use kcsc_proxy::config::{ProxyConfig, Secret};
use kcsc_proxy::{HttpServer, Shutdown};

pub const UPSTREAM_KEY: &str = "test-upstream-key-123";

/// A fake KCSC upstream that answers every request with a fixed reply and
/// records the request targets (path + query) it saw.
pub struct MockUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a mock upstream on an ephemeral port.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    start_mock_upstream_with(status, None, body.as_bytes()).await
}

/// Like `start_mock_upstream`, with an optional `Content-Type` and a raw
/// (possibly non-UTF-8) body.
pub async fn start_mock_upstream_with(
    status: u16,
    content_type: Option<&'static str>,
    body: &'static [u8],
) -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let seen = seen.clone();
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(socket);
                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        // Drain headers; GET requests carry no body.
                        loop {
                            let mut line = String::new();
                            match reader.read_line(&mut line).await {
                                Ok(0) | Err(_) => break,
                                Ok(_) if line == "\r\n" => break,
                                Ok(_) => {}
                            }
                        }
                        if let Some(target) = request_line.split_whitespace().nth(1) {
                            seen.lock().unwrap().push(target.to_string());
                        }

                        let content_type = content_type
                            .map(|ct| format!("Content-Type: {}\r\n", ct))
                            .unwrap_or_default();
                        let head = format!(
                            "HTTP/1.1 {} Mock\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n",
                            status,
                            content_type,
                            body.len(),
                        );
                        let mut socket = reader.into_inner();
                        let _ = socket.write_all(head.as_bytes()).await;
                        let _ = socket.write_all(body).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockUpstream {
        base_url: format!("http://{}/OpenApi", addr),
        requests,
    }
}

/// Start an upstream that accepts connections but never answers.
#[allow(dead_code)]
pub async fn start_silent_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _held = socket;
                tokio::time::sleep(Duration::from_secs(60)).await;
            });
        }
    });

    format!("http://{}/OpenApi", addr)
}

/// A base URL on which nothing is listening.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/OpenApi", addr)
}

/// Config pointing at `base_url` with the test upstream key and the given
/// caller secret (empty disables auth).
pub fn config_for(base_url: &str, shared_secret: &str) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.base_url = base_url.to_string();
    config.upstream.api_key = Secret::new(UPSTREAM_KEY);
    config.auth.shared_secret = Secret::new(shared_secret);
    config
}

/// Serve `config` on an ephemeral port. Keep the returned `Shutdown` alive
/// for the duration of the test.
pub async fn spawn_proxy(config: ProxyConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
