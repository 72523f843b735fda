use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        let port = std::env::var("PORT").unwrap_or_else(|_| "9999".to_string());
        let listen_addr = format!("0.0.0.0:{port}");

        let request_timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(10));

        Self {
            listen_addr,
            request_timeout,
        }
    }
}
