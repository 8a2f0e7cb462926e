use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub coach_api_url: String,
    pub coach_api_key: Option<String>,
    pub coach_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("GS_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid GS_LISTEN_ADDR");
        let db_path = std::env::var("GS_DB_PATH").unwrap_or_else(|_| "./db/goalstreak.db".into());
        let cors_allow = std::env::var("GS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("GS_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let coach_api_url = std::env::var("GS_COACH_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into());
        let coach_api_key = std::env::var("GS_COACH_API_KEY").ok();
        let coach_model = std::env::var("GS_COACH_MODEL").unwrap_or_else(|_| "gpt-4o".into());
        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            coach_api_url,
            coach_api_key,
            coach_model,
        }
    }
}
