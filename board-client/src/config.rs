use std::env;

/// Base URL used when `LOCAL_API` is set, matching the local dev server.
pub const LOCAL_API_URL: &str = "http://127.0.0.1:3001";
/// Fixed public API host used everywhere else.
pub const PUBLIC_API_URL: &str = "https://ctm-api.vercel.app";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn new() -> Self {
        let api_base_url = env::var("API_BASE_URL").unwrap_or_else(|_| {
            let local = env::var("LOCAL_API")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false);
            if local { LOCAL_API_URL } else { PUBLIC_API_URL }.to_string()
        });

        Self { api_base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
