use reqwest::{Client, Response};

use board_types::{
    Credentials, ErrorBody, LeaderboardEntry, LoginBody, MessageBody, ScoreBody, SessionBody,
};

use crate::config::Config;
use crate::error::ApiError;

/// Thin typed wrapper over the remote leaderboard API. One shared client
/// with a cookie store carries the session cookie across calls, the same
/// way the browser's `credentials: "include"` does.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(credentials)
            .send()
            .await?;
        let body: MessageBody = Self::expect_ok(response).await?.json().await?;
        Ok(body.message)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginBody, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .await?;
        let body: LoginBody = Self::expect_ok(response).await?.json().await?;
        Ok(body)
    }

    pub async fn logout(&self) -> Result<String, ApiError> {
        let response = self.http.post(self.url("/logout")).send().await?;
        let body: MessageBody = Self::expect_ok(response).await?.json().await?;
        Ok(body.message)
    }

    pub async fn session(&self) -> Result<SessionBody, ApiError> {
        let response = self.http.get(self.url("/session")).send().await?;
        let body: SessionBody = Self::expect_ok(response).await?.json().await?;
        Ok(body)
    }

    pub async fn submit_score(&self, score: i64) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/score"))
            .json(&ScoreBody { score })
            .send()
            .await?;
        let body: MessageBody = Self::expect_ok(response).await?.json().await?;
        Ok(body.message)
    }

    // The leaderboard reads are POSTs; that is the remote contract, not a
    // client choice.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let response = self.http.post(self.url("/leaderboard")).send().await?;
        let entries: Vec<LeaderboardEntry> = Self::expect_ok(response).await?.json().await?;
        Ok(entries)
    }

    pub async fn full_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let response = self.http.post(self.url("/allleaderboard")).send().await?;
        let entries: Vec<LeaderboardEntry> = Self::expect_ok(response).await?.json().await?;
        Ok(entries)
    }

    /// Converts any non-2xx response into `Rejected`, pulling the message
    /// out of the body when there is one to pull.
    async fn expect_ok(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(ErrorBody::into_text)
            .unwrap_or_else(|_| "No error message".to_string());

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
