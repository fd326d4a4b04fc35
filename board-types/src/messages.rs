use serde::{Deserialize, Serialize};

/// Login/register request body. Only ever borrowed for the duration of the
/// request; nothing retains credentials after the call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Plain `{message}` success body shared by register, logout and score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Rejection body. The server uses `error` for register/login failures and
/// `message` everywhere else, so both are read and whichever is present
/// wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_text(self) -> String {
        self.error
            .or(self.message)
            .unwrap_or_else(|| "No error message".to_string())
    }
}

/// User record as the server spells it on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireUser {
    pub username: String,
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default, rename = "loggedIn")]
    pub logged_in: bool,
}

/// Successful `/login` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginBody {
    pub message: String,
    pub user: WireUser,
}

/// `/session` response. `user` is absent when no session is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionBody {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<WireUser>,
}

/// `/score` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBody {
    pub score: i64,
}
