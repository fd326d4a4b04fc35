use serde::{Deserialize, Serialize};

/// One ranked player as returned by the leaderboard endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
}
