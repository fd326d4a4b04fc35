pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod notify;
pub mod score;
pub mod view;

pub use api::ApiClient;
pub use auth::AuthController;
pub use config::Config;
pub use error::ApiError;
pub use leaderboard::LeaderboardController;
pub use notify::{LogNotifier, Notifier, Severity};
pub use score::ScoreSubmitter;
pub use view::{GUEST_LABEL, GamePage, MemoryPage, PageSnapshot, PodiumSlot, SessionBinder};
