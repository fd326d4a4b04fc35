pub mod leaderboard;
pub mod messages;
pub mod session;

// Re-export all types
pub use leaderboard::*;
pub use messages::*;
pub use session::*;
