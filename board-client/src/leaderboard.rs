use std::sync::Arc;

use board_core::{podium, sort_by_score_desc};
use board_types::LeaderboardEntry;

use crate::api::ApiClient;
use crate::notify::{Notifier, Severity};
use crate::view::GamePage;

/// Fetches rankings and keeps the podium slots current. Rankings are never
/// cached; every call renders from a fresh server response.
pub struct LeaderboardController {
    api: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    page: Arc<dyn GamePage>,
}

impl LeaderboardController {
    pub fn new(api: Arc<ApiClient>, notifier: Arc<dyn Notifier>, page: Arc<dyn GamePage>) -> Self {
        Self {
            api,
            notifier,
            page,
        }
    }

    /// Loads the top rankings into the three podium slots. Each slot is
    /// written independently; slots past the end of the ranking go blank.
    pub async fn load_top(&self) {
        match self.api.leaderboard().await {
            Ok(entries) => {
                let sorted = sort_by_score_desc(entries);
                for (slot, entry) in podium(&sorted).into_iter().enumerate() {
                    self.page.set_podium_slot(slot, entry);
                }
            }
            Err(err) => {
                tracing::error!("failed to load leaderboard: {err}");
                self.notifier.notify(
                    Severity::Error,
                    "Error loading leaderboard",
                    &err.user_message("An unexpected error occurred. Please try again later."),
                );
            }
        }
    }

    /// Returns the full ranking, sorted descending, or `None` on failure.
    /// Failures are logged only; there is no renderer behind this call.
    pub async fn load_all(&self) -> Option<Vec<LeaderboardEntry>> {
        match self.api.full_leaderboard().await {
            Ok(entries) => Some(sort_by_score_desc(entries)),
            Err(err) => {
                tracing::error!("failed to load full leaderboard: {err}");
                None
            }
        }
    }
}
