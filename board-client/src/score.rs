use std::sync::Arc;

use crate::api::ApiClient;
use crate::notify::{Notifier, Severity};
use crate::view::SessionBinder;

/// Posts scores for the logged-in player. The server stays the sole source
/// of truth: a successful submission changes nothing locally, and callers
/// refresh the leaderboard to see the new ranking.
pub struct ScoreSubmitter {
    api: Arc<ApiClient>,
    binder: Arc<SessionBinder>,
    notifier: Arc<dyn Notifier>,
}

impl ScoreSubmitter {
    pub fn new(api: Arc<ApiClient>, binder: Arc<SessionBinder>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            binder,
            notifier,
        }
    }

    pub async fn submit(&self, score: i64) {
        if !self.binder.is_logged_in() {
            self.notifier.notify(
                Severity::Warning,
                "Not logged in",
                "Please log in to submit your score.",
            );
            return;
        }

        match self.api.submit_score(score).await {
            Ok(message) => {
                self.notifier
                    .notify(Severity::Success, "Score submitted", &message);
            }
            Err(err) => {
                tracing::error!("score submission failed: {err}");
                self.notifier.notify(
                    Severity::Error,
                    "Error submitting score",
                    &err.user_message("An error occurred while submitting your score."),
                );
            }
        }
    }
}
