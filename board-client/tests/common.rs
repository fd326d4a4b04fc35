#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;
use warp::Filter;
use warp::http::StatusCode;

use board_client::{
    ApiClient, AuthController, Config, GamePage, LeaderboardController, MemoryPage, Notifier,
    ScoreSubmitter, SessionBinder, Severity,
};
use board_core::SessionStore;
use board_types::{ErrorBody, LeaderboardEntry, LoginBody, MessageBody, SessionBody, WireUser};

/// Per-endpoint request counters, for asserting that validation guards
/// really do short-circuit before the network.
#[derive(Default)]
pub struct Hits {
    pub register: AtomicUsize,
    pub login: AtomicUsize,
    pub logout: AtomicUsize,
    pub session: AtomicUsize,
    pub score: AtomicUsize,
    pub leaderboard: AtomicUsize,
    pub full_leaderboard: AtomicUsize,
}

#[derive(Clone)]
pub enum LoginOutcome {
    Accept {
        username: String,
        uid: String,
        score: i64,
    },
    Reject {
        status: u16,
        error: String,
    },
}

#[derive(Clone)]
pub enum SessionOutcome {
    Active {
        username: String,
        uid: String,
        score: i64,
    },
    Inactive,
    Reject {
        status: u16,
    },
}

/// Canned behavior for the mock API.
#[derive(Clone)]
pub struct MockState {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub full_leaderboard: Vec<LeaderboardEntry>,
    pub login: LoginOutcome,
    pub session: SessionOutcome,
    pub logout_ok: bool,
    pub score_ok: bool,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            leaderboard: Vec::new(),
            full_leaderboard: Vec::new(),
            login: LoginOutcome::Accept {
                username: "alice".to_string(),
                uid: "uid-alice".to_string(),
                score: 42,
            },
            session: SessionOutcome::Inactive,
            logout_ok: true,
            score_ok: true,
        }
    }
}

pub fn entry(username: &str, score: i64) -> LeaderboardEntry {
    LeaderboardEntry {
        username: username.to_string(),
        score,
    }
}

fn to_value<T: serde::Serialize>(body: T) -> Value {
    serde_json::to_value(body).unwrap()
}

fn json_reply(value: &Value, status: StatusCode) -> impl warp::Reply + use<> {
    warp::reply::with_status(warp::reply::json(value), status)
}

/// Serves the full endpoint table on an ephemeral loopback port.
pub async fn start_mock_api(state: MockState) -> (SocketAddr, Arc<Hits>) {
    let hits = Arc::new(Hits::default());
    let state = Arc::new(state);

    let register = warp::path("register")
        .and(warp::post())
        .and(warp::body::json())
        .map({
            let hits = hits.clone();
            move |_body: Value| {
                hits.register.fetch_add(1, Ordering::SeqCst);
                let body = to_value(MessageBody {
                    message: "Account created".to_string(),
                });
                json_reply(&body, StatusCode::OK)
            }
        });

    let login = warp::path("login")
        .and(warp::post())
        .and(warp::body::json())
        .map({
            let hits = hits.clone();
            let state = state.clone();
            move |_body: Value| {
                hits.login.fetch_add(1, Ordering::SeqCst);
                let (body, status) = match &state.login {
                    LoginOutcome::Accept {
                        username,
                        uid,
                        score,
                    } => (
                        to_value(LoginBody {
                            message: "Welcome back".to_string(),
                            user: WireUser {
                                username: username.clone(),
                                uid: uid.clone(),
                                score: *score,
                                logged_in: true,
                            },
                        }),
                        StatusCode::OK,
                    ),
                    LoginOutcome::Reject { status, error } => (
                        to_value(ErrorBody {
                            error: Some(error.clone()),
                            message: None,
                        }),
                        StatusCode::from_u16(*status).unwrap(),
                    ),
                };
                json_reply(&body, status)
            }
        });

    let logout = warp::path("logout").and(warp::post()).map({
        let hits = hits.clone();
        let state = state.clone();
        move || {
            hits.logout.fetch_add(1, Ordering::SeqCst);
            let (body, status) = if state.logout_ok {
                (
                    to_value(MessageBody {
                        message: "Logged out".to_string(),
                    }),
                    StatusCode::OK,
                )
            } else {
                (
                    to_value(ErrorBody {
                        error: None,
                        message: Some("Session teardown failed".to_string()),
                    }),
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            };
            json_reply(&body, status)
        }
    });

    let session = warp::path("session").and(warp::get()).map({
        let hits = hits.clone();
        let state = state.clone();
        move || {
            hits.session.fetch_add(1, Ordering::SeqCst);
            let (body, status) = match &state.session {
                SessionOutcome::Active {
                    username,
                    uid,
                    score,
                } => (
                    to_value(SessionBody {
                        logged_in: true,
                        user: Some(WireUser {
                            username: username.clone(),
                            uid: uid.clone(),
                            score: *score,
                            logged_in: true,
                        }),
                    }),
                    StatusCode::OK,
                ),
                SessionOutcome::Inactive => (
                    to_value(SessionBody {
                        logged_in: false,
                        user: None,
                    }),
                    StatusCode::OK,
                ),
                SessionOutcome::Reject { status } => (
                    to_value(ErrorBody {
                        error: None,
                        message: Some("Session expired".to_string()),
                    }),
                    StatusCode::from_u16(*status).unwrap(),
                ),
            };
            json_reply(&body, status)
        }
    });

    let score = warp::path("score")
        .and(warp::post())
        .and(warp::body::json())
        .map({
            let hits = hits.clone();
            let state = state.clone();
            move |_body: Value| {
                hits.score.fetch_add(1, Ordering::SeqCst);
                let (body, status) = if state.score_ok {
                    (
                        to_value(MessageBody {
                            message: "Score recorded".to_string(),
                        }),
                        StatusCode::OK,
                    )
                } else {
                    (
                        to_value(ErrorBody {
                            error: None,
                            message: Some("Score rejected".to_string()),
                        }),
                        StatusCode::BAD_REQUEST,
                    )
                };
                json_reply(&body, status)
            }
        });

    let leaderboard = warp::path("leaderboard").and(warp::post()).map({
        let hits = hits.clone();
        let state = state.clone();
        move || {
            hits.leaderboard.fetch_add(1, Ordering::SeqCst);
            json_reply(&to_value(&state.leaderboard), StatusCode::OK)
        }
    });

    let full_leaderboard = warp::path("allleaderboard").and(warp::post()).map({
        let hits = hits.clone();
        let state = state.clone();
        move || {
            hits.full_leaderboard.fetch_add(1, Ordering::SeqCst);
            json_reply(&to_value(&state.full_leaderboard), StatusCode::OK)
        }
    });

    let routes = register
        .or(login)
        .or(logout)
        .or(session)
        .or(score)
        .or(leaderboard)
        .or(full_leaderboard);

    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, hits)
}

/// Captures notifications for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(Severity, String, String)>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<(Severity, String, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(Severity, String, String)> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((severity, title.to_string(), message.to_string()));
    }
}

/// A fully wired client stack pointed at a given base URL.
pub struct Harness {
    pub auth: AuthController,
    pub leaderboard: LeaderboardController,
    pub submitter: ScoreSubmitter,
    pub binder: Arc<SessionBinder>,
    pub page: Arc<MemoryPage>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn build_harness(base_url: &str) -> Harness {
    let config = Config {
        api_base_url: base_url.to_string(),
    };
    let api = Arc::new(ApiClient::new(&config).unwrap());
    let page = Arc::new(MemoryPage::new());
    let page_dyn: Arc<dyn GamePage> = page.clone();
    let notifier = Arc::new(RecordingNotifier::default());
    let notifier_dyn: Arc<dyn Notifier> = notifier.clone();
    let store = Arc::new(SessionStore::new());
    let binder = Arc::new(SessionBinder::new(store, page_dyn.clone()));

    Harness {
        auth: AuthController::new(
            api.clone(),
            binder.clone(),
            notifier_dyn.clone(),
            page_dyn.clone(),
        ),
        leaderboard: LeaderboardController::new(api.clone(), notifier_dyn.clone(), page_dyn),
        submitter: ScoreSubmitter::new(api, binder.clone(), notifier_dyn),
        binder,
        page,
        notifier,
    }
}

pub fn mock_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}

/// A loopback port nothing listens on, for transport-failure tests.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";
