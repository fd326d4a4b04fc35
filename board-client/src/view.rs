use std::sync::{Arc, Mutex};

use board_core::{PODIUM_SLOTS, SessionStore, WriteTicket};
use board_types::{LeaderboardEntry, Session};

/// Username label shown while nobody is logged in.
pub const GUEST_LABEL: &str = "Guest";

/// The page as the controllers see it: fixed nav elements, a score label,
/// three podium slots and the two auth forms. Read/write only, no
/// structural mutation.
pub trait GamePage: Send + Sync {
    fn show_logged_in(&self, username: &str);
    fn show_logged_out(&self);
    fn set_score_label(&self, score: i64);
    fn set_podium_slot(&self, slot: usize, entry: Option<&LeaderboardEntry>);
    fn reset_login_form(&self);
    fn reset_register_form(&self);
    fn close_login_modal(&self);
    fn close_register_modal(&self);
}

/// The designated writer for the session store. Controllers go through
/// `begin`/`apply`; an accepted commit synchronously re-renders the nav, so
/// visible state never drifts from the stored session.
pub struct SessionBinder {
    store: Arc<SessionStore>,
    page: Arc<dyn GamePage>,
}

impl SessionBinder {
    pub fn new(store: Arc<SessionStore>, page: Arc<dyn GamePage>) -> Self {
        Self { store, page }
    }

    pub fn current(&self) -> Option<Session> {
        self.store.current()
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in()
    }

    pub fn begin(&self) -> WriteTicket {
        self.store.begin_mutation()
    }

    /// Commits and, if the ticket was still current, reflects the new value
    /// into the nav. Returns whether the commit landed.
    pub fn apply(&self, ticket: WriteTicket, value: Option<Session>) -> bool {
        if !self.store.commit(ticket, value) {
            return false;
        }
        self.render();
        true
    }

    /// Re-renders the nav from the stored session. Idempotent: rendering
    /// the same value twice produces the same visible state.
    pub fn render(&self) {
        match self.store.current() {
            Some(session) => self.page.show_logged_in(&session.username),
            None => self.page.show_logged_out(),
        }
    }
}

/// What one podium slot displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodiumSlot {
    pub name: String,
    pub score: String,
}

/// Snapshot of everything the page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub login_visible: bool,
    pub register_visible: bool,
    pub logout_visible: bool,
    pub username_label: String,
    pub score_label: String,
    pub podium: [PodiumSlot; PODIUM_SLOTS],
    pub login_modal_open: bool,
    pub register_modal_open: bool,
}

impl Default for PageSnapshot {
    fn default() -> Self {
        Self {
            login_visible: true,
            register_visible: true,
            logout_visible: false,
            username_label: GUEST_LABEL.to_string(),
            score_label: "0".to_string(),
            podium: Default::default(),
            login_modal_open: false,
            register_modal_open: false,
        }
    }
}

/// In-memory stand-in for the DOM. The binary renders from its snapshot
/// and tests assert against it.
#[derive(Default)]
pub struct MemoryPage {
    state: Mutex<PageSnapshot>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.lock().unwrap().clone()
    }

    pub fn open_login_modal(&self) {
        self.state.lock().unwrap().login_modal_open = true;
    }

    pub fn open_register_modal(&self) {
        self.state.lock().unwrap().register_modal_open = true;
    }
}

impl GamePage for MemoryPage {
    fn show_logged_in(&self, username: &str) {
        let mut state = self.state.lock().unwrap();
        state.login_visible = false;
        state.register_visible = false;
        state.logout_visible = true;
        state.username_label = username.to_string();
    }

    fn show_logged_out(&self) {
        let mut state = self.state.lock().unwrap();
        state.login_visible = true;
        state.register_visible = true;
        state.logout_visible = false;
        state.username_label = GUEST_LABEL.to_string();
    }

    fn set_score_label(&self, score: i64) {
        self.state.lock().unwrap().score_label = score.to_string();
    }

    fn set_podium_slot(&self, slot: usize, entry: Option<&LeaderboardEntry>) {
        let mut state = self.state.lock().unwrap();
        let Some(display) = state.podium.get_mut(slot) else {
            return;
        };
        *display = match entry {
            Some(entry) => PodiumSlot {
                name: entry.username.clone(),
                score: entry.score.to_string(),
            },
            None => PodiumSlot::default(),
        };
    }

    fn reset_login_form(&self) {
        // Credentials are never stored here; only the modal state exists.
        self.state.lock().unwrap().login_modal_open = false;
    }

    fn reset_register_form(&self) {
        self.state.lock().unwrap().register_modal_open = false;
    }

    fn close_login_modal(&self) {
        self.state.lock().unwrap().login_modal_open = false;
    }

    fn close_register_modal(&self) {
        self.state.lock().unwrap().register_modal_open = false;
    }
}
