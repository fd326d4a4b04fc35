use std::sync::Arc;

use board_types::{Credentials, Session, SessionProbe};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::notify::{Notifier, Severity};
use crate::view::{GamePage, SessionBinder};

/// Register, login, logout and the startup session check. Every operation
/// terminates locally: failures become notifications (or a warn line for
/// the best-effort session check) and never propagate to the caller.
pub struct AuthController {
    api: Arc<ApiClient>,
    binder: Arc<SessionBinder>,
    notifier: Arc<dyn Notifier>,
    page: Arc<dyn GamePage>,
}

impl AuthController {
    pub fn new(
        api: Arc<ApiClient>,
        binder: Arc<SessionBinder>,
        notifier: Arc<dyn Notifier>,
        page: Arc<dyn GamePage>,
    ) -> Self {
        Self {
            api,
            binder,
            notifier,
            page,
        }
    }

    /// Empty-field guard shared by register and login. Fails fast with a
    /// `Validation` error before any network call happens.
    fn validated(
        username: &str,
        password: &str,
        empty_message: &str,
    ) -> Result<Credentials, ApiError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(empty_message.to_string()));
        }
        Ok(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub async fn register(&self, username: &str, password: &str) {
        let credentials = match Self::validated(username, password, "Please fill in all fields.") {
            Ok(credentials) => credentials,
            Err(err) => {
                self.notifier.notify(
                    Severity::Error,
                    "Registration Failed",
                    &err.user_message("An unexpected error occurred. Please try again."),
                );
                return;
            }
        };

        match self.api.register(&credentials).await {
            Ok(message) => {
                self.notifier
                    .notify(Severity::Success, "Registration Successful", &message);
                self.page.close_register_modal();
                self.page.reset_register_form();
            }
            Err(err) => {
                tracing::error!("registration failed: {err}");
                self.notifier.notify(
                    Severity::Error,
                    "Registration Failed",
                    &err.user_message("An unexpected error occurred. Please try again."),
                );
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) {
        let credentials = match Self::validated(username, password, "Please fill in all fields") {
            Ok(credentials) => credentials,
            Err(err) => {
                self.notifier.notify(
                    Severity::Error,
                    "Login Failed",
                    &err.user_message("An error occurred during login."),
                );
                return;
            }
        };

        // Ticket first, so a later session mutation can supersede this one.
        let ticket = self.binder.begin();

        match self.api.login(&credentials).await {
            Ok(body) => {
                let Some(session) = Session::from_wire(body.user) else {
                    let err = ApiError::Malformed("login user record with empty identity");
                    tracing::error!("login failed: {err}");
                    self.notifier.notify(
                        Severity::Error,
                        "Login Failed",
                        &err.user_message("An error occurred during login."),
                    );
                    return;
                };

                if !self.binder.apply(ticket, Some(session)) {
                    tracing::debug!("login result superseded by a later session mutation");
                    return;
                }

                self.page.reset_login_form();
                self.page.close_login_modal();
                self.notifier
                    .notify(Severity::Success, "Login Successful", &body.message);
            }
            Err(err) => {
                tracing::error!("login failed: {err}");
                self.notifier.notify(
                    Severity::Error,
                    "Login Failed",
                    &err.user_message("An error occurred during login."),
                );
            }
        }
    }

    pub async fn logout(&self) {
        let ticket = self.binder.begin();

        match self.api.logout().await {
            Ok(message) => {
                if self.binder.apply(ticket, None) {
                    self.page.set_score_label(0);
                }
                self.notifier
                    .notify(Severity::Success, "Logout Successful", &message);
            }
            Err(err) => {
                // The server may still consider the session live, so the
                // local session and score display stay as they are.
                tracing::error!("logout failed: {err}");
                self.notifier.notify(
                    Severity::Error,
                    "Logout Failed",
                    &err.user_message("An error occurred during logout."),
                );
            }
        }
    }

    /// Startup reconciliation against the server's cookie session. Not a
    /// gate: a failed check keeps whatever state the client already had and
    /// reports `Indeterminate` instead of notifying the user.
    pub async fn check_session(&self) -> SessionProbe {
        let ticket = self.binder.begin();

        let body = match self.api.session().await {
            Ok(body) => body,
            Err(ApiError::Rejected { status, message }) => {
                // A definite server answer that is not an active session
                // clears local state, same as a clean loggedIn=false.
                tracing::warn!("session check rejected ({status}): {message}");
                self.binder.apply(ticket, None);
                return SessionProbe::Inactive;
            }
            Err(err) => {
                tracing::warn!("session check failed, keeping prior state: {err}");
                return SessionProbe::Indeterminate;
            }
        };

        if !body.logged_in {
            self.binder.apply(ticket, None);
            return SessionProbe::Inactive;
        }

        let session = match body.user.and_then(Session::from_wire) {
            Some(session) => session,
            None => {
                let err = ApiError::Malformed("session user record with empty identity");
                tracing::warn!("session check unusable, keeping prior state: {err}");
                return SessionProbe::Indeterminate;
            }
        };

        if self.binder.apply(ticket, Some(session.clone())) {
            self.page.set_score_label(session.score);
        }
        SessionProbe::Active(session)
    }
}
