use std::fmt;
use std::time::{Duration, Instant};

use crate::model::user::{Credential, User};

/// The one message shown for every failed login, whatever the cause
pub const LOGIN_FAILED_MESSAGE: &str = "invalid username or password";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Who is signed in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

/// A login waiting out its simulated delay
#[derive(Clone)]
pub struct PendingLogin {
    pub username: String,
    password: String,
    pub due: Instant,
}

impl fmt::Debug for PendingLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLogin")
            .field("username", &self.username)
            .field("due", &self.due)
            .finish_non_exhaustive()
    }
}

impl PendingLogin {
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// Match a username/password against the credential set. Usernames compare
/// case-insensitively, passwords exactly. The user carries the stored name.
pub fn authenticate(credentials: &[Credential], username: &str, password: &str) -> Option<User> {
    let wanted = username.to_lowercase();
    credentials
        .iter()
        .find(|c| c.username.to_lowercase() == wanted && c.password == password)
        .map(|c| User {
            username: c.username.clone(),
        })
}

/// The login/logout state machine guarding the dashboard
#[derive(Debug, Clone)]
pub struct SessionGate {
    state: SessionState,
    credentials: Vec<Credential>,
    login_delay: Duration,
}

impl SessionGate {
    pub fn new(credentials: Vec<Credential>, login_delay: Duration) -> Self {
        SessionGate {
            state: SessionState::Anonymous,
            credentials,
            login_delay,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn login_delay(&self) -> Duration {
        self.login_delay
    }

    /// Check credentials and sign in. On failure the state is left as it was.
    pub fn login(&mut self, username: &str, password: &str) -> Result<User, LoginError> {
        match authenticate(&self.credentials, username, password) {
            Some(user) => {
                tracing::info!(username = %user.username, "login succeeded");
                self.state = SessionState::Authenticated(user.clone());
                Ok(user)
            }
            None => {
                tracing::info!(username, "login rejected");
                Err(LoginError::InvalidCredentials)
            }
        }
    }

    /// Start a login that completes once the configured delay has passed.
    pub fn begin_login(&self, username: &str, password: &str, now: Instant) -> PendingLogin {
        PendingLogin {
            username: username.to_string(),
            password: password.to_string(),
            due: now + self.login_delay,
        }
    }

    /// Finish a pending login.
    pub fn complete(&mut self, pending: PendingLogin) -> Result<User, LoginError> {
        self.login(&pending.username, &pending.password)
    }

    pub fn logout(&mut self) {
        if let SessionState::Authenticated(user) = &self.state {
            tracing::info!(username = %user.username, "logged out");
        }
        self.state = SessionState::Anonymous;
    }
}
