//! Login lifecycle.
//!
//! The current user is an explicit [`Session`] value carried by
//! [`SessionState`]; transitions are a pure function of (state, event).

use chrono::{Duration, NaiveDateTime};
use hostel_shared::constants::is_quit_token;
use hostel_shared::types::Role;
use hostel_store::{RecordStore, User};

use crate::console::Console;

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub started_at: NaiveDateTime,
}

impl Session {
    pub fn new(user: User, started_at: NaiveDateTime) -> Self {
        Self { user, started_at }
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    /// Time since login, never negative.
    pub fn elapsed(&self, now: NaiveDateTime) -> Duration {
        (now - self.started_at).max(Duration::zero())
    }

    /// Full name if set, otherwise the username.
    pub fn display_name(&self) -> &str {
        if self.user.full_name.trim().is_empty() {
            &self.user.username
        } else {
            &self.user.full_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(Session),
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoginSucceeded(Session),
    Logout,
    Quit,
}

impl SessionState {
    pub fn next(self, event: SessionEvent) -> SessionState {
        match (self, event) {
            (SessionState::Terminated, _) => SessionState::Terminated,
            (_, SessionEvent::Quit) => SessionState::Terminated,
            (SessionState::LoggedOut, SessionEvent::LoginSucceeded(session)) => {
                SessionState::LoggedIn(session)
            }
            (SessionState::LoggedOut, SessionEvent::Logout) => SessionState::LoggedOut,
            (SessionState::LoggedIn(_), SessionEvent::Logout) => SessionState::LoggedOut,
            // Already logged in: a second login is ignored.
            (state @ SessionState::LoggedIn(_), SessionEvent::LoginSucceeded(_)) => state,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, SessionState::Terminated)
    }
}

/// Result of one pass through the login prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(Session),
    Rejected,
    Quit,
}

/// Ask for credentials once. "exit"/"quit" at either prompt, or closed
/// input, ends the program.
pub fn login(store: &RecordStore, console: &mut dyn Console, now: NaiveDateTime) -> LoginOutcome {
    console.header("LOGIN");
    console.say("Type 'exit' to quit.");

    let Some(username) = console.read_line("  Username: ") else {
        return LoginOutcome::Quit;
    };
    if is_quit_token(&username) {
        return LoginOutcome::Quit;
    }

    let Some(password) = console.read_line("  Password: ") else {
        return LoginOutcome::Quit;
    };
    if is_quit_token(&password) {
        return LoginOutcome::Quit;
    }

    match store.authenticate(&username, &password) {
        Some(user) => {
            let session = Session::new(user, now);
            console.say(&format!(
                "\nWelcome, {}! Logged in as {}.",
                session.display_name(),
                session.role()
            ));
            LoginOutcome::Authenticated(session)
        }
        None => {
            console.say("\nInvalid username or password. Please try again.");
            LoginOutcome::Rejected
        }
    }
}
