//! The prompt/response loop.
//!
//! [`App::run`] alternates between the login prompt and the role menu until
//! the session state reaches [`SessionState::Terminated`].

use chrono::NaiveDateTime;
use hostel_shared::constants::APP_NAME;
use hostel_store::RecordStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::{self, Ctx};
use crate::console::Console;
use crate::dispatcher::{parse_choice, print_menu, Choice};
use crate::session::{login, LoginOutcome, Session, SessionEvent, SessionState};

pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub struct App {
    store: RecordStore,
    clock: Clock,
    rng: StdRng,
}

impl App {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            clock: local_now,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed clock and seed, for reproducible runs.
    pub fn with_clock(mut self, clock: Clock, seed: u64) -> Self {
        self.clock = clock;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn run(&mut self, console: &mut dyn Console) {
        console.header(&format!("Welcome to {APP_NAME}"));

        let mut state = SessionState::LoggedOut;
        loop {
            state = match state {
                SessionState::Terminated => break,
                SessionState::LoggedOut => {
                    match login(&self.store, console, (self.clock)()) {
                        LoginOutcome::Authenticated(session) => SessionState::LoggedOut
                            .next(SessionEvent::LoginSucceeded(session)),
                        LoginOutcome::Rejected => SessionState::LoggedOut,
                        LoginOutcome::Quit => SessionState::LoggedOut.next(SessionEvent::Quit),
                    }
                }
                SessionState::LoggedIn(session) => {
                    let event = self.session_loop(&session, console);
                    SessionState::LoggedIn(session).next(event)
                }
            };
        }

        tracing::info!("desk closed");
        console.say("\nGoodbye!");
    }

    /// Serve one logged-in user until they log out or quit.
    fn session_loop(&mut self, session: &Session, console: &mut dyn Console) -> SessionEvent {
        let role = session.role();
        print_menu(console, role);

        loop {
            let Some(input) = console.read_line("\nEnter your choice: ") else {
                return SessionEvent::Quit;
            };

            match parse_choice(role, &input) {
                Choice::Run(action) => {
                    let mut ctx = Ctx {
                        store: &self.store,
                        console: &mut *console,
                        session,
                        now: (self.clock)(),
                        rng: &mut self.rng,
                    };
                    commands::dispatch(action, &mut ctx);
                    print_menu(console, role);
                }
                Choice::Help => print_menu(console, role),
                Choice::Logout => {
                    tracing::info!(
                        username = %session.username(),
                        minutes = session.elapsed((self.clock)()).num_minutes(),
                        "logged out"
                    );
                    console.say(&format!("\nGoodbye, {}! Logged out.", session.display_name()));
                    return SessionEvent::Logout;
                }
                Choice::Quit => return SessionEvent::Quit,
                Choice::Invalid(token) => {
                    console.say(&format!("\nInvalid choice '{token}'. Please try again."));
                    print_menu(console, role);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());
        store.seed_defaults().unwrap();
        (dir, App::new(store).with_clock(fixed_now, 1))
    }

    fn run(app: &mut App, inputs: &[&str]) -> ScriptedConsole {
        let mut console = ScriptedConsole::new(inputs.iter().copied());
        app.run(&mut console);
        console
    }

    #[test]
    fn test_failed_login_then_success_then_quit() {
        let (_dir, mut app) = app();
        let console = run(
            &mut app,
            &["sarah", "nope", "sarah", "sarah123", "exit"],
        );
        assert!(console.printed("Invalid username or password"));
        assert!(console.printed("RESIDENT MENU"));
        assert!(console.printed("Goodbye!"));
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn test_quit_at_login_prompt() {
        let (_dir, mut app) = app();
        let console = run(&mut app, &["QUIT", "never read"]);
        assert!(console.printed("Goodbye!"));
        assert_eq!(console.remaining_inputs(), 1);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let (_dir, mut app) = app();
        let console = run(
            &mut app,
            &["warden", "warden123", "13", "admin", "admin123", "Logout", "exit"],
        );
        assert!(console.printed("WARDEN MENU"));
        assert!(console.printed("ADMIN MENU"));
        assert!(console.printed("Goodbye, Hostel Warden! Logged out."));
        assert!(console.printed("Goodbye, Hostel Administrator! Logged out."));
    }

    #[test]
    fn test_invalid_choice_stays_in_menu() {
        let (_dir, mut app) = app();
        let console = run(&mut app, &["sarah", "sarah123", "42", "help", "quit"]);
        assert!(console.printed("Invalid choice '42'"));
        let menus = console
            .output()
            .iter()
            .filter(|l| l.contains("RESIDENT MENU"))
            .count();
        assert_eq!(menus, 3);
    }

    #[test]
    fn test_resident_cannot_reach_admin_actions() {
        let (_dir, mut app) = app();
        // Resident option 16 does not exist; admin's "Delete User" is 15.
        run(&mut app, &["sarah", "sarah123", "15", "16", "aisha", "y", "exit"]);
        assert!(app.store().find_user("aisha").is_some());
    }

    #[test]
    fn test_complaint_and_attendance_round() {
        let (_dir, mut app) = app();
        let console = run(
            &mut app,
            &[
                "sarah", "sarah123", "7", "2", "Light flickers", "10", "10", "logout", "exit",
            ],
        );
        assert!(console.printed("Complaint C0001 submitted. Status: Open"));
        assert!(console.printed("Attendance marked for sarah (room 101) at 09:00:00."));
        assert!(console.printed("Error: Attendance already marked"));
        assert_eq!(app.store().attendance().len(), 1);
    }

    #[test]
    fn test_closed_input_ends_run() {
        let (_dir, mut app) = app();
        let console = run(&mut app, &["admin", "admin123"]);
        assert!(console.printed("ADMIN MENU"));
        assert!(console.printed("Goodbye!"));
    }
}
