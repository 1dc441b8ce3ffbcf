//! Menu action handlers.
//!
//! Each sub-module groups related actions by domain. Handlers prompt
//! through the [`Console`], call into the store, and print the outcome.
//! Store errors are printed inline by [`dispatch`]; the menu loop keeps
//! running.

pub mod attendance;
pub mod complaints;
pub mod events;
pub mod feedback;
pub mod info;
pub mod menu;
pub mod rooms;
pub mod stats;
pub mod users;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use hostel_store::{RecordStore, StoreError};
use rand::RngCore;

use crate::console::Console;
use crate::dispatcher::Action;
use crate::session::Session;

/// Everything a handler can touch for one action.
pub struct Ctx<'a> {
    pub store: &'a RecordStore,
    pub console: &'a mut dyn Console,
    pub session: &'a Session,
    pub now: NaiveDateTime,
    pub rng: &'a mut dyn RngCore,
}

pub type CommandResult = Result<(), StoreError>;

pub fn dispatch(action: Action, ctx: &mut Ctx<'_>) {
    tracing::debug!(?action, user = %ctx.session.username(), "running action");

    let result = match action {
        Action::Rules => info::rules(ctx),
        Action::TodayMenu => info::today_menu(ctx),
        Action::WeeklyMenu => info::weekly_menu(ctx),
        Action::EmergencyContacts => info::contacts(ctx),
        Action::Quote => info::quote(ctx),
        Action::HealthTip => info::tip(ctx),
        Action::SubmitComplaint => complaints::submit(ctx),
        Action::MyComplaints => complaints::mine(ctx),
        Action::AllComplaints => complaints::all(ctx),
        Action::UpdateComplaintStatus => complaints::update_status(ctx),
        Action::MarkAttendance => attendance::mark(ctx),
        Action::MyAttendance => attendance::mine(ctx),
        Action::TodayAttendance => attendance::today(ctx),
        Action::UpcomingEvents => events::upcoming(ctx),
        Action::AddEvent => events::add(ctx),
        Action::MyRoom => rooms::my_room(ctx),
        Action::RoomsOverview => rooms::overview(ctx),
        Action::AllocateRoom => rooms::allocate(ctx),
        Action::AddRoom => rooms::add(ctx),
        Action::SubmitFeedback => feedback::submit(ctx),
        Action::ViewFeedback => feedback::view(ctx),
        Action::Statistics => stats::show(ctx),
        Action::ListUsers => users::list(ctx),
        Action::AddUser => users::add(ctx),
        Action::DeleteUser => users::delete(ctx),
        Action::UpdateMenuDay => menu::update_day(ctx),
    };

    if let Err(e) = result {
        match &e {
            StoreError::Io(_) | StoreError::Json(_) => {
                tracing::error!(error = %e, ?action, "write failed");
            }
            _ => tracing::debug!(error = %e, ?action, "action rejected"),
        }
        ctx.console.say(&format!("\nError: {e}"));
    }
}

/// Prompt until the answer is non-empty; `None` if input closes.
pub(crate) fn ask_required(console: &mut dyn Console, prompt: &str) -> Option<String> {
    loop {
        let answer = console.read_line(prompt)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Some(answer.to_string());
        }
        console.say("  This field cannot be empty.");
    }
}

/// Prompt until the answer parses as `T`, printing the parse error each
/// time; `None` if input closes.
pub(crate) fn ask_parsed<T>(console: &mut dyn Console, prompt: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    loop {
        let answer = console.read_line(prompt)?;
        match answer.trim().parse::<T>() {
            Ok(value) => return Some(value),
            Err(e) => console.say(&format!("  {e}")),
        }
    }
}

/// Empty answers become `None`.
pub(crate) fn ask_optional(console: &mut dyn Console, prompt: &str) -> Option<String> {
    let answer = console.ask(prompt);
    (!answer.is_empty()).then_some(answer)
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{NaiveDate, NaiveDateTime};
    use hostel_store::RecordStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    use super::{dispatch, Ctx};
    use crate::console::ScriptedConsole;
    use crate::dispatcher::Action;
    use crate::session::Session;

    pub fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    /// Seeded store in a temporary directory.
    pub fn seeded() -> (TempDir, RecordStore) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());
        store.seed_defaults().unwrap();
        (dir, store)
    }

    pub fn session_for(store: &RecordStore, username: &str) -> Session {
        let user = store.find_user(username).unwrap();
        Session::new(user, now())
    }

    /// Run one action as `username` with scripted input.
    pub fn run_as(
        store: &RecordStore,
        username: &str,
        action: Action,
        inputs: &[&str],
    ) -> ScriptedConsole {
        let session = session_for(store, username);
        let mut console = ScriptedConsole::new(inputs.iter().copied());
        let mut rng = StdRng::seed_from_u64(7);
        let mut ctx = Ctx {
            store,
            console: &mut console,
            session: &session,
            now: now(),
            rng: &mut rng,
        };
        dispatch(action, &mut ctx);
        console
    }
}
