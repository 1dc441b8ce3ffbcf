//! Role menus and choice resolution.
//!
//! Each role has a fixed, ordered table of [`Action`]s. Option `n` runs the
//! `n`th entry; the number after the last entry logs out.

use hostel_shared::constants::{is_quit_token, HELP_TOKEN, LOGOUT_TOKEN};
use hostel_shared::types::Role;

use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Rules,
    TodayMenu,
    WeeklyMenu,
    EmergencyContacts,
    Quote,
    HealthTip,
    SubmitComplaint,
    MyComplaints,
    UpcomingEvents,
    MarkAttendance,
    MyAttendance,
    SubmitFeedback,
    MyRoom,
    AllComplaints,
    UpdateComplaintStatus,
    TodayAttendance,
    RoomsOverview,
    AllocateRoom,
    AddEvent,
    ViewFeedback,
    Statistics,
    ListUsers,
    AddUser,
    DeleteUser,
    AddRoom,
    UpdateMenuDay,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rules => "View Hostel Rules",
            Self::TodayMenu => "Today's Mess Menu",
            Self::WeeklyMenu => "Weekly Mess Menu",
            Self::EmergencyContacts => "Emergency Contacts",
            Self::Quote => "Motivational Quote",
            Self::HealthTip => "Health & Study Tip",
            Self::SubmitComplaint => "Submit Complaint",
            Self::MyComplaints => "My Complaints",
            Self::UpcomingEvents => "Upcoming Events",
            Self::MarkAttendance => "Mark Attendance",
            Self::MyAttendance => "My Attendance",
            Self::SubmitFeedback => "Submit Feedback",
            Self::MyRoom => "My Room",
            Self::AllComplaints => "View All Complaints",
            Self::UpdateComplaintStatus => "Update Complaint Status",
            Self::TodayAttendance => "Today's Attendance",
            Self::RoomsOverview => "Rooms Overview",
            Self::AllocateRoom => "Allocate Room",
            Self::AddEvent => "Add Event",
            Self::ViewFeedback => "View Feedback",
            Self::Statistics => "Hostel Statistics",
            Self::ListUsers => "List Users",
            Self::AddUser => "Add User",
            Self::DeleteUser => "Delete User",
            Self::AddRoom => "Add Room",
            Self::UpdateMenuDay => "Update Mess Menu",
        }
    }
}

pub const RESIDENT_MENU: &[Action] = &[
    Action::Rules,
    Action::TodayMenu,
    Action::WeeklyMenu,
    Action::EmergencyContacts,
    Action::Quote,
    Action::HealthTip,
    Action::SubmitComplaint,
    Action::MyComplaints,
    Action::UpcomingEvents,
    Action::MarkAttendance,
    Action::MyAttendance,
    Action::SubmitFeedback,
    Action::MyRoom,
];

pub const WARDEN_MENU: &[Action] = &[
    Action::Rules,
    Action::TodayMenu,
    Action::EmergencyContacts,
    Action::AllComplaints,
    Action::UpdateComplaintStatus,
    Action::TodayAttendance,
    Action::RoomsOverview,
    Action::AllocateRoom,
    Action::AddEvent,
    Action::UpcomingEvents,
    Action::ViewFeedback,
    Action::Statistics,
];

pub const ADMIN_MENU: &[Action] = &[
    Action::Rules,
    Action::TodayMenu,
    Action::EmergencyContacts,
    Action::AllComplaints,
    Action::UpdateComplaintStatus,
    Action::TodayAttendance,
    Action::RoomsOverview,
    Action::AllocateRoom,
    Action::AddEvent,
    Action::UpcomingEvents,
    Action::ViewFeedback,
    Action::Statistics,
    Action::ListUsers,
    Action::AddUser,
    Action::DeleteUser,
    Action::AddRoom,
    Action::UpdateMenuDay,
];

pub fn menu_for(role: Role) -> &'static [Action] {
    match role {
        Role::Resident => RESIDENT_MENU,
        Role::Warden => WARDEN_MENU,
        Role::Admin => ADMIN_MENU,
    }
}

/// Option number that logs out for `role`.
pub fn logout_number(role: Role) -> usize {
    menu_for(role).len() + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Run(Action),
    Logout,
    Quit,
    Help,
    Invalid(String),
}

pub fn parse_choice(role: Role, token: &str) -> Choice {
    let token = token.trim();
    if is_quit_token(token) {
        return Choice::Quit;
    }
    if token.eq_ignore_ascii_case(LOGOUT_TOKEN) {
        return Choice::Logout;
    }
    if token.eq_ignore_ascii_case(HELP_TOKEN) {
        return Choice::Help;
    }

    let menu = menu_for(role);
    match token.parse::<usize>() {
        Ok(n) if n == logout_number(role) => Choice::Logout,
        Ok(n) if (1..=menu.len()).contains(&n) => Choice::Run(menu[n - 1]),
        _ => Choice::Invalid(token.to_string()),
    }
}

pub fn print_menu(console: &mut dyn Console, role: Role) {
    let title = match role {
        Role::Resident => "RESIDENT MENU",
        Role::Warden => "WARDEN MENU",
        Role::Admin => "ADMIN MENU",
    };
    console.header(title);
    for (i, action) in menu_for(role).iter().enumerate() {
        console.say(&format!("  {:>2}. {}", i + 1, action.label()));
    }
    console.say(&format!("  {:>2}. Logout", logout_number(role)));
    console.say("  Type 'help' to show this menu again, 'exit' to quit.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_follows_last_option() {
        assert_eq!(logout_number(Role::Resident), 14);
        assert_eq!(logout_number(Role::Warden), 13);
        assert_eq!(logout_number(Role::Admin), 18);
        assert_eq!(parse_choice(Role::Resident, "14"), Choice::Logout);
        assert_eq!(parse_choice(Role::Admin, "18"), Choice::Logout);
    }

    #[test]
    fn test_tokens_are_case_insensitive() {
        assert_eq!(parse_choice(Role::Warden, "LOGOUT"), Choice::Logout);
        assert_eq!(parse_choice(Role::Warden, " Help "), Choice::Help);
        assert_eq!(parse_choice(Role::Warden, "Quit"), Choice::Quit);
        assert_eq!(parse_choice(Role::Warden, "EXIT"), Choice::Quit);
    }

    #[test]
    fn test_numbers_resolve_per_role() {
        assert_eq!(
            parse_choice(Role::Resident, "7"),
            Choice::Run(Action::SubmitComplaint)
        );
        assert_eq!(
            parse_choice(Role::Warden, "4"),
            Choice::Run(Action::AllComplaints)
        );
        assert_eq!(parse_choice(Role::Admin, "13"), Choice::Run(Action::ListUsers));
    }

    #[test]
    fn test_invalid_choices() {
        assert!(matches!(parse_choice(Role::Resident, "0"), Choice::Invalid(_)));
        assert!(matches!(parse_choice(Role::Resident, "15"), Choice::Invalid(_)));
        assert!(matches!(parse_choice(Role::Resident, "abc"), Choice::Invalid(_)));
        assert!(matches!(parse_choice(Role::Resident, ""), Choice::Invalid(_)));
        // Residents cannot reach admin operations by number.
        assert!(!RESIDENT_MENU.contains(&Action::DeleteUser));
    }

    #[test]
    fn test_admin_menu_extends_warden_menu() {
        assert!(WARDEN_MENU.iter().all(|a| ADMIN_MENU.contains(a)));
        assert!(!WARDEN_MENU.contains(&Action::AddUser));
    }
}
