/// Application name
pub const APP_NAME: &str = "Hostel Desk";

/// Prefix for complaint identifiers in the padded ID style
pub const COMPLAINT_ID_PREFIX: &str = "C";

/// Prefix for event identifiers in the padded ID style
pub const EVENT_ID_PREFIX: &str = "E";

/// Width of the zero-padded numeric suffix ("C0001")
pub const ID_DIGITS: usize = 4;

/// Feedback rating bounds (inclusive)
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Calendar date format used in every persisted document
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wall-clock time format for attendance records
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Timestamp format for submission / creation dates
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tokens that terminate the program from any prompt that accepts them
pub const QUIT_TOKENS: [&str; 2] = ["exit", "quit"];

/// Token that returns to the login prompt
pub const LOGOUT_TOKEN: &str = "logout";

/// Token that re-prints the current menu
pub const HELP_TOKEN: &str = "help";

/// Returns true if `input` is one of the quit tokens (case-insensitive).
pub fn is_quit_token(input: &str) -> bool {
    let input = input.trim();
    QUIT_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(input))
}
