pub mod constants;
pub mod content;
pub mod error;
pub mod types;

pub use error::ParseError;
