pub mod history;
pub mod timezone;

pub use history::IEntryHistory;
pub use timezone::{resolve_timezone, FixedTimezone, ITimezoneProvider, NamedTimezone};
