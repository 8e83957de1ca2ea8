pub mod clock;
pub mod colors;
pub mod date;
pub mod path;
pub mod table;
pub mod time;

// Re-exports for the most used helpers
pub use date::{Instant, Locale};
pub use time::{END_OF_DAY, START_OF_DAY};
