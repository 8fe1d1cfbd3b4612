pub mod logger;

pub use logger::{CalendarLogger, LOGGER};
