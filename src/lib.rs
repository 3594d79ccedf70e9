//! datehash - date arithmetic for month-grid calendar widgets
//!
//! Everything works on [`DateHash`], a plain `{year, month, date}` triple with
//! a 1-based month. Out-of-range fields are carried through the proleptic
//! Gregorian calendar instead of being rejected, so `{2010, 1, 0}` means
//! 2009-12-31.
//!
//! # Modules
//!
//! * [`calendar`] - Weekday, month length, week count and offset arithmetic
//! * [`clock`] - Injectable source of "today"
//! * [`config`] - Configuration file handling
//! * [`grid`] - 7-column month layouts
//! * [`util`] - [`DateHashUtil`], the helper set bound to a clock
//! * [`utils`] - Formatting and string templating helpers

/// Calendar arithmetic on date hashes
pub mod calendar;

/// Clock abstraction for reading the current date
pub mod clock;

/// Configuration module for managing application settings
pub mod config;

/// Crate constants and default values
pub mod constants;

/// The date hash value type
pub mod date_hash;

/// Error types
pub mod error;

/// Month grid layout
pub mod grid;

/// Logging setup
pub mod logger;

/// Date hash helpers bound to a clock and week start
pub mod util;

/// Utility functions for formatting and templating
pub mod utils;

pub use calendar::WeekStart;
pub use clock::{Clock, FixedClock, SystemClock};
pub use date_hash::DateHash;
pub use error::CalendarError;
pub use util::DateHashUtil;
