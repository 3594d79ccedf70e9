//! Utility modules for datehash.
//!
//! Helpers shared by the calendar functions and the demo binary.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Formatting of date hashes and month titles
//! - [`text`] - Zero padding and regex-driven string templating

pub mod datetime;
pub mod text;
