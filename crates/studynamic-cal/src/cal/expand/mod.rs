//! Recurring schedule expansion.
//!
//! Materializes weekly class-slot rules into concrete, dated occurrences
//! over a bounded window. Expansion is a pure function of its arguments:
//! no clock access (the window carries the anchor), no I/O, no caching.
//! Re-running it over the same inputs yields byte-identical output.

mod weekly;
mod window;

pub use weekly::{expand, expand_rule};
pub use window::CalendarWindow;
