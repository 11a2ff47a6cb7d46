//! Parsers for the wall-clock value formats the backend and UI exchange.

mod error;
mod values;

pub use error::{ParseError, ParseResult};
pub use values::{
    parse_local_date, parse_local_datetime, parse_wall_time, weekday_from_wire, weekday_to_wire,
};
