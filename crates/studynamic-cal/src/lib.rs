//! Pure calendar logic for Studynamic: the domain model, wall-clock value
//! parsing, recurring schedule expansion, and calendar feed assembly.
//!
//! Everything in this crate is synchronous and side-effect free; fetching
//! records from the backend lives in `studynamic-api`, and rendering lives
//! in the UI shell.

pub mod cal;
