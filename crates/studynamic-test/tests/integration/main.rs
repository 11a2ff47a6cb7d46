//! Integration tests: backend payload through normalization, expansion,
//! and feed assembly.

mod calendar_flow;
mod client_errors;
mod helpers;
