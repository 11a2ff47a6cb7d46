//! Studynamic calendar core - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `studynamic::` paths.

pub mod component {
    pub use studynamic_core::*;
}

pub use studynamic_api as api;
pub use studynamic_cal as cal;
