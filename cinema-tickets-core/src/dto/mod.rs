//!
//! Module with all dtos that are received from untyped callers
//!

pub mod input;
