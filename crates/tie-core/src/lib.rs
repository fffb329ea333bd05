//! Domain model for TIE: questions and their tasks, and the speech balloons
//! that make up the feedback conversation log.
//!
//! This crate performs no I/O. Loading question files and configuration lives
//! in `tie-infrastructure`.

pub mod error;
pub mod feedback;
pub mod question;

// Re-export common error type
pub use error::{Result, TieError};
