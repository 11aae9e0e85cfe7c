//! Small shared utilities.

pub mod sentence;
