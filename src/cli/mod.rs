//! Command-line surface around the core.
//!
//! The binary writes exactly one thing to **stdout**: the root or a fixed
//! text.  Diagnostics and logs go to stderr.

pub mod args;
pub mod text;
