//! Core algorithm – integer square root by Heron's method.
//!
//! Nothing in this module touches the command line, the environment or the
//! filesystem.  Every function is pure and can be called from any thread.

pub mod heron;
