//! Truncated integer square root by Heron's (Babylonian) method.
//!
//! ```
//! assert_eq!(babylon::sqrt_trunc(8), 2);
//! assert_eq!(babylon::sqrt_trunc(-5), 0);
//! ```

pub mod core;

pub use crate::core::heron::{converge, heron, sqrt_trunc, Convergence, Mode};
