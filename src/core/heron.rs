//! Truncated integer square root via Heron's (Babylonian) method.
//!
//! The iteration starts from `x = n` and refines it with
//! `x' = (x + n / x) / 2` using truncating division until two successive
//! estimates differ by at most one.  Every estimate stays at or above
//! `floor(sqrt(n))`, so the loop stops on either the floor root or the value
//! one above it.  [`converge`] removes that overshoot; [`heron`] keeps the
//! raw result for callers that want the plain iteration.

use tracing::{debug, trace};

// ───────────────────────────────────────── result ────────────

/// Outcome of one run of the iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convergence {
    /// Final estimate.
    pub root: i64,
    /// Number of refinement steps taken (0 for non-positive input).
    pub iterations: u32,
    /// `true` when the raw estimate overshot and was stepped down by one.
    pub corrected: bool,
}

impl Convergence {
    const SENTINEL: Self = Self {
        root: 0,
        iterations: 0,
        corrected: false,
    };
}

// ───────────────────────────────────────── mode ──────────────

/// Which flavour of the iteration to run.  `sqrt_trunc` always uses `Floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Iterate, then step down once if the estimate squared exceeds `n`.
    #[default]
    Floor,
    /// Plain iteration; may land one above the floor root.
    Heron,
}

impl Mode {
    /// Every mode, in the order they are listed to users.
    pub const ALL: &[Mode] = &[Mode::Floor, Mode::Heron];

    /// Name used by `--mode`.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Floor => "floor",
            Mode::Heron => "heron",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.name() == s)
    }

    pub fn solve(self, number: i64) -> Convergence {
        match self {
            Mode::Floor => converge(number),
            Mode::Heron => heron(number),
        }
    }
}

// ───────────────────────────────────────── algorithm ─────────

/// Truncated square root of `number`: the largest `r` with `r * r <= number`.
///
/// Returns `0` for `number <= 0`.  Total over all of `i64`.
pub fn sqrt_trunc(number: i64) -> i64 {
    converge(number).root
}

/// Run the iteration and correct a one-unit overshoot.
pub fn converge(number: i64) -> Convergence {
    let raw = heron(number);
    if raw.root == 0 {
        return raw;
    }

    // The raw estimate is never below the floor root and never more than
    // one above it, so a single step down is enough.
    let overshoot = raw
        .root
        .checked_mul(raw.root)
        .map_or(true, |square| square > number);
    if !overshoot {
        return raw;
    }

    debug!(number, from = raw.root, "estimate overshot, stepping down");
    Convergence {
        root: raw.root - 1,
        corrected: true,
        ..raw
    }
}

/// Plain Heron iteration with the one-unit stopping tolerance.
pub fn heron(number: i64) -> Convergence {
    if number <= 0 {
        return Convergence::SENTINEL;
    }

    let mut x = number;
    let mut iterations = 0u32;
    loop {
        let prev = x;
        x = halved_sum(prev, number / prev);
        iterations += 1;
        trace!(number, iterations, prev, x, "heron step");
        if prev.abs_diff(x) <= 1 {
            break;
        }
    }

    debug!(number, root = x, iterations, "heron converged");
    Convergence {
        root: x,
        iterations,
        corrected: false,
    }
}

/// `(a + b) / 2` for non-negative `a` and `b` without forming `a + b`.
fn halved_sum(a: i64, b: i64) -> i64 {
    a / 2 + b / 2 + (a % 2 + b % 2) / 2
}

// ───────────────────────────────────────── tests ─────────────
