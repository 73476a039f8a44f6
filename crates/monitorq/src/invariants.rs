//! Debug assertion macros for the queue's structural invariants.
//!
//! Only active in debug builds (`#[cfg(debug_assertions)]`), so there is
//! zero overhead in release builds. All of them fire while the queue's lock
//! is held, where the checked state cannot move underneath them.

// =============================================================================
// Bounded Length
// =============================================================================

/// Assert that the buffer never exceeds its capacity.
///
/// **Invariant**: `0 ≤ len ≤ capacity` whenever observed under the lock
///
/// Used in: `push()` right after the enqueue
macro_rules! debug_assert_bounded_len {
    ($len:expr, $capacity:expr) => {
        debug_assert!(
            $len <= $capacity,
            "bounded length violated: len {} exceeds capacity {}",
            $len,
            $capacity
        )
    };
}

// =============================================================================
// Monotonic Shutdown
// =============================================================================

/// Assert the shutdown flag only ever transitions false → true.
///
/// **Invariant**: once `shutdown` reads true it never reads false again
///
/// Used in: `shutdown()` after setting the flag
macro_rules! debug_assert_shutdown_monotonic {
    ($was:expr, $now:expr) => {
        debug_assert!(
            $now || !$was,
            "shutdown monotonicity violated: flag went from {} to {}",
            $was,
            $now
        )
    };
}

// =============================================================================
// Drained Terminal
// =============================================================================

/// Assert that a blocking `pop` only reports "no item" in the terminal
/// state.
///
/// **Invariant**: `pop() == None ⟹ shutdown ∧ empty`
///
/// Used in: `pop()` on the `None` return path
macro_rules! debug_assert_drained_on_none {
    ($shutdown:expr, $empty:expr) => {
        debug_assert!(
            $shutdown && $empty,
            "drained-terminal violated: pop returned None with shutdown={} empty={}",
            $shutdown,
            $empty
        )
    };
}

// =============================================================================
// Re-exports for crate-internal use
// =============================================================================

pub(crate) use debug_assert_bounded_len;
pub(crate) use debug_assert_drained_on_none;
pub(crate) use debug_assert_shutdown_monotonic;
