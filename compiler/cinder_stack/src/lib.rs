//! Stack safety for the recursive evaluator.
//!
//! Evaluation recurses once per nested `Application`, `Let` or `Lambda` body
//! in the source program, and decoding recurses once per nested JSON value.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] grows the
//! native stack on demand instead of overflowing it.
//!
//! - **Native targets**: uses `stacker` to grow the stack.
//! - **WASM targets**: passthrough.

/// Minimum stack space to keep available (100KB red zone).
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone, a new 1MB segment is
/// allocated before calling `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
