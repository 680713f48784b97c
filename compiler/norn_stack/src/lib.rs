//! Stack safety for deeply nested list expressions.
//!
//! The parser, the dependency analyzer, the cycle resolver and the evaluator
//! all recurse once per tree level. Long `a, b, c, ...` chains and
//! generated inputs nest thousands of levels deep, so every recursive entry
//! point goes through [`ensure_sufficient_stack`].
//!
//! - **Native targets**: grows the stack on demand with `stacker`.
//! - **WASM targets**: calls the closure directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
