//! Stack growth for deep recursion.
//!
//! The parser recurses once per nested expression and the evaluator once per
//! nested evaluation and interpreted function call. Both wrap their recursive
//! entry points in [`ensure_sufficient_stack`], so deeply nested source and
//! deep (finite) interpreted recursion do not overflow the native stack.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nest(depth: u64) -> u64 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn test_deep_recursion() {
        assert_eq!(nest(100_000), 100_000);
    }

    #[test]
    fn test_works_with_result_type() {
        let result: Result<u32, String> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }
}
