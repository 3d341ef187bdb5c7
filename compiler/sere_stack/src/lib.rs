//! Stack growth for deep recursion.
//!
//! Source like `((((((x))))))` or a thousand-level nested list pattern makes
//! the recursive-descent parser and the canonical printer recurse once per
//! level. Wrapping those recursion points in [`ensure_sufficient_stack`]
//! grows the stack on demand instead of overflowing.
//!
//! On `wasm32` the wrapper is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red
/// zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Depth of `(`-nesting, computed the way a recursive parser would.
    fn nesting_depth(bytes: &[u8]) -> usize {
        ensure_sufficient_stack(|| match bytes.split_first() {
            Some((b'(', rest)) => 1 + nesting_depth(rest),
            _ => 0,
        })
    }

    #[test]
    fn test_shallow_nesting() {
        assert_eq!(nesting_depth(b"((x))"), 2);
    }

    #[test]
    fn test_deep_nesting() {
        let source = "(".repeat(200_000);
        assert_eq!(nesting_depth(source.as_bytes()), 200_000);
    }

    #[test]
    fn test_passes_results_through() {
        let result: Result<u8, String> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }
}
