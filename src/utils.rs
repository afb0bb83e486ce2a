//! Assorted utilities and helpers.
//!
//! The quadratic baseline here is what the tests and the `scale_probe` binary
//! compare the stepper against.

use crate::longest::Longest;

/// Returns true if `chars` reads the same in both directions.
#[inline]
pub fn is_palindrome(chars: &[char]) -> bool {
    chars.iter().eq(chars.iter().rev())
}

/// Longest palindromic substring by expanding around every centre, O(n²).
///
/// Centres are tried left to right (gap before character `k`, then character
/// `k`) and only a strictly longer palindrome replaces the current best, so
/// ties resolve the same way as the linear pass.
pub fn naive_longest(s: &str) -> Longest {
    let chars: Vec<char> = s.chars().collect();
    let (mut best_start, mut best_len) = (0usize, 0usize);

    for k in 0..=chars.len() {
        for odd in [false, true] {
            if odd && k == chars.len() {
                continue;
            }
            let len = naive_radius(&chars, k, odd);
            if len > best_len {
                best_start = k - len / 2;
                best_len = len;
            }
        }
    }

    Longest {
        start: best_start,
        len: best_len,
        text: chars[best_start..best_start + best_len].iter().collect(),
    }
}

/// Length of the maximal palindrome centred on character `k` (odd) or on the
/// gap before character `k` (even), by direct expansion.
pub fn naive_radius(chars: &[char], k: usize, odd: bool) -> usize {
    let (mut lo, mut hi) = if odd { (k, k + 1) } else { (k, k) };
    while lo > 0 && hi < chars.len() && chars[lo - 1] == chars[hi] {
        lo -= 1;
        hi += 1;
    }
    hi - lo
}
