//! Longest-palindrome extraction from a finished radius array.

use crate::snapshot::PassStats;
use crate::transform::{Center, WorkingSequence};

/// Longest palindromic substring, in character offsets of the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Longest {
    /// Character offset of the first character.
    pub start: usize,
    /// Length in characters.
    pub len: usize,
    pub text: String,
}

impl Longest {
    /// Returns true for the empty palindrome (empty input only).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Result of a finished pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Final radius array, one entry per working-sequence index.
    pub radii: Vec<usize>,
    pub longest: Longest,
    pub stats: PassStats,
    pub(crate) sequence: WorkingSequence,
}

impl Completion {
    /// Working sequence the pass ran over.
    pub fn sequence(&self) -> &WorkingSequence {
        &self.sequence
    }

    /// Maximal palindrome centred at `center`, or `None` if the centre is
    /// outside the input.
    pub fn palindrome_at(&self, center: Center) -> Option<String> {
        let index = self.sequence.index_of(center)?;
        let range = self.sequence.span(index, *self.radii.get(index)?)?;
        Some(self.sequence.source()[range].iter().collect())
    }
}

/// Pick the first maximal radius and map it back to the input.
///
/// Ties resolve to the lowest index, so the leftmost of several equally long
/// palindromes wins. Returns `None` if `radii` does not fit `sequence`.
pub fn extract_longest(sequence: &WorkingSequence, radii: &[usize]) -> Option<Longest> {
    if radii.len() != sequence.len() {
        return None;
    }
    let (center, max_len) = radii
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0), |best, (i, r)| if r > best.1 { (i, r) } else { best });

    let range = sequence.span(center, max_len)?;
    Some(Longest {
        start: range.start,
        len: max_len,
        text: sequence.source()[range].iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::transform;

    #[test]
    fn empty_radii_give_empty_palindrome() {
        let seq = transform("").unwrap();
        let longest = extract_longest(&seq, &[0, 0, 0]).unwrap();
        assert!(longest.is_empty());
        assert_eq!(longest.start, 0);
        assert_eq!(longest.text, "");
    }

    #[test]
    fn ties_pick_lowest_index() {
        // "ab": both characters are length-1 palindromes, 'a' comes first.
        let seq = transform("ab").unwrap();
        let longest = extract_longest(&seq, &[0, 0, 1, 0, 1, 0, 0]).unwrap();
        assert_eq!(longest.start, 0);
        assert_eq!(longest.text, "a");
    }

    #[test]
    fn maps_gap_centre_back_to_text() {
        // "xabba": gap between the two b's is index 7, radius 4.
        let seq = transform("xabba").unwrap();
        let mut radii = vec![0; seq.len()];
        radii[7] = 4;
        let longest = extract_longest(&seq, &radii).unwrap();
        assert_eq!(longest.start, 1);
        assert_eq!(longest.len, 4);
        assert_eq!(longest.text, "abba");
    }

    #[test]
    fn rejects_radii_that_do_not_fit() {
        let seq = transform("ab").unwrap();
        assert_eq!(extract_longest(&seq, &[0, 0, 0]), None);
        // Radius 5 at index 1 would reach past the start guard.
        assert_eq!(extract_longest(&seq, &[0, 5, 0, 0, 0, 0, 0]), None);
    }
}
