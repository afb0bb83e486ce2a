//! Working-sequence construction.
//!
//! The input `S` is interleaved with a delimiter and bounded by two guards:
//!
//! ```text
//! index:   0    1   2   3   4   5    6
//! symbol:  ^    #   a   #   b   #    $
//! ```
//!
//! Character `k` of `S` lands on index `2k + 2`, every delimiter on an odd
//! index, and the guards on `0` and `n - 1`. Because the guards differ from
//! each other and from everything else, the expansion loop in the stepper
//! always stops before running off either end.

use std::fmt;
use std::ops::{Range, RangeInclusive};

use crate::error::ManacherError;

/// Characters used for the two guards and the delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sentinels {
    /// Guard at index 0.
    pub start: char,
    /// Guard at index `n - 1`.
    pub end: char,
    /// Symbol inserted between (and around) the input characters.
    pub delimiter: char,
}

impl Sentinels {
    /// Unicode noncharacters; they never appear in interchanged text.
    pub const RESERVED: Self = Self {
        start: '\u{FDD0}',
        end: '\u{FDD1}',
        delimiter: '\u{FDD2}',
    };

    /// The textbook `^ … $` guards with `#` delimiters.
    ///
    /// Handy for printing, but inputs containing `^`, `$` or `#` are rejected.
    pub const fn ascii() -> Self {
        Self {
            start: '^',
            end: '$',
            delimiter: '#',
        }
    }

    /// Check that the three roles use three distinct characters.
    pub fn validate(&self) -> Result<(), ManacherError> {
        let reason = if self.start == self.end {
            "start and end guards are equal"
        } else if self.start == self.delimiter {
            "start guard equals the delimiter"
        } else if self.end == self.delimiter {
            "end guard equals the delimiter"
        } else {
            return Ok(());
        };
        Err(ManacherError::InvalidSentinels { reason })
    }

    /// Returns true if `ch` plays any sentinel role.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        ch == self.start || ch == self.end || ch == self.delimiter
    }
}

impl Default for Sentinels {
    fn default() -> Self {
        Self::RESERVED
    }
}

/// What an interior index of the working sequence stands for in `S`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Center {
    /// Odd-length palindromes centred on character `k`.
    Char(usize),
    /// Even-length palindromes centred on the gap before character `k`
    /// (`k == |S|` is the gap after the last character).
    Gap(usize),
}

/// Delimiter-interleaved, guard-bounded copy of an input string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkingSequence {
    source: Vec<char>,
    symbols: Vec<char>,
    sentinels: Sentinels,
}

/// Build the working sequence for `s` with the default reserved sentinels.
///
/// ```
/// use manacher_step::transform::transform;
///
/// let seq = transform("ab").unwrap();
/// assert_eq!(seq.len(), 7);
/// assert_eq!(seq.symbols()[2], 'a');
/// assert_eq!(seq.symbols()[4], 'b');
/// ```
pub fn transform(s: &str) -> Result<WorkingSequence, ManacherError> {
    transform_with(s, Sentinels::default())
}

/// Build the working sequence for `s` using explicit sentinels.
pub fn transform_with(s: &str, sentinels: Sentinels) -> Result<WorkingSequence, ManacherError> {
    sentinels.validate()?;

    let source: Vec<char> = s.chars().collect();
    if let Some((position, &ch)) = source
        .iter()
        .enumerate()
        .find(|&(_, &ch)| sentinels.contains(ch))
    {
        return Err(ManacherError::ReservedCharacter { ch, position });
    }

    let mut symbols = Vec::with_capacity(2 * source.len() + 3);
    symbols.push(sentinels.start);
    symbols.push(sentinels.delimiter);
    for &ch in &source {
        symbols.push(ch);
        symbols.push(sentinels.delimiter);
    }
    symbols.push(sentinels.end);

    Ok(WorkingSequence {
        source,
        symbols,
        sentinels,
    })
}

#[allow(clippy::len_without_is_empty)]
impl WorkingSequence {
    /// Length `n` of the working sequence; always `2·|S| + 3`.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// The interleaved symbols `T`.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The input characters `S`.
    #[inline]
    pub fn source(&self) -> &[char] {
        &self.source
    }

    pub fn sentinels(&self) -> Sentinels {
        self.sentinels
    }

    /// Indices visited by a pass: `1..=n-2`.
    #[inline]
    pub fn interior(&self) -> RangeInclusive<usize> {
        1..=self.last_interior()
    }

    /// The last index visited by a pass (`n - 2`).
    #[inline]
    pub fn last_interior(&self) -> usize {
        self.symbols.len() - 2
    }

    /// Map a working-sequence index to the character or gap it represents.
    ///
    /// Returns `None` for the guards and for indices past the end.
    pub fn center_at(&self, index: usize) -> Option<Center> {
        if index == 0 || index > self.last_interior() {
            None
        } else if index % 2 == 1 {
            Some(Center::Gap((index - 1) / 2))
        } else {
            Some(Center::Char((index - 2) / 2))
        }
    }

    /// Inverse of [`center_at`](Self::center_at).
    pub fn index_of(&self, center: Center) -> Option<usize> {
        match center {
            Center::Char(k) if k < self.source.len() => Some(2 * k + 2),
            Center::Gap(k) if k <= self.source.len() => Some(2 * k + 1),
            _ => None,
        }
    }

    /// Character range of `S` covered by a palindrome of `radius` at `index`.
    ///
    /// `None` when no palindrome of that radius can sit at `index`: the reach
    /// crosses a guard, or the parity does not match the position (odd radii
    /// belong to characters, even radii to delimiters).
    pub fn span(&self, index: usize, radius: usize) -> Option<Range<usize>> {
        if index > self.last_interior() {
            return None;
        }
        if radius > 0
            && (radius >= index
                || index + radius > self.last_interior()
                || (index + radius) % 2 == 0)
        {
            return None;
        }
        let start = (index - radius) / 2;
        Some(start..start + radius)
    }
}

impl fmt::Display for WorkingSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.symbols {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
