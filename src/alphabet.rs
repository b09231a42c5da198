//! Alphabet: bidirectional mapping between characters and indices.
//!
//! Every other component converts through an [`Alphabet`]: permutations,
//! rotor settings and notches are all defined over one of these. An
//! alphabet is an ordered set of distinct characters mapped onto the
//! contiguous index range `0..size`, immutable after construction.

use crate::error::EnigmaError;

/// Ordered set of distinct characters mapped onto `0..size`.
///
/// Built either from a contiguous character range or from an explicit
/// character list; both normalize to the same ordered representation, so
/// the round-trip invariants `to_char(to_int(c)) == c` and
/// `to_int(to_char(i)) == i` hold identically for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from the contiguous range `first..=last`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvertedRange`] if `first > last`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// let alpha = Alphabet::range('A', 'Z').unwrap();
    /// assert_eq!(alpha.size(), 26);
    /// assert!(Alphabet::range('Z', 'A').is_err());
    /// ```
    pub fn range(first: char, last: char) -> Result<Self, EnigmaError> {
        if first > last {
            return Err(EnigmaError::InvertedRange { first, last });
        }
        Ok(Alphabet {
            chars: (first..=last).collect(),
        })
    }

    /// Creates an alphabet from an explicit character list, in order.
    ///
    /// # Errors
    /// Returns [`EnigmaError::EmptyAlphabet`] for an empty string and
    /// [`EnigmaError::DuplicateAlphabetChar`] if any character repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// let alpha = Alphabet::listed("AEIOU").unwrap();
    /// assert_eq!(alpha.to_int('I').unwrap(), 2);
    /// assert!(Alphabet::listed("ABBA").is_err());
    /// ```
    pub fn listed(chars: &str) -> Result<Self, EnigmaError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(EnigmaError::EmptyAlphabet);
        }
        for (i, &ch) in chars.iter().enumerate() {
            if chars[..i].contains(&ch) {
                return Err(EnigmaError::DuplicateAlphabetChar(ch));
            }
        }
        Ok(Alphabet { chars })
    }

    /// Returns the number of characters in the alphabet.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if `ch` is a member of the alphabet.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Returns the character at `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `index >= size()`.
    pub fn to_char(&self, index: usize) -> Result<char, EnigmaError> {
        self.chars
            .get(index)
            .copied()
            .ok_or(EnigmaError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Returns the index of `ch`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::CharNotInAlphabet`] if `ch` is not a member.
    pub fn to_int(&self, ch: char) -> Result<usize, EnigmaError> {
        self.chars
            .iter()
            .position(|&c| c == ch)
            .ok_or(EnigmaError::CharNotInAlphabet(ch))
    }

    /// Character at an index already known to be in range.
    pub(crate) fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// Index of a character already known to be a member, if any.
    pub(crate) fn index_of(&self, ch: char) -> Option<usize> {
        self.chars.iter().position(|&c| c == ch)
    }
}
