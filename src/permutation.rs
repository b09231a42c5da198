//! Permutation: a permutation of alphabet indices in cycle notation.
//!
//! A permutation is described by a string of parenthesized groups, e.g.
//! `"(AELTPHQXRU) (BKNW) (CMOY)"`. The characters of one group, in order,
//! form one cycle: each maps to the next, the last wrapping back to the
//! first. Alphabet characters absent from every cycle are fixed points and
//! map to themselves. Rotor wirings, reflector wirings and plugboards are
//! all values of this type.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;

/// Permutation of the indices of an [`Alphabet`], stored as disjoint
/// cycles of characters.
///
/// Always invertible: `invert(permute(i)) == i` for every index, a
/// consequence of the construction-time duplicate check.
#[derive(Debug, Clone)]
pub struct Permutation {
    alphabet: Alphabet,
    cycles: Vec<Vec<char>>,
}

impl Permutation {
    /// Parses `cycles`, a string of parenthesized groups, into a
    /// permutation over `alphabet`. Whitespace between groups is ignored;
    /// an empty or all-whitespace string is the identity permutation.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedCycles`] for unbalanced or nested
    ///   parentheses, an empty `()` group, whitespace inside a group, or a
    ///   non-whitespace character outside any group.
    /// - [`EnigmaError::CycleCharNotInAlphabet`] if a cycle character is
    ///   not a member of `alphabet`.
    /// - [`EnigmaError::DuplicateCycleChar`] if a character appears twice
    ///   across all cycles.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Permutation};
    ///
    /// let alpha = Alphabet::range('A', 'D').unwrap();
    /// let perm = Permutation::new("(BACD)", alpha).unwrap();
    /// assert_eq!(perm.permute(0), 2); // A -> C
    /// assert_eq!(perm.invert(2), 0);  // C <- A
    /// ```
    pub fn new(cycles: &str, alphabet: Alphabet) -> Result<Self, EnigmaError> {
        let mut parsed: Vec<Vec<char>> = Vec::new();
        let mut current: Option<Vec<char>> = None;
        let mut seen: Vec<char> = Vec::new();

        for ch in cycles.chars() {
            match ch {
                '(' => {
                    if current.is_some() {
                        return Err(EnigmaError::MalformedCycles(
                            "nested '('".to_string(),
                        ));
                    }
                    current = Some(Vec::new());
                }
                ')' => match current.take() {
                    None => {
                        return Err(EnigmaError::MalformedCycles(
                            "unmatched ')'".to_string(),
                        ));
                    }
                    Some(group) if group.is_empty() => {
                        return Err(EnigmaError::MalformedCycles(
                            "empty group".to_string(),
                        ));
                    }
                    Some(group) => parsed.push(group),
                },
                c if c.is_whitespace() => {
                    if current.is_some() {
                        return Err(EnigmaError::MalformedCycles(
                            "whitespace inside a group".to_string(),
                        ));
                    }
                }
                c => match current.as_mut() {
                    None => {
                        return Err(EnigmaError::MalformedCycles(format!(
                            "character {c:?} outside any group"
                        )));
                    }
                    Some(group) => {
                        if !alphabet.contains(c) {
                            return Err(EnigmaError::CycleCharNotInAlphabet(c));
                        }
                        if seen.contains(&c) {
                            return Err(EnigmaError::DuplicateCycleChar(c));
                        }
                        seen.push(c);
                        group.push(c);
                    }
                },
            }
        }
        if current.is_some() {
            return Err(EnigmaError::MalformedCycles("unclosed '('".to_string()));
        }

        Ok(Permutation {
            alphabet,
            cycles: parsed,
        })
    }

    /// Returns the size of the alphabet this permutation acts on.
    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    /// Returns the alphabet this permutation was built over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Reduces any integer to `[0, size)` with floored modulo.
    ///
    /// Rotor stepping arithmetic subtracts offsets, so inputs can be
    /// negative; the result is never negative.
    pub fn wrap(&self, p: isize) -> usize {
        let size = self.size() as isize;
        let mut r = p % size;
        if r < 0 {
            r += size;
        }
        r as usize
    }

    /// Applies the permutation to `p` modulo the alphabet size.
    ///
    /// The wrapped index is mapped to its character; if some cycle
    /// contains that character it maps to the cycle's next character,
    /// otherwise it is a fixed point.
    pub fn permute(&self, p: isize) -> usize {
        let idx = self.wrap(p);
        let ch = self.alphabet.char_at(idx);
        for cycle in &self.cycles {
            if let Some(pos) = cycle.iter().position(|&c| c == ch) {
                let next = cycle[(pos + 1) % cycle.len()];
                return self
                    .alphabet
                    .index_of(next)
                    .expect("cycle chars are checked at construction");
            }
        }
        idx
    }

    /// Applies the inverse permutation to `c` modulo the alphabet size.
    ///
    /// Symmetric to [`permute`](Self::permute), following each cycle
    /// backwards.
    pub fn invert(&self, c: isize) -> usize {
        let idx = self.wrap(c);
        let ch = self.alphabet.char_at(idx);
        for cycle in &self.cycles {
            if let Some(pos) = cycle.iter().position(|&c| c == ch) {
                let prev = cycle[(pos + cycle.len() - 1) % cycle.len()];
                return self
                    .alphabet
                    .index_of(prev)
                    .expect("cycle chars are checked at construction");
            }
        }
        idx
    }

    /// Applies the permutation to a character of the alphabet.
    ///
    /// # Errors
    /// Returns [`EnigmaError::CharNotInAlphabet`] if `ch` is not a member.
    pub fn permute_char(&self, ch: char) -> Result<char, EnigmaError> {
        let idx = self.alphabet.to_int(ch)?;
        Ok(self.alphabet.char_at(self.permute(idx as isize)))
    }

    /// Applies the inverse permutation to a character of the alphabet.
    ///
    /// # Errors
    /// Returns [`EnigmaError::CharNotInAlphabet`] if `ch` is not a member.
    pub fn invert_char(&self, ch: char) -> Result<char, EnigmaError> {
        let idx = self.alphabet.to_int(ch)?;
        Ok(self.alphabet.char_at(self.invert(idx as isize)))
    }

    /// Returns true iff every alphabet character is moved: no cycle of
    /// length 1, and no character left out of the cycles entirely.
    pub fn derangement(&self) -> bool {
        let moved: usize = self.cycles.iter().map(|c| c.len()).sum();
        self.cycles.iter().all(|c| c.len() > 1) && moved == self.size()
    }
}
