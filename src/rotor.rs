//! Rotor: a wiring permutation plus a rotational setting.
//!
//! The three historical roles are a closed set of variants on one struct:
//! a [`Reflector`](RotorKind::Reflector) (leftmost, derangement wiring,
//! never moves), a [`Fixed`](RotorKind::Fixed) rotor (stationary during
//! operation), and a [`Moving`](RotorKind::Moving) rotor carrying notch
//! characters that trigger its left neighbor's turnover.
//!
//! A rotor's conversion conjugates its permutation by the current
//! rotational offset: the entering contact is shifted by the setting
//! before the wiring applies, and the result is shifted back, all modulo
//! the alphabet size.

use crate::error::EnigmaError;
use crate::permutation::Permutation;

/// Role-specific behavior of a [`Rotor`].
///
/// A closed set: the machine never needs rotor behaviors beyond these
/// three, so they are variants rather than an open trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Leftmost element; wiring must be a derangement; never advances.
    Reflector,
    /// Stationary during operation.
    Fixed,
    /// Advances under the pawl mechanism; turns its left neighbor over
    /// when sitting at one of its notch characters.
    Moving {
        /// Characters at which this rotor is "at notch".
        notches: Vec<char>,
    },
}

/// A named wiring permutation with a mutable rotational setting.
#[derive(Debug, Clone)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    setting: usize,
    kind: RotorKind,
}

impl Rotor {
    /// Creates a reflector. Its setting is pinned to 0.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ReflectorNotDerangement`] if the wiring
    /// leaves any character unmoved: a reflector mapping a contact to
    /// itself would make that contact encrypt to itself, which the
    /// mechanism cannot do.
    pub fn reflector(name: &str, permutation: Permutation) -> Result<Self, EnigmaError> {
        if !permutation.derangement() {
            return Err(EnigmaError::ReflectorNotDerangement(name.to_string()));
        }
        Ok(Rotor {
            name: name.to_string(),
            permutation,
            setting: 0,
            kind: RotorKind::Reflector,
        })
    }

    /// Creates a fixed (non-advancing) rotor.
    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        Rotor {
            name: name.to_string(),
            permutation,
            setting: 0,
            kind: RotorKind::Fixed,
        }
    }

    /// Creates a moving rotor with the given notch characters.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NoNotches`] for an empty notch string and
    /// [`EnigmaError::NotchNotInAlphabet`] if any notch character is not
    /// in the rotor's alphabet.
    pub fn moving(
        name: &str,
        permutation: Permutation,
        notches: &str,
    ) -> Result<Self, EnigmaError> {
        let notches: Vec<char> = notches.chars().collect();
        if notches.is_empty() {
            return Err(EnigmaError::NoNotches(name.to_string()));
        }
        for &notch in &notches {
            if !permutation.alphabet().contains(notch) {
                return Err(EnigmaError::NotchNotInAlphabet {
                    name: name.to_string(),
                    notch,
                });
            }
        }
        Ok(Rotor {
            name: name.to_string(),
            permutation,
            setting: 0,
            kind: RotorKind::Moving { notches },
        })
    }

    /// Returns the rotor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison, used for catalog lookup.
    pub fn named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the rotor's wiring permutation.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Returns the current rotational setting as an index.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Returns true only for reflectors.
    pub fn reflecting(&self) -> bool {
        self.kind == RotorKind::Reflector
    }

    /// Returns true only for moving rotors.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Returns true iff this is a moving rotor whose current setting sits
    /// at one of its notch characters. Always false for reflectors and
    /// fixed rotors.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => {
                let ch = self.permutation.alphabet().char_at(self.setting);
                notches.contains(&ch)
            }
            _ => false,
        }
    }

    /// Sets the rotational position to `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `index` is outside
    /// `[0, size)`, and [`EnigmaError::ReflectorSetNonZero`] when moving a
    /// reflector anywhere but position 0.
    pub fn set(&mut self, index: usize) -> Result<(), EnigmaError> {
        if index >= self.permutation.size() {
            return Err(EnigmaError::IndexOutOfRange {
                index,
                size: self.permutation.size(),
            });
        }
        if self.reflecting() && index != 0 {
            return Err(EnigmaError::ReflectorSetNonZero(index));
        }
        self.setting = index;
        Ok(())
    }

    /// Sets the rotational position from an alphabet character.
    ///
    /// # Errors
    /// Returns [`EnigmaError::CharNotInAlphabet`] if `ch` is not a member,
    /// plus the same reflector restriction as [`set`](Self::set).
    pub fn set_char(&mut self, ch: char) -> Result<(), EnigmaError> {
        let index = self.permutation.alphabet().to_int(ch)?;
        self.set(index)
    }

    /// Advances the setting by one position, wrapping at the alphabet
    /// size. No-op for reflectors and fixed rotors.
    pub fn advance(&mut self) {
        if self.rotates() {
            self.setting = self.permutation.wrap(self.setting as isize + 1);
        }
    }

    /// Converts an entering contact index in the forward (right-to-left)
    /// direction, accounting for the rotational offset:
    /// `wrap(permute(wrap(p + setting)) - setting)`.
    pub fn convert_forward(&self, p: usize) -> usize {
        let s = self.setting as isize;
        let out = self.permutation.permute(p as isize + s);
        self.permutation.wrap(out as isize - s)
    }

    /// Converts an entering contact index in the backward (left-to-right)
    /// direction: `wrap(invert(wrap(c + setting)) - setting)`.
    pub fn convert_backward(&self, c: usize) -> usize {
        let s = self.setting as isize;
        let out = self.permutation.invert(c as isize + s);
        self.permutation.wrap(out as isize - s)
    }
}
