//! Machine: rotor stack, stepping mechanism, and signal path.
//!
//! A [`Machine`] owns a catalog of rotor blueprints, an active stack of
//! rotors (slot 0 is the reflector, higher slots sit further right), and
//! an optional plugboard permutation. Converting one character advances
//! the stack per the pawl mechanism first, then traces the electrical
//! path: plugboard, forward through every rotor right-to-left, off the
//! reflector, backward through slots 1.. left-to-right, plugboard again.
//!
//! # Stepping
//!
//! The moving region is the rightmost `pawls` slots. The rightmost rotor
//! advances on every character. Any other rotor in the region advances
//! when its right neighbor sits at a notch, or when it sits at its own
//! notch while its left neighbor is capable of rotating. All decisions
//! are taken against the pre-advance state and applied afterwards, which
//! reproduces the cam-driven double-stepping anomaly: a middle rotor that
//! steps because of its right neighbor's notch can, on the same tick, be
//! at its own notch and drag its left neighbor along.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// A complete rotor cipher machine.
///
/// # Examples
///
/// Encrypt, then decrypt with an identically reset machine, the classic
/// self-reciprocal property:
///
/// ```
/// use enigma::{Alphabet, Machine, Permutation, Rotor};
///
/// let alpha = Alphabet::range('A', 'D').unwrap();
/// let catalog = vec![
///     Rotor::reflector("R", Permutation::new("(AB) (CD)", alpha.clone()).unwrap()).unwrap(),
///     Rotor::moving("I", Permutation::new("(ABCD)", alpha.clone()).unwrap(), "B").unwrap(),
///     Rotor::moving("II", Permutation::new("(BACD)", alpha.clone()).unwrap(), "C").unwrap(),
/// ];
/// let mut machine = Machine::new(alpha, 3, 2, catalog).unwrap();
///
/// machine.insert_rotors(&["R", "I", "II"]).unwrap();
/// machine.set_rotors("AA").unwrap();
/// let cipher = machine.convert("DAB CAB").unwrap();
///
/// machine.insert_rotors(&["R", "I", "II"]).unwrap();
/// machine.set_rotors("AA").unwrap();
/// assert_eq!(machine.convert(&cipher).unwrap(), "DABCAB");
/// ```
#[derive(Debug)]
pub struct Machine {
    alphabet: Alphabet,
    num_rotors: usize,
    pawls: usize,
    catalog: Vec<Rotor>,
    stack: Vec<Rotor>,
    plugboard: Option<Permutation>,
}

impl Machine {
    /// Creates a machine with `num_rotors` slots, `pawls` of which drive
    /// moving rotors, drawing rotors by name from `catalog`.
    ///
    /// The catalog is a set of immutable blueprints;
    /// [`insert_rotors`](Self::insert_rotors) copies from it, so one
    /// machine can be set up any number of times and every setup starts
    /// from setting 0.
    ///
    /// # Errors
    /// - [`EnigmaError::BadMachineGeometry`] unless `num_rotors > 1` and
    ///   `pawls < num_rotors`.
    /// - [`EnigmaError::DuplicateRotorName`] if two catalog rotors share a
    ///   name (case-insensitive).
    /// - [`EnigmaError::AlphabetMismatch`] if a catalog rotor was wired
    ///   over a different alphabet.
    pub fn new(
        alphabet: Alphabet,
        num_rotors: usize,
        pawls: usize,
        catalog: Vec<Rotor>,
    ) -> Result<Self, EnigmaError> {
        if num_rotors < 2 || pawls >= num_rotors {
            return Err(EnigmaError::BadMachineGeometry { num_rotors, pawls });
        }
        for (i, rotor) in catalog.iter().enumerate() {
            if catalog[..i].iter().any(|r| r.named(rotor.name())) {
                return Err(EnigmaError::DuplicateRotorName(rotor.name().to_string()));
            }
            if rotor.permutation().alphabet() != &alphabet {
                return Err(EnigmaError::AlphabetMismatch(rotor.name().to_string()));
            }
        }
        Ok(Machine {
            alphabet,
            num_rotors,
            pawls,
            catalog,
            stack: Vec::new(),
            plugboard: None,
        })
    }

    /// Returns the number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls, i.e. the number of rotors capable of
    /// advancing.
    pub fn num_pawls(&self) -> usize {
        self.pawls
    }

    /// Returns the machine's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Replaces the active stack with fresh copies of the named catalog
    /// rotors, `names[0]` being the reflector. All rotors start at
    /// setting 0.
    ///
    /// Replace-or-fail: every check runs against a candidate stack before
    /// any machine state changes, so a failed insertion leaves the
    /// previous stack (and plugboard) untouched and usable.
    ///
    /// # Errors
    /// - [`EnigmaError::WrongRotorCount`] if `names.len() != num_rotors()`.
    /// - [`EnigmaError::UnknownRotor`] for a name missing from the catalog.
    /// - [`EnigmaError::DuplicateRotorInserted`] for a repeated name.
    /// - [`EnigmaError::FirstRotorNotReflector`] if slot 0 would not hold
    ///   a reflector.
    /// - [`EnigmaError::MisplacedReflector`] if a reflector lands in any
    ///   other slot.
    /// - [`EnigmaError::WrongMovingRotorCount`] if the number of moving
    ///   rotors differs from the pawl count.
    pub fn insert_rotors(&mut self, names: &[&str]) -> Result<(), EnigmaError> {
        if names.len() != self.num_rotors {
            return Err(EnigmaError::WrongRotorCount {
                expected: self.num_rotors,
                got: names.len(),
            });
        }
        let mut candidate: Vec<Rotor> = Vec::with_capacity(names.len());
        for (i, &name) in names.iter().enumerate() {
            if names[..i].iter().any(|prev| prev.eq_ignore_ascii_case(name)) {
                return Err(EnigmaError::DuplicateRotorInserted(name.to_string()));
            }
            let rotor = self
                .catalog
                .iter()
                .find(|r| r.named(name))
                .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
            candidate.push(rotor.clone());
        }
        if !candidate[0].reflecting() {
            return Err(EnigmaError::FirstRotorNotReflector(
                candidate[0].name().to_string(),
            ));
        }
        if let Some(stray) = candidate[1..].iter().find(|r| r.reflecting()) {
            return Err(EnigmaError::MisplacedReflector(stray.name().to_string()));
        }
        let moving = candidate.iter().filter(|r| r.rotates()).count();
        if moving != self.pawls {
            return Err(EnigmaError::WrongMovingRotorCount {
                expected: self.pawls,
                got: moving,
            });
        }
        self.stack = candidate;
        Ok(())
    }

    /// Sets the rotational positions of slots 1.. from `setting`, one
    /// alphabet character per non-reflector slot, leftmost first.
    ///
    /// # Errors
    /// - [`EnigmaError::NotSetUp`] before any insertion.
    /// - [`EnigmaError::BadSettingLength`] unless the string has exactly
    ///   `num_rotors() - 1` characters.
    /// - [`EnigmaError::SettingNotInAlphabet`] for a character outside the
    ///   alphabet.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), EnigmaError> {
        if self.stack.is_empty() {
            return Err(EnigmaError::NotSetUp);
        }
        let chars: Vec<char> = setting.chars().collect();
        if chars.len() != self.num_rotors - 1 {
            return Err(EnigmaError::BadSettingLength {
                expected: self.num_rotors - 1,
                got: chars.len(),
            });
        }
        for &ch in &chars {
            if !self.alphabet.contains(ch) {
                return Err(EnigmaError::SettingNotInAlphabet(ch));
            }
        }
        for (slot, &ch) in chars.iter().enumerate() {
            self.stack[slot + 1].set_char(ch)?;
        }
        Ok(())
    }

    /// Installs a plugboard, applied before the first rotor and after the
    /// last on every character.
    pub fn set_plugboard(&mut self, plugboard: Permutation) {
        self.plugboard = Some(plugboard);
    }

    /// Removes the plugboard.
    pub fn clear_plugboard(&mut self) {
        self.plugboard = None;
    }

    /// Returns the current positions of slots 1.. as alphabet characters,
    /// leftmost first, the same shape [`set_rotors`](Self::set_rotors)
    /// consumes. Empty before the first insertion.
    pub fn settings(&self) -> String {
        self.stack
            .iter()
            .skip(1)
            .map(|r| self.alphabet.char_at(r.setting()))
            .collect()
    }

    /// Advances the stack by one tick of the pawl mechanism.
    ///
    /// Two phases: the decision pass reads `at_notch`/`rotates` for the
    /// whole moving region against pre-advance state, then the advances
    /// are applied. A decision never observes a same-tick advance.
    fn advance_rotors(&mut self) {
        let n = self.num_rotors;
        let first_moving = n - self.pawls;
        let mut advances = vec![false; n];
        for i in first_moving..n.saturating_sub(1) {
            let own_turnover = self.stack[i].at_notch() && self.stack[i - 1].rotates();
            let carried = self.stack[i + 1].at_notch();
            advances[i] = own_turnover || carried;
        }
        advances[n - 1] = true;
        for (rotor, advance) in self.stack.iter_mut().zip(advances) {
            if advance {
                rotor.advance();
            }
        }
    }

    /// Converts one alphabet index, advancing the machine first.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotSetUp`] before any insertion and
    /// [`EnigmaError::IndexOutOfRange`] if `c` is outside the alphabet.
    pub fn convert_index(&mut self, c: usize) -> Result<usize, EnigmaError> {
        if self.stack.is_empty() {
            return Err(EnigmaError::NotSetUp);
        }
        if c >= self.alphabet.size() {
            return Err(EnigmaError::IndexOutOfRange {
                index: c,
                size: self.alphabet.size(),
            });
        }
        self.advance_rotors();

        let mut signal = c;
        if let Some(plugboard) = &self.plugboard {
            signal = plugboard.permute(signal as isize);
        }
        for rotor in self.stack.iter().rev() {
            signal = rotor.convert_forward(signal);
        }
        // The reflector was entered forward at the end of the pass above;
        // the return path re-enters the stack at slot 1.
        for rotor in self.stack.iter().skip(1) {
            signal = rotor.convert_backward(signal);
        }
        if let Some(plugboard) = &self.plugboard {
            signal = plugboard.permute(signal as isize);
        }
        Ok(signal)
    }

    /// Converts a message, updating rotor state as it goes.
    ///
    /// Whitespace is stripped. Characters outside the alphabet pass
    /// through unchanged and do not advance the machine; everything else
    /// is converted. Case-sensitive against the alphabet; uppercasing is
    /// the caller's responsibility.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotSetUp`] before any insertion.
    pub fn convert(&mut self, msg: &str) -> Result<String, EnigmaError> {
        let mut output = String::with_capacity(msg.len());
        for ch in msg.chars() {
            if ch.is_whitespace() {
                continue;
            }
            match self.alphabet.to_int(ch) {
                Err(_) => output.push(ch),
                Ok(index) => {
                    let converted = self.convert_index(index)?;
                    output.push(self.alphabet.char_at(converted));
                }
            }
        }
        Ok(output)
    }
}
