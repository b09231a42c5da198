//! Error types for the enigma library.

use thiserror::Error;

/// Broad category of an [`EnigmaError`].
///
/// Every error belongs to exactly one category; callers that only care
/// about the class of failure (bad machine description vs. bad setup line
/// vs. out-of-domain conversion) can branch on [`EnigmaError::kind`]
/// instead of matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed machine description: alphabet, cycle notation, rotor
    /// wiring, catalog, or machine geometry.
    Configuration,
    /// Invalid setup of an otherwise well-formed machine: rotor insertion,
    /// initial positions, or conversion before setup.
    Setup,
    /// Character/index conversion outside the alphabet's domain.
    Lookup,
}

/// Errors produced by the enigma library.
///
/// All of these abort the current configuration or setup at the point of
/// detection; none are retried. Message characters outside the alphabet are
/// *not* errors; `Machine::convert` passes them through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Character range constructed with `first > last`.
    #[error("alphabet range {first:?}-{last:?} is inverted")]
    InvertedRange {
        /// First character of the range.
        first: char,
        /// Last character of the range.
        last: char,
    },
    /// Alphabet with no characters.
    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,
    /// The same character listed twice in an explicit alphabet.
    #[error("duplicate character {0:?} in alphabet")]
    DuplicateAlphabetChar(char),
    /// Cycle notation that does not parse: unbalanced parentheses, an
    /// empty `()` group, or a non-whitespace character outside any group.
    #[error("malformed cycle notation: {0}")]
    MalformedCycles(String),
    /// Cycle character that is not a member of the alphabet.
    #[error("cycle character {0:?} is not in the alphabet")]
    CycleCharNotInAlphabet(char),
    /// Character appearing more than once across all cycles.
    #[error("character {0:?} appears more than once across cycles")]
    DuplicateCycleChar(char),
    /// Reflector wiring that moves some characters but not all, or
    /// contains a singleton cycle.
    #[error("reflector {0:?} wiring is not a derangement")]
    ReflectorNotDerangement(String),
    /// Moving rotor declared with an empty notch set.
    #[error("moving rotor {0:?} has no notches")]
    NoNotches(String),
    /// Notch character outside the rotor's alphabet.
    #[error("notch {notch:?} of rotor {name:?} is not in the alphabet")]
    NotchNotInAlphabet {
        /// Name of the offending rotor.
        name: String,
        /// The notch character.
        notch: char,
    },
    /// Two catalog rotors sharing a name (case-insensitive).
    #[error("duplicate rotor name {0:?} in catalog")]
    DuplicateRotorName(String),
    /// Slot/pawl counts that describe no buildable machine
    /// (`num_rotors < 2` or `pawls >= num_rotors`).
    #[error("invalid machine geometry: {num_rotors} slots, {pawls} pawls")]
    BadMachineGeometry {
        /// Declared rotor slot count.
        num_rotors: usize,
        /// Declared pawl count.
        pawls: usize,
    },
    /// Catalog rotor built over a different alphabet than the machine's.
    #[error("rotor {0:?} uses a different alphabet than the machine")]
    AlphabetMismatch(String),
    /// Insertion list length differs from the declared slot count.
    #[error("expected {expected} rotor names, got {got}")]
    WrongRotorCount {
        /// Declared slot count.
        expected: usize,
        /// Number of names supplied.
        got: usize,
    },
    /// Insertion list naming a rotor absent from the catalog.
    #[error("no rotor named {0:?}")]
    UnknownRotor(String),
    /// Insertion list naming the same rotor twice.
    #[error("rotor {0:?} inserted more than once")]
    DuplicateRotorInserted(String),
    /// Leftmost inserted rotor is not a reflector.
    #[error("first inserted rotor {0:?} is not a reflector")]
    FirstRotorNotReflector(String),
    /// Reflector inserted anywhere but slot 0.
    #[error("reflector {0:?} inserted outside slot 0")]
    MisplacedReflector(String),
    /// Number of moving rotors inserted differs from the pawl count.
    #[error("expected {expected} moving rotors, got {got}")]
    WrongMovingRotorCount {
        /// Configured pawl count.
        expected: usize,
        /// Moving rotors actually named.
        got: usize,
    },
    /// Initial-positions string of the wrong length.
    #[error("initial positions need {expected} characters, got {got}")]
    BadSettingLength {
        /// Required length (`num_rotors - 1`).
        expected: usize,
        /// Length supplied.
        got: usize,
    },
    /// Initial-positions character outside the alphabet.
    #[error("initial position {0:?} is not in the alphabet")]
    SettingNotInAlphabet(char),
    /// Attempt to set a reflector anywhere but position 0.
    #[error("a reflector only accepts position 0, got {0}")]
    ReflectorSetNonZero(usize),
    /// Conversion attempted before any rotors were inserted.
    #[error("no rotors inserted; call insert_rotors first")]
    NotSetUp,
    /// Character-to-index conversion of a non-member character.
    #[error("character {0:?} is not in the alphabet")]
    CharNotInAlphabet(char),
    /// Index-to-character conversion outside `[0, size)`.
    #[error("index {index} out of range for alphabet of size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Alphabet size.
        size: usize,
    },
}

impl EnigmaError {
    /// Returns the broad category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        use EnigmaError::*;
        match self {
            InvertedRange { .. }
            | EmptyAlphabet
            | DuplicateAlphabetChar(_)
            | MalformedCycles(_)
            | CycleCharNotInAlphabet(_)
            | DuplicateCycleChar(_)
            | ReflectorNotDerangement(_)
            | NoNotches(_)
            | NotchNotInAlphabet { .. }
            | DuplicateRotorName(_)
            | BadMachineGeometry { .. }
            | AlphabetMismatch(_) => ErrorKind::Configuration,
            WrongRotorCount { .. }
            | UnknownRotor(_)
            | DuplicateRotorInserted(_)
            | FirstRotorNotReflector(_)
            | MisplacedReflector(_)
            | WrongMovingRotorCount { .. }
            | BadSettingLength { .. }
            | SettingNotInAlphabet(_)
            | ReflectorSetNonZero(_)
            | NotSetUp => ErrorKind::Setup,
            CharNotInAlphabet(_) | IndexOutOfRange { .. } => ErrorKind::Lookup,
        }
    }
}
