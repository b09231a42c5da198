//! Enigma rotor cipher machine engine.
//!
//! Simulates an electromechanical rotor cipher machine: a stack of wired
//! rotors behind a reflector implements a reciprocal substitution cipher,
//! stepped one position per character by a pawl-and-notch odometer
//! mechanism, including its famous double-stepping anomaly.
//!
//! This crate is the cipher core only. Configuration-file parsing, message
//! stream I/O and output grouping belong to the caller; the core consumes
//! already-parsed alphabets, rotor descriptions and setup data.
//!
//! # Architecture
//!
//! ```text
//! Alphabet     (char <-> index mapping, the shared coordinate system)
//!     ^ defined over
//! Permutation  (disjoint cycles: rotor wirings, reflectors, plugboards)
//!     ^ wrapped by
//! Rotor        (wiring + rotational setting; Reflector/Fixed/Moving)
//!     ^ stacked in
//! Machine      (stepping rule + signal path + message conversion)
//! ```
//!
//! # Examples
//!
//! A 5-slot, 3-pawl machine with historical wheel wirings:
//!
//! ```
//! use enigma::{Alphabet, Machine, Permutation, Rotor};
//!
//! let alpha = Alphabet::range('A', 'Z').unwrap();
//! let perm = |cycles: &str| Permutation::new(cycles, alpha.clone()).unwrap();
//!
//! let catalog = vec![
//!     Rotor::reflector(
//!         "B",
//!         perm("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)"),
//!     )
//!     .unwrap(),
//!     Rotor::fixed("Beta", perm("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)")),
//!     Rotor::moving("I", perm("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"), "Q").unwrap(),
//!     Rotor::moving("II", perm("(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)"), "E")
//!         .unwrap(),
//!     Rotor::moving("III", perm("(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"), "V").unwrap(),
//! ];
//!
//! let mut machine = Machine::new(alpha, 5, 3, catalog).unwrap();
//! machine.insert_rotors(&["B", "Beta", "I", "II", "III"]).unwrap();
//! machine.set_rotors("AXLE").unwrap();
//!
//! let cipher = machine.convert("HELLO WORLD").unwrap();
//! assert_ne!(cipher, "HELLOWORLD");
//!
//! // A machine reset to the identical configuration decrypts its own output.
//! machine.insert_rotors(&["B", "Beta", "I", "II", "III"]).unwrap();
//! machine.set_rotors("AXLE").unwrap();
//! assert_eq!(machine.convert(&cipher).unwrap(), "HELLOWORLD");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod machine;
mod permutation;
mod rotor;

pub use alphabet::Alphabet;
pub use error::{EnigmaError, ErrorKind};
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};
