//! Regression tests for the pawl stepping mechanism.
//!
//! All expected traces are frozen: they were computed by hand from the
//! stepping rule (rightmost rotor always advances; any other rotor in the
//! moving region advances when its right neighbor sits at a notch, or when
//! it sits at its own notch with a rotatable left neighbor; decisions read
//! pre-advance state). Any change in a trace means the mechanism broke.

use enigma::{Alphabet, Machine, Permutation, Rotor};

fn upper() -> Alphabet {
    Alphabet::range('A', 'Z').unwrap()
}

fn perm(cycles: &str) -> Permutation {
    Permutation::new(cycles, upper()).unwrap()
}

/// Historical M4 wheel set: reflector B, fixed Beta, wheels I-III with
/// their historical turnover notches (Q, E, V).
fn m4_machine() -> Machine {
    let catalog = vec![
        Rotor::reflector(
            "B",
            perm("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)"),
        )
        .unwrap(),
        Rotor::fixed("Beta", perm("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)")),
        Rotor::moving("I", perm("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"), "Q")
            .unwrap(),
        Rotor::moving("II", perm("(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)"), "E")
            .unwrap(),
        Rotor::moving("III", perm("(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"), "V").unwrap(),
    ];
    Machine::new(upper(), 5, 3, catalog).unwrap()
}

fn set_up(machine: &mut Machine, positions: &str) {
    machine
        .insert_rotors(&["B", "Beta", "I", "II", "III"])
        .unwrap();
    machine.set_rotors(positions).unwrap();
}

/// Settings trace over `ticks` characters (the converted text is
/// irrelevant to stepping; 'A' is fed every tick).
fn trace(machine: &mut Machine, ticks: usize) -> Vec<String> {
    (0..ticks)
        .map(|_| {
            machine.convert("A").unwrap();
            machine.settings()
        })
        .collect()
}

/// Reference model WITHOUT the double-stepping anomaly: carry-only
/// odometer over the same notch data. A rotor advances only when its
/// right neighbor sits at a notch (pre-advance state); the rightmost
/// always advances.
fn carry_only_trace(start: &str, notches: &[&str], ticks: usize) -> Vec<String> {
    let mut positions: Vec<u8> = start.bytes().map(|b| b - b'A').collect();
    let mut out = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        let at_notch: Vec<bool> = positions
            .iter()
            .zip(notches)
            .map(|(&p, n)| n.bytes().any(|b| b - b'A' == p))
            .collect();
        let last = positions.len() - 1;
        for i in 0..last {
            if at_notch[i + 1] {
                positions[i] = (positions[i] + 1) % 26;
            }
        }
        positions[last] = (positions[last] + 1) % 26;
        out.push(positions.iter().map(|&p| (p + b'A') as char).collect());
    }
    out
}

#[test]
fn rightmost_advances_every_character() {
    let mut machine = m4_machine();
    set_up(&mut machine, "AAAA");
    assert_eq!(
        trace(&mut machine, 4),
        ["AAAB", "AAAC", "AAAD", "AAAE"]
    );
}

#[test]
fn carry_at_rightmost_notch() {
    let mut machine = m4_machine();
    // Wheel III turns over at V: the next character carries into wheel II.
    set_up(&mut machine, "AAAV");
    assert_eq!(trace(&mut machine, 2), ["AABW", "AABX"]);
}

/// The classic anomaly tick: wheel II sits at its notch (E) while wheel
/// III reaches its notch (V) on the same character. Both wheel II (own
/// notch, rotatable left neighbor) and wheel I (carried by II's notch)
/// advance in that single tick.
#[test]
fn double_step_single_tick() {
    let mut machine = m4_machine();
    set_up(&mut machine, "AAEV");
    machine.convert("A").unwrap();
    assert_eq!(machine.settings(), "ABFW");
}

/// Multi-character double-step sequence: ADU -> ADV -> AEW -> BFX -> BFY.
/// The third tick is the anomaly: wheel II advances twice in a row.
#[test]
fn double_step_sequence() {
    let mut machine = m4_machine();
    set_up(&mut machine, "AADU");
    assert_eq!(
        trace(&mut machine, 4),
        ["AADV", "AAEW", "ABFX", "ABFY"]
    );
}

/// A carry-only odometer lacking the anomaly diverges from the machine at
/// the double-step tick.
#[test]
fn diverges_from_carry_only_stepping() {
    let mut machine = m4_machine();
    set_up(&mut machine, "AADU");
    let anomalous = trace(&mut machine, 4);
    // Same wheels, same notches, leftmost (Beta) has none and never moves.
    let carry_only = carry_only_trace("AADU", &["", "Q", "E", "V"], 4);

    assert_eq!(&anomalous[..2], &carry_only[..2]);
    assert_eq!(carry_only[2], "ABEX");
    assert_ne!(anomalous[2], carry_only[2]);
}

/// The fixed rotor left of the moving region never advances, even when
/// the leftmost moving rotor sits at its notch.
#[test]
fn fixed_rotor_never_advances() {
    let mut machine = m4_machine();
    // Wheel I at its notch Q, wheels II and III at notches too.
    set_up(&mut machine, "AQEV");
    machine.convert("A").unwrap();
    let settings = machine.settings();
    assert_eq!(&settings[..1], "A", "Beta must stay put");
    assert_eq!(settings, "ARFW");
}

/// Stepping state is part of the cipher: the same letter fed repeatedly
/// does not produce a constant ciphertext letter.
#[test]
fn repeated_input_varies() {
    let mut machine = m4_machine();
    set_up(&mut machine, "AAAA");
    let out = machine.convert("AAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap();
    let first = out.chars().next().unwrap();
    assert!(out.chars().any(|c| c != first));
}
