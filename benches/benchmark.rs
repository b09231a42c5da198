//! Benchmarks for the rotor machine.
//!
//! Measures machine setup (insertion + positioning), single-character
//! conversion, and message throughput scaling across rotor counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{Alphabet, Machine, Permutation, Rotor};

/// Message used consistently across throughput benchmarks.
const BENCH_MESSAGE: &str = "FROMHISSHOULDERHIBERNIADIDDESCENDTESTINGTESTINGONETWO";

fn upper() -> Alphabet {
    Alphabet::range('A', 'Z').unwrap()
}

fn perm(cycles: &str) -> Permutation {
    Permutation::new(cycles, upper()).unwrap()
}

fn catalog() -> Vec<Rotor> {
    vec![
        Rotor::reflector(
            "B",
            perm("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)"),
        )
        .unwrap(),
        Rotor::fixed("Beta", perm("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)")),
        Rotor::fixed("Gamma", perm("(AFNIRLBSQWVXGUZDKMTPCOYJHE)")),
        Rotor::fixed("Theta", perm("")),
        Rotor::moving("I", perm("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"), "Q")
            .unwrap(),
        Rotor::moving("II", perm("(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)"), "E")
            .unwrap(),
        Rotor::moving("III", perm("(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"), "V").unwrap(),
    ]
}

/// Benchmarks a full machine setup: rotor insertion from the catalog plus
/// positioning and plugboard installation.
fn bench_setup(c: &mut Criterion) {
    let mut machine = Machine::new(upper(), 5, 3, catalog()).unwrap();
    let plugboard = perm("(HQ) (EX) (IP) (TR) (BY)");

    c.bench_function("machine_setup", |b| {
        b.iter(|| {
            machine
                .insert_rotors(black_box(&["B", "Beta", "I", "II", "III"]))
                .unwrap();
            machine.set_rotors(black_box("AXLE")).unwrap();
            machine.set_plugboard(plugboard.clone());
        });
    });
}

/// Benchmarks single-character conversion: one stepping tick plus the
/// full signal path. State advances naturally between iterations,
/// matching streaming use.
fn bench_convert_char(c: &mut Criterion) {
    let mut machine = Machine::new(upper(), 5, 3, catalog()).unwrap();
    machine
        .insert_rotors(&["B", "Beta", "I", "II", "III"])
        .unwrap();
    machine.set_rotors("AXLE").unwrap();

    c.bench_function("convert_char", |b| {
        b.iter(|| machine.convert_index(black_box(0)).unwrap());
    });
}

/// Benchmarks message conversion throughput with 5, 6 and 7 rotor slots
/// (3 pawls throughout) to show the per-rotor cost of the signal path.
fn bench_convert_message_scaling(c: &mut Criterion) {
    let setups: &[(usize, &[&str], &str)] = &[
        (5, &["B", "Beta", "I", "II", "III"], "AXLE"),
        (6, &["B", "Beta", "Gamma", "I", "II", "III"], "AXLES"),
        (7, &["B", "Beta", "Gamma", "Theta", "I", "II", "III"], "AXLESS"),
    ];

    let mut group = c.benchmark_group("convert_message");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    for &(num_rotors, rotors, positions) in setups {
        let mut machine = Machine::new(upper(), num_rotors, 3, catalog()).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_rotors),
            &num_rotors,
            |b, _| {
                machine.insert_rotors(rotors).unwrap();
                machine.set_rotors(positions).unwrap();
                b.iter(|| machine.convert(black_box(BENCH_MESSAGE)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_setup,
    bench_convert_char,
    bench_convert_message_scaling,
);
criterion_main!(benches);
