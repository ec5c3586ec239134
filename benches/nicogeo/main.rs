use criterion::{criterion_group, criterion_main};

mod coord;
mod synth;
mod vector;

criterion_group!(benches, coord::bench, synth::bench, vector::bench);
criterion_main!(benches);
