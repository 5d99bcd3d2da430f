#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use seamcarve::{calculate_energy, energy_to_vertical_seam, Color, PixelGrid, SeamCarver};

fn sample(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let v = (x * 31 + y * 17 + x * y * 7) % 251;
        Color::new(v as u8, (v * 3 % 256) as u8, (255 - v) as u8)
    })
    .unwrap()
}

fn energy_benchmark(c: &mut Criterion) {
    let grid = sample(200, 150);
    c.bench_function("energy 200x150", move |b| {
        b.iter(|| calculate_energy(black_box(&grid)))
    });
}

fn seam_benchmark(c: &mut Criterion) {
    let energy = calculate_energy(&sample(200, 150));
    c.bench_function("seam 200x150", move |b| {
        b.iter(|| energy_to_vertical_seam(black_box(&energy)))
    });
}

fn shrink_benchmark(c: &mut Criterion) {
    let grid = sample(80, 60);
    c.bench_function("shrink 80x60 to 60x50", move |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(grid.clone());
            carver.shrink_to(60, 50).unwrap();
            carver
        })
    });
}

criterion_group!(benches, energy_benchmark, seam_benchmark, shrink_benchmark);
criterion_main!(benches);
