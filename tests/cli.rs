use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_sample(dir: &Path, width: u32, height: u32) -> String {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 29 + y * 13 + x * y) % 256) as u8;
        Rgb([v, v.wrapping_mul(3), 255 - v])
    });
    let path = dir.join("sample.png");
    img.save(&path).unwrap();
    path.to_str().unwrap().to_string()
}

fn seamcarve() -> Command {
    Command::cargo_bin("seamcarve").unwrap()
}

#[test]
fn reduce_removes_the_requested_amounts() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 12, 9);
    let output = dir.path().join("out.png");

    seamcarve()
        .args(&["-in", input.as_str(), "-out", output.to_str().unwrap()])
        .args(&["-width", "5", "-height", "2", "-operation", "reduce"])
        .assert()
        .success();

    let result = image::open(&output).unwrap();
    assert_eq!((result.width(), result.height()), (7, 7));
}

#[test]
fn energy_keeps_the_size_and_is_gray() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 8, 6);
    let output = dir.path().join("energy.png");

    seamcarve()
        .args(&["--in", input.as_str(), "--out", output.to_str().unwrap()])
        .args(&["--operation", "energy"])
        .assert()
        .success();

    let result = image::open(&output).unwrap().to_rgb8();
    assert_eq!(result.dimensions(), (8, 6));
    assert!(result.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    assert!(result.pixels().any(|p| p[0] == 255));
}

#[test]
fn seam_paints_one_red_pixel_per_row() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 8, 6);
    let output = dir.path().join("seam.png");

    seamcarve()
        .args(&["-in", input.as_str(), "-out", output.to_str().unwrap()])
        .args(&["-operation", "seam"])
        .assert()
        .success();

    let result = image::open(&output).unwrap().to_rgb8();
    for y in 0..6 {
        let reds = (0..8)
            .filter(|x| result.get_pixel(*x, y) == &Rgb([255, 0, 0]))
            .count();
        assert_eq!(reds, 1, "row {}", y);
    }
}

#[test]
fn removing_the_whole_width_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), 4, 4);
    let output = dir.path().join("never.png");

    seamcarve()
        .args(&["-in", input.as_str(), "-out", output.to_str().unwrap(), "-width", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot carve width from 4 down to 0"));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.png");

    seamcarve()
        .args(&["-in", "does-not-exist.png", "-out", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read does-not-exist.png"));
}

#[test]
fn unknown_operation_is_rejected() {
    seamcarve()
        .args(&["-in", "a.png", "-out", "b.png", "-operation", "grow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grow"));
}
