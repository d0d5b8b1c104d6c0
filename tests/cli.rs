use image::{ Rgb, RgbImage };

use std::{
    path::{ Path, PathBuf },
    process::{ Command, Output },
};

use tempfile::TempDir;

fn write_fixture(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(w, h, Rgb([90, 60, 30])).save(&path).unwrap();
    path
}

fn mergeimg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mergeimg"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

#[test]
fn positional_inputs_stack_portrait() {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(dir.path(), "a.png", 6, 4);
    let b = write_fixture(dir.path(), "b.png", 3, 5);
    let out = dir.path().join("out.png");

    let res = mergeimg(&[a.to_str().unwrap(), b.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert!(res.status.success());
    assert_eq!(stdout(&res), "Success");
    assert_eq!(image::image_dimensions(&out).unwrap(), (6, 9));
}

#[test]
fn landscape_flag() {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(dir.path(), "a.png", 6, 4);
    let b = write_fixture(dir.path(), "b.png", 3, 5);
    let out = dir.path().join("out.png");

    let res = mergeimg(&["-l", a.to_str().unwrap(), b.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert!(res.status.success());
    assert_eq!(image::image_dimensions(&out).unwrap(), (9, 5));
}

#[test]
fn list_is_split_literally() {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(dir.path(), "a.png", 2, 2);
    let b = write_fixture(dir.path(), "b.png", 2, 3);
    let out = dir.path().join("out.png");

    let list = format!("{};{}", a.to_str().unwrap(), b.to_str().unwrap());
    let res = mergeimg(&["--list", &list, "-o", out.to_str().unwrap()]);
    assert!(res.status.success());
    assert_eq!(image::image_dimensions(&out).unwrap(), (2, 5));

    let gap = dir.path().join("gap.png");
    let list = format!("{};;{}", a.to_str().unwrap(), b.to_str().unwrap());
    let res = mergeimg(&["--list", &list, "-o", gap.to_str().unwrap()]);
    assert!(!res.status.success());
    assert_eq!(stdout(&res), "Error");
    assert!(!gap.exists());
}

#[test]
fn failure_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.png");
    let missing = dir.path().join("missing.png");

    let res = mergeimg(&[missing.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert!(!res.status.success());
    assert_eq!(stdout(&res), "Error");
    assert!(String::from_utf8_lossy(&res.stderr).contains("missing.png"));
}

#[test]
fn inputs_are_required() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.png");
    let res = mergeimg(&["-o", out.to_str().unwrap()]);
    assert!(!res.status.success());
}
