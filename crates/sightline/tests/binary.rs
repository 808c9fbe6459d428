use sightline_test_utils::fixtures;
use std::process::Command;

fn sightline() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sightline"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_sightlines_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("map.txt");
    std::fs::write(&map_path, fixtures::corridor().to_text()).unwrap();

    let out = sightline()
        .arg(&map_path)
        .args(["15", "20", "--no-render"])
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "0: (15.0, 10.0)\n90: (50.0, 20.0)\n180: (15.0, 30.0)\n270: (0.0, 20.0)\n"
    );
}

#[test]
fn missing_map_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("absent.txt");

    let out = sightline()
        .arg(&map_path)
        .args(["1", "1", "--no-render"])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(
        String::from_utf8(out.stderr).unwrap().trim_end(),
        format!("Error: the file '{}' does not exist", map_path.display())
    );
}

#[test]
fn invalid_position_exits_one_with_chain() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("map.txt");
    std::fs::write(&map_path, fixtures::open_field().to_text()).unwrap();

    let out = sightline()
        .arg(&map_path)
        .args(["-1", "1", "--no-render"])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with(&format!("Error: invalid map '{}': ", map_path.display())));
}
