//! End-to-end tests for the assetgen binary.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_assetgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_assetgen"))
        .current_dir(dir)
        .env_remove("ASSETGEN_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to execute assetgen")
}

fn flutter_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("pubspec.yaml"), "name: test_app\n").unwrap();
    for file in [
        "assets/image/test.png",
        "assets/svg/test.svg",
        "assets/lottie/test.json",
    ] {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }
    temp_dir
}

#[test]
fn test_help_lists_subcommands() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_assetgen(temp_dir.path(), &["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["generate", "init", "info"] {
        assert!(stdout.contains(subcommand), "missing {subcommand}: {stdout}");
    }
}

#[test]
fn test_init_then_generate() {
    let project = flutter_project();
    let root = project.path();

    let init = run_assetgen(root, &["init"]);
    assert!(init.status.success(), "{}", String::from_utf8_lossy(&init.stderr));
    let config = fs::read_to_string(root.join("assetgen.toml")).unwrap();
    assert!(config.contains("package_name = \"test_app\""));

    let generate = run_assetgen(root, &["generate"]);
    assert!(generate.status.success(), "{}", String::from_utf8_lossy(&generate.stderr));

    let dart = fs::read_to_string(root.join("lib/generated/assets.dart")).unwrap();
    assert!(dart.contains("class $AssetsImageGen {"));
    assert!(dart.contains("static const $AssetsLottieGen lottie = $AssetsLottieGen();"));
    assert!(dart.contains("import 'package:flutter_svg/flutter_svg.dart';"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let project = flutter_project();
    let root = project.path();
    fs::write(root.join("assetgen.toml"), "# mine\n").unwrap();

    let output = run_assetgen(root, &["init"]);
    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(root.join("assetgen.toml")).unwrap(), "# mine\n");

    let forced = run_assetgen(root, &["init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn test_dry_run_prints_without_writing() {
    let project = flutter_project();
    let root = project.path();
    fs::write(root.join("assetgen.toml"), "").unwrap();

    let output = run_assetgen(
        root,
        &["generate", "--dry-run", "--target-version", "3.24", "--class-name", "Res"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("/// GENERATED CODE - DO NOT MODIFY BY HAND"));
    assert!(stdout.contains("final class Res {"));
    assert!(!root.join("lib/generated/assets.dart").exists());
}

#[test]
fn test_dry_run_matches_written_file() {
    let project = flutter_project();
    let root = project.path();
    fs::write(root.join("assetgen.toml"), "").unwrap();

    let dry_run = run_assetgen(root, &["generate", "--dry-run"]);
    assert!(dry_run.status.success(), "{}", String::from_utf8_lossy(&dry_run.stderr));

    let generate = run_assetgen(root, &["generate"]);
    assert!(generate.status.success(), "{}", String::from_utf8_lossy(&generate.stderr));

    let written = fs::read_to_string(root.join("lib/generated/assets.dart")).unwrap();
    assert_eq!(String::from_utf8_lossy(&dry_run.stdout).trim_end(), written.trim_end());
}

#[test]
fn test_output_override() {
    let project = flutter_project();
    let root = project.path();
    fs::write(root.join("assetgen.toml"), "").unwrap();

    let output = run_assetgen(root, &["--output", "lib/res.g.dart"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(root.join("lib/res.g.dart").exists());
}

#[test]
fn test_info_json() {
    let project = flutter_project();
    let root = project.path();
    fs::write(root.join("assetgen.toml"), "[naming]\nstyle = \"snake_case\"\n").unwrap();

    let output = run_assetgen(root, &["info", "--format", "json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["naming"]["naming_style"], "snake_case");
    assert_eq!(value["assets"]["files"], 3);
    assert_eq!(value["capabilities"]["vector_graphics"], true);
    assert_eq!(value["capabilities"]["rive"], false);
}

#[test]
fn test_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    let output = run_assetgen(
        temp_dir.path(),
        &["--config", missing.to_str().unwrap(), "generate"],
    );
    assert!(!output.status.success());
}
