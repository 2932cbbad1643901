//! Integration tests for top-level CLI behavior.

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_umlgen(args: &[&str], cwd: &Path) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_umlgen");
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run umlgen binary")
}

const ZOO_DIAGRAM: &str = r#"{
    "name": "zoo",
    "classes": [
        {
            "id": 1,
            "name": "Animal",
            "shape": "class",
            "attributes": [
                {"id": 10, "name": "name", "type": "String", "visibility": "-"}
            ],
            "methods": []
        },
        {
            "id": 2,
            "name": "Dog",
            "shape": "class",
            "attributes": [
                {"id": 11, "name": "breed", "type": "String", "visibility": "-"}
            ],
            "methods": []
        }
    ],
    "associations": [
        {"id": 100, "shape": "extends", "sourceId": 2, "targetId": 1}
    ]
}"#;

#[test]
fn generates_one_file_per_language() {
    let dir = tempfile::tempdir().unwrap();
    let diagram_path = dir.path().join("zoo.json");
    fs::write(&diagram_path, ZOO_DIAGRAM).unwrap();

    let output = run_umlgen(
        &[
            "--diagram",
            "zoo.json",
            "--output",
            "out",
            "--language",
            "python",
            "--language",
            "java",
        ],
        dir.path(),
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("Parsed 2 classes and 1 associations"));
    assert!(stdout.contains("Successfully generated 2 file(s)"));

    let python = fs::read_to_string(dir.path().join("out/zoo.py")).unwrap();
    assert!(python.contains("class Dog(Animal):"));
    assert!(python.contains("super().__init__(name)"));

    let java = fs::read_to_string(dir.path().join("out/zoo.java")).unwrap();
    assert!(java.contains("public class Dog extends Animal {"));
    assert!(java.contains("public Dog(String name, String breed) {"));
}

#[test]
fn unsupported_language_writes_placeholder_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("zoo.json"), ZOO_DIAGRAM).unwrap();

    let output = run_umlgen(
        &["--diagram", "zoo.json", "--output", "out", "--language", "rust"],
        dir.path(),
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("Unsupported language 'rust'"));

    let content = fs::read_to_string(dir.path().join("out/zoo.rust")).unwrap();
    assert_eq!(content, "// Unsupported language");
}

#[test]
fn dangling_reference_warns_but_still_generates() {
    let dir = tempfile::tempdir().unwrap();
    let diagram = r#"{
        "name": "broken",
        "classes": [{"id": 1, "name": "Lone"}],
        "associations": [
            {"id": 100, "shape": "extends", "sourceId": 1, "targetId": 99}
        ]
    }"#;
    fs::write(dir.path().join("broken.json"), diagram).unwrap();

    let output = run_umlgen(
        &["--diagram", "broken.json", "--output", "out", "--language", "php"],
        dir.path(),
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("references missing class 99"));

    let content = fs::read_to_string(dir.path().join("out/broken.php")).unwrap();
    assert!(content.contains("class Lone {"));
}

#[test]
fn cyclic_inheritance_fails_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let diagram = r#"{
        "name": "cycle",
        "classes": [
            {"id": 1, "name": "X"},
            {"id": 2, "name": "Y"}
        ],
        "associations": [
            {"id": 100, "shape": "extends", "sourceId": 1, "targetId": 2},
            {"id": 101, "shape": "extends", "sourceId": 2, "targetId": 1}
        ]
    }"#;
    fs::write(dir.path().join("cycle.json"), diagram).unwrap();

    let output = run_umlgen(
        &["--diagram", "cycle.json", "--output", "out", "--language", "java"],
        dir.path(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cyclic inheritance"));
}

#[test]
fn missing_diagram_argument_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_umlgen(&["--language", "python"], dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No diagram specified"));
}
