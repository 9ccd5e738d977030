//! Runs the `certify` binary against temporary working directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use chrono::Local;
use lopdf::content::Content;
use lopdf::Object;
use predicates::prelude::*;
use tempfile::TempDir;

const BUILTIN_FILES: [&str; 4] = [
    "Infosys_Python_Part1.pdf",
    "GeeksforGeeks_Python_Course.pdf",
    "Accenture_AI_Course.pdf",
    "MongoDB_Developer_Associate.pdf",
];

fn certify_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("certify"));
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

fn workspace_with_out_dir() -> TempDir {
    let workspace = TempDir::new().expect("workspace");
    fs::create_dir(workspace.path().join("certificates")).expect("create certificates/");
    workspace
}

fn pdf_count(dir: &Path) -> usize {
    fs::read_dir(dir)
        .expect("read_dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("pdf"))
        .count()
}

/// Text of every `Tj` operation on the first page, in drawing order.
fn page_texts(path: &Path) -> Vec<String> {
    let doc = lopdf::Document::load(path).expect("valid PDF");
    let page_id = *doc.get_pages().values().next().expect("page");
    let bytes = doc.get_page_content(page_id).expect("page content");
    let content = Content::decode(&bytes).expect("decode content stream");
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(
                bytes
                    .iter()
                    .map(|&b| if b == 0x96 { '\u{2013}' } else { char::from(b) })
                    .collect(),
            ),
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Successful runs
// ---------------------------------------------------------------------------

#[test]
fn default_run_writes_four_certificates_and_five_lines() {
    let workspace = workspace_with_out_dir();

    let output = certify_cmd(workspace.path())
        .arg("--date")
        .arg("2024-03-07")
        .output()
        .expect("run certify");
    assert!(
        output.status.success(),
        "command failed: status={} stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
    );

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "✓ Created Programming Fundamentals using Python – Part 1",
            "✓ Created Free Python Course with Certificate",
            "✓ Created Artificial Intelligence Course",
            "✓ Created MongoDB Developer Associate",
            "All certificates created successfully!",
        ]
    );

    let out_dir = workspace.path().join("certificates");
    assert_eq!(pdf_count(&out_dir), 4);
    for name in BUILTIN_FILES {
        let doc = lopdf::Document::load(out_dir.join(name)).expect("valid PDF");
        assert_eq!(doc.get_pages().len(), 1, "{name} must be one page");
    }
}

#[test]
fn run_without_date_uses_today() {
    let workspace = workspace_with_out_dir();
    certify_cmd(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("All certificates created successfully!\n"));
    let today = Local::now().date_naive().format("%B %d, %Y").to_string();

    let out_dir = workspace.path().join("certificates");
    assert_eq!(pdf_count(&out_dir), 4);
    for name in BUILTIN_FILES {
        let texts = page_texts(&out_dir.join(name));
        assert_eq!(texts.len(), 5, "{name}: {texts:?}");
        assert_eq!(texts[4], format!("Issued on: {today}"), "{name}");
    }
}

#[test]
fn dated_run_writes_blocks_in_order() {
    let workspace = workspace_with_out_dir();
    certify_cmd(workspace.path())
        .args(["--date", "2024-03-07"])
        .assert()
        .success();

    let texts = page_texts(&workspace.path().join("certificates").join(BUILTIN_FILES[0]));
    assert_eq!(
        texts,
        [
            "Certificate of Completion",
            "Issued by Infosys Springboard",
            "Programming Fundamentals using Python – Part 1",
            "Certificate of Completion for mastering Python programming fundamentals",
            "Issued on: March 07, 2024",
        ]
    );
}

#[test]
fn rerun_overwrites_existing_files() {
    let workspace = workspace_with_out_dir();
    let target = workspace.path().join("certificates").join(BUILTIN_FILES[0]);
    fs::write(&target, b"not a pdf").expect("write stale file");

    certify_cmd(workspace.path()).assert().success();
    certify_cmd(workspace.path()).assert().success();

    let bytes = fs::read(&target).expect("read");
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(pdf_count(&workspace.path().join("certificates")), 4);
}

#[test]
fn custom_out_dir_and_catalog() {
    let workspace = TempDir::new().expect("workspace");
    let out_dir = workspace.path().join("awards");
    fs::create_dir(&out_dir).expect("mkdir");
    let catalog = workspace.path().join("catalog.yaml");
    fs::write(
        &catalog,
        "- filename: Rust.pdf\n  title: Rust Basics\n  issuer: Ferris Academy\n  description: Ownership and borrowing\n",
    )
    .expect("write catalog");

    certify_cmd(workspace.path())
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout("✓ Created Rust Basics\nAll certificates created successfully!\n");

    assert!(out_dir.join("Rust.pdf").is_file());
    assert!(!workspace.path().join("certificates").exists());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn missing_out_dir_fails_without_output() {
    let workspace = TempDir::new().expect("workspace");

    certify_cmd(workspace.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("All certificates created successfully!").not())
        .stdout(predicate::str::contains("✓ Created").not())
        .stderr(predicate::str::contains("Infosys_Python_Part1.pdf"));

    assert!(!workspace.path().join("certificates").exists());
    let mut entries = fs::read_dir(workspace.path()).expect("read_dir");
    assert!(entries.next().is_none(), "failed run must not create files");
}

#[test]
fn empty_field_stops_at_that_record() {
    let workspace = workspace_with_out_dir();
    let catalog = workspace.path().join("catalog.yaml");
    fs::write(
        &catalog,
        "- filename: First.pdf\n  title: First\n  issuer: Org\n  description: Fine\n\
         - filename: Second.pdf\n  title: Second\n  issuer: \"\"\n  description: Broken\n\
         - filename: Third.pdf\n  title: Third\n  issuer: Org\n  description: Never reached\n",
    )
    .expect("write catalog");

    certify_cmd(workspace.path())
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stdout("✓ Created First\n")
        .stderr(predicate::str::contains("empty issuer"));

    let out_dir = workspace.path().join("certificates");
    assert!(out_dir.join("First.pdf").is_file());
    assert!(!out_dir.join("Second.pdf").exists());
    assert!(!out_dir.join("Third.pdf").exists());
}

#[test]
fn unencodable_text_stops_run_before_writing() {
    let workspace = workspace_with_out_dir();
    let catalog = workspace.path().join("catalog.yaml");
    fs::write(
        &catalog,
        "- filename: Kurs.pdf\n  title: Kurs ✓ 日本語 Łódź\n  issuer: Org\n  description: About\n",
    )
    .expect("write catalog");

    certify_cmd(workspace.path())
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Kurs.pdf"))
        .stderr(predicate::str::contains("cannot encode"));

    assert_eq!(pdf_count(&workspace.path().join("certificates")), 0);
}

#[test]
fn malformed_date_is_rejected_by_argument_parsing() {
    let workspace = workspace_with_out_dir();
    certify_cmd(workspace.path())
        .args(["--date", "07/03/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--date"));
    assert_eq!(pdf_count(&workspace.path().join("certificates")), 0);
}
