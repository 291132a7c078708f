use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{TempDir, tempdir};

struct Fixture {
    _td: TempDir,
    config: PathBuf,
    root: PathBuf,
}

fn fixture() -> Fixture {
    let td = tempdir().unwrap();
    let base = dunce::canonicalize(td.path()).unwrap();
    let root = base.join("public");
    fs::create_dir_all(&root).unwrap();
    let config = base.join("config.xml");
    fs::write(
        &config,
        format!(
            r#"<config>
  <app_url>http://localhost</app_url>
  <log_level>quiet</log_level>
  <log_file>{}</log_file>
  <disk name="public">
    <root>{}</root>
    <url>http://localhost/storage</url>
  </disk>
</config>"#,
            base.join("media_manager.log").display(),
            root.display()
        ),
    )
    .unwrap();
    Fixture {
        _td: td,
        config,
        root,
    }
}

fn run(config: &Path, args: &[&str]) -> Output {
    let me = assert_cmd::cargo::cargo_bin!("media_manager");
    Command::new(me)
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("MEDIA_MANAGER_CONFIG")
        .output()
        .expect("spawn binary")
}

#[test]
fn binary_print_config_succeeds() {
    let fx = fixture();
    let out = run(&fx.config, &["print-config"]);
    assert!(out.status.success(), "print-config should succeed");
    assert!(String::from_utf8_lossy(&out.stdout).contains("config.xml"));
}

#[test]
fn mkdir_then_ls_json() {
    let fx = fixture();
    fs::write(fx.root.join("notes.txt"), "hello").unwrap();

    let out = run(&fx.config, &["mkdir", "/docs"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(fx.root.join("docs").is_dir());

    let out = run(&fx.config, &["--json", "ls", "/"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json on stdout");
    assert_eq!(value["folderName"], "Root");
    assert_eq!(value["itemsCount"], 2);
    assert_eq!(value["subFolders"][0]["name"], "docs");
    assert_eq!(value["files"][0]["webPath"], "http://localhost/storage/notes.txt");
}

#[test]
fn rejected_operation_exits_non_zero() {
    let fx = fixture();
    fs::create_dir_all(fx.root.join("docs")).unwrap();

    let out = run(&fx.config, &["--json", "mkdir", "/docs"]);
    assert!(!out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["messages"][0], "Folder \"/docs\" already exists.");
}

#[test]
fn upload_and_move_file() {
    let fx = fixture();
    let src = fx.root.parent().unwrap().join("incoming.pdf");
    fs::write(&src, "%PDF").unwrap();

    let out = run(&fx.config, &["upload", "--to", "/in", src.to_str().unwrap()]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(fx.root.join("in/incoming.pdf")).unwrap(), "%PDF");

    let out = run(&fx.config, &["mv-file", "/in/incoming.pdf", "/archive/incoming.pdf"]);
    assert!(out.status.success());
    assert!(fx.root.join("archive/incoming.pdf").is_file());
    assert!(!fx.root.join("in/incoming.pdf").exists());
}

#[test]
fn mime_prints_type() {
    let fx = fixture();
    let out = run(&fx.config, &["mime", "photo.jpg"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "image/jpeg");
}

#[test]
fn unknown_disk_fails() {
    let fx = fixture();
    let out = run(&fx.config, &["--disk", "s3", "ls"]);
    assert!(!out.status.success());
}
