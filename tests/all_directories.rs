use assert_fs::prelude::*;
use media_manager::{DirectoryOption, FileManager, LocalDisk};

const NBSP4: &str = "\u{a0}\u{a0}\u{a0}\u{a0}";

#[test]
fn picker_rows_are_indented_by_depth() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a/b/c").create_dir_all().unwrap();
    temp.child("z").create_dir_all().unwrap();
    temp.child("a/file.txt").write_str("x").unwrap();

    let disk = LocalDisk::new("public", temp.path(), None);
    let manager = FileManager::new(&disk, "http://localhost");
    let rows = manager.all_directories();

    let expected = vec![
        DirectoryOption {
            path: "/".into(),
            label: "Root".into(),
        },
        DirectoryOption {
            path: "/a".into(),
            label: format!("{NBSP4}a"),
        },
        DirectoryOption {
            path: "/a/b".into(),
            label: format!("{NBSP4}{NBSP4}b"),
        },
        DirectoryOption {
            path: "/a/b/c".into(),
            label: format!("{NBSP4}{NBSP4}{NBSP4}c"),
        },
        DirectoryOption {
            path: "/z".into(),
            label: format!("{NBSP4}z"),
        },
    ];
    assert_eq!(rows, expected);
}

#[test]
fn top_level_hidden_folders_are_skipped() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".cache/inner").create_dir_all().unwrap();
    temp.child("docs").create_dir_all().unwrap();

    let disk = LocalDisk::new("public", temp.path(), None);
    let manager = FileManager::new(&disk, "http://localhost");
    let paths: Vec<String> = manager
        .all_directories()
        .into_iter()
        .map(|r| r.path)
        .collect();

    assert_eq!(paths, ["/", "/docs"]);
}

#[test]
fn empty_disk_has_only_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    let disk = LocalDisk::new("public", temp.path(), None);
    let manager = FileManager::new(&disk, "http://localhost");

    assert_eq!(manager.all_directories().len(), 1);
}
