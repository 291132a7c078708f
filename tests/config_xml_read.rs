//! Verify XML config is parsed and used without touching user state.

use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use media_manager::{LogLevel, load_config_from_xml_path};

#[test]
fn reads_config_xml_and_applies_values() {
    let td = tempdir().expect("create tempdir");

    let cfg_path = td.path().join("config.xml");
    let public_root = td.path().join("public");
    let private_root = td.path().join("private");
    let log_file = td.path().join("media_manager.log");

    let xml = format!(
        r#"
<config>
  <active_disk>private</active_disk>
  <app_url>https://files.example.com/</app_url>
  <log_level>debug</log_level>
  <log_file>{}</log_file>
  <disk name="public">
    <root>{}</root>
    <url>https://files.example.com/storage</url>
  </disk>
  <disk name="private">
    <root>{}</root>
  </disk>
</config>
"#,
        log_file.display(),
        public_root.display(),
        private_root.display()
    );
    fs::write(&cfg_path, xml).expect("write config.xml");

    let cfg = load_config_from_xml_path(&cfg_path).expect("load_config_from_xml_path");

    assert_eq!(cfg.active_disk, "private");
    assert_eq!(cfg.app_url, "https://files.example.com");
    assert_eq!(cfg.log_level, LogLevel::Debug);
    assert_eq!(cfg.log_file.as_deref(), Some(log_file.as_path()));
    assert_eq!(cfg.disks.len(), 2);

    let active = cfg.active().expect("active disk");
    assert_eq!(active.root, private_root);
    assert_eq!(active.url, None);
    assert_eq!(
        cfg.disks[0].url.as_deref(),
        Some("https://files.example.com/storage")
    );
}

#[test]
fn whitespace_around_values_is_trimmed() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(
        &cfg_path,
        "<config>\n  <log_level>  info  </log_level>\n  <disk name=\" media \">\n    <root>  /srv/media  </root>\n  </disk>\n</config>\n",
    )
    .unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).unwrap();
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.active_disk, "media");
    assert_eq!(cfg.disks[0].root, PathBuf::from("/srv/media"));
}

#[test]
fn missing_fields_keep_defaults() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config></config>").unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).unwrap();
    assert_eq!(cfg.active_disk, "public");
    assert_eq!(cfg.app_url, "http://localhost");
    assert_eq!(cfg.log_level, LogLevel::Normal);
    assert!(cfg.active().is_some());
}

#[test]
fn malformed_xml_is_an_error() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><app_url>oops</config>").unwrap();

    assert!(load_config_from_xml_path(&cfg_path).is_err());
}

#[test]
fn unknown_element_is_an_error() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><download_base>/x</download_base></config>").unwrap();

    assert!(load_config_from_xml_path(&cfg_path).is_err());
}
