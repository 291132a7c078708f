//! Application orchestrator.
//! Loads config, applies CLI overrides, initializes logging, validates, opens
//! the active disk and dispatches the requested command.

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use tracing::{debug, error};

use media_manager::cli::{Args, Command};
use media_manager::config::{CONFIG_ENV, LoadResult};
use media_manager::output as out;
use media_manager::{
    FileManager, FolderInfo, LocalDisk, Outcome, PathUpload, UploadReport, default_config_path,
    file_mime_type, load_or_init,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle print-config before logging init
    if args.command == Command::PrintConfig {
        print_config_location(&args);
        return Ok(());
    }

    let mut cfg = match load_or_init(args.config.as_deref())? {
        LoadResult::Loaded(cfg) => cfg,
        LoadResult::CreatedTemplate(path) => {
            out::print_success(&format!(
                "A template media_manager config was written to: {}",
                path.display()
            ));
            out::print_info("Edit the <disk> root and url, then re-run this command.");
            out::print_info(&format!("To use a different location set {CONFIG_ENV} or pass --config."));
            return Ok(());
        }
    };
    args.apply_overrides(&mut cfg);

    let guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    debug!(?args, "Starting media_manager");

    let result = (|| -> Result<()> {
        cfg.validate()?;
        let disk_cfg = cfg
            .active()
            .ok_or_else(|| anyhow!("active disk '{}' is not defined", cfg.active_disk))?;
        let disk = LocalDisk::from_config(disk_cfg)?;
        let manager = FileManager::new(&disk, cfg.app_url.clone());
        dispatch(&manager, &args)
    })();

    if let Err(e) = &result {
        error!(error = ?e, "Command failed");
    }

    // Flush buffered file logs before exit
    drop(guard);
    result
}

fn print_config_location(args: &Args) {
    if let Some(p) = &args.config {
        out::print_info(&format!("Using --config (explicit):\n  {}", p.display()));
        return;
    }
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}"));
        out::print_info(&format!("To override, unset {CONFIG_ENV} or pass --config."));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default media_manager config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run any command to create a template.");
            }
        }
        None => out::print_error("Could not determine a default config path."),
    }
}

fn dispatch(manager: &FileManager<'_>, args: &Args) -> Result<()> {
    match &args.command {
        Command::Ls { folder } => {
            let info = manager.folder_info(folder);
            if args.json {
                out::print_json(&info)?;
            } else {
                print_listing(&info);
            }
            Ok(())
        }
        Command::Tree => {
            let rows = manager.all_directories();
            if args.json {
                out::print_json(&rows)?;
            } else {
                for row in &rows {
                    out::print_user(&row.label);
                }
            }
            Ok(())
        }
        Command::Mkdir { folder } => report(args, manager.create_directory(folder), "Folder created"),
        Command::Rmdir { folder } => report(args, manager.delete_directory(folder), "Folder deleted"),
        Command::Rm { path } => report(args, manager.delete_file(path), "File deleted"),
        Command::Rename {
            folder,
            original_name,
            new_name,
        } => report(args, manager.rename(folder, original_name, new_name), "Renamed"),
        Command::MvFile { from, to } => report(args, manager.move_file(from, to), "File moved"),
        Command::MvFolder { from, to } => report(args, manager.move_folder(from, to), "Folder moved"),
        Command::Upload { to, files } => {
            for f in files {
                if !f.is_file() {
                    bail!("not a readable file: {}", f.display());
                }
            }
            let uploads: Vec<PathUpload> = files.iter().map(|f| PathUpload::from_path(f)).collect();
            let uploaded = manager.save_uploaded_files(&uploads, to);
            report_upload(args, uploaded, files.len())
        }
        Command::Mime { path } => {
            let mime = file_mime_type(path);
            if args.json {
                out::print_json(&serde_json::json!({ "path": path, "mimeType": mime }))?;
            } else {
                out::print_user(&mime);
            }
            Ok(())
        }
        Command::PrintConfig => Ok(()),
    }
}

fn print_listing(info: &FolderInfo) {
    let trail: Vec<&str> = info.bread_crumbs.iter().map(|c| c.label.as_str()).collect();
    if trail.is_empty() {
        out::print_info(&info.folder_name);
    } else {
        out::print_info(&format!("{} / {}", trail.join(" / "), info.folder_name));
    }
    for dir in &info.sub_folders {
        out::print_folder_row(&dir.name, &dir.modified.format("%Y-%m-%d %H:%M").to_string());
    }
    for file in &info.files {
        out::print_user(&format!(
            "{}  {} bytes  {}  {}",
            file.name,
            file.size,
            file.mime_type,
            file.modified.format("%Y-%m-%d %H:%M")
        ));
    }
    out::print_info(&format!("{} item(s)", info.items_count));
}

fn emit<T: Serialize>(args: &Args, value: &T, messages: &[String]) -> Result<()> {
    if args.json {
        out::print_json(value).context("serialize result")?;
    } else {
        out::print_messages(messages);
    }
    Ok(())
}

fn report(args: &Args, outcome: Outcome, done: &str) -> Result<()> {
    emit(args, &outcome, &outcome.messages)?;
    if outcome.is_success() {
        if !args.json {
            out::print_success(done);
        }
        Ok(())
    } else if outcome.messages.is_empty() {
        bail!("the disk could not complete the operation; see the log for details")
    } else {
        bail!("operation rejected")
    }
}

fn report_upload(args: &Args, report: UploadReport, requested: usize) -> Result<()> {
    emit(args, &report, &report.messages)?;
    if !args.json {
        out::print_success(&format!("Stored {} of {} file(s)", report.stored, requested));
    }
    if report.stored < requested {
        bail!("{} upload(s) not stored", requested - report.stored);
    }
    Ok(())
}
