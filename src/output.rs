//! User-facing printing for the CLI.
//! Prefixed, colored lines when stdout is a TTY; plain text otherwise.

use owo_colors::OwoColorize;
use serde::Serialize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {msg}");
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {msg}");
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {msg}");
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {msg}");
    }
}

/// Plain line without prefix, for output users may script against.
pub fn print_user(msg: &str) {
    println!("{msg}");
}

/// Folder names stand out in listings when on a TTY.
pub fn print_folder_row(name: &str, detail: &str) {
    if is_tty() {
        println!("{}  {}", format!("{name}/").blue().bold(), detail.dimmed());
    } else {
        println!("{name}/  {detail}");
    }
}

/// Pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One error line per accumulated message.
pub fn print_messages(messages: &[String]) {
    for m in messages {
        print_error(m);
    }
}
