use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Enable or disable ANSI styling for every message below (`--no-color`).
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

fn paint(style: Style, text: &str, color: bool) -> String {
    if color {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

fn line<T: fmt::Display>(style: Style, icon: &str, msg: T, color: bool) -> String {
    format!("{} {}", paint(style, icon, color), msg)
}

fn enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Blue.bold(), ICON_INFO, msg, enabled()));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Green.bold(), ICON_OK, msg, enabled()));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Yellow.bold(), ICON_WARN, msg, enabled()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Red.bold(), ICON_ERR, msg, enabled()));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", paint(Blue.bold(), &format!("=== {msg} ==="), enabled()));
}
