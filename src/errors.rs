//! Unified application error type.
//! Engine, storage, config and cli modules all return AppError so the
//! caller sees a single error surface.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Window / confirmation errors
    // ---------------------------
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Attendance confirmation is not open yet")]
    WindowNotOpen,

    #[error("Attendance confirmation window is closed")]
    WindowClosed,

    #[error("Attendance service failure: {0}")]
    TransportFailure(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Logger initialization failed: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
