//! Local reference implementation of the attendance service, backed by SQLite.

pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod service;

pub use pool::DbPool;
pub use service::SqliteAttendanceService;
