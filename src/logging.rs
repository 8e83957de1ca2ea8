//! Logger bootstrap for the binary. Library code only uses the `log` facade.

use crate::errors::AppResult;
use flexi_logger::{Logger, LoggerHandle};

/// Environment variable that overrides every other level setting.
pub const LOG_ENV: &str = "RPRESENCE_LOG";

/// Level spec: `RPRESENCE_LOG`, else `-v` / `-vv`, else the configured level.
pub fn level_spec(verbose: u8, configured: &str) -> String {
    if let Ok(spec) = std::env::var(LOG_ENV)
        && !spec.trim().is_empty()
    {
        return spec;
    }

    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Start logging to stderr. Keep the returned handle alive for the whole run.
pub fn init(verbose: u8, configured: &str) -> AppResult<LoggerHandle> {
    let handle = Logger::try_with_str(level_spec(verbose, configured))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        assert_eq!(level_spec(0, "warn"), "warn");
        assert_eq!(level_spec(1, "warn"), "info");
        assert_eq!(level_spec(3, "warn"), "debug");
    }
}
