//! Logging setup shared by the colpond crates
//!
//! Usage:
//! - Set COLPOND_LOG=off (default) - no logs
//! - Set COLPOND_LOG=info - read timings and reconcile summaries
//! - Set COLPOND_LOG=debug - column-level planning decisions

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by [`init_diagnostics`]
pub const LOG_ENV: &str = "COLPOND_LOG";

static INIT: Once = Once::new();

/// Parse a log level name.
///
/// `Ok(None)` means logging is switched off. Unknown names are returned as
/// the error so the caller can report them.
pub fn parse_level(name: &str) -> Result<Option<emit::Level>, String> {
    match name.trim().to_ascii_lowercase().as_str() {
        "" | "off" => Ok(None),
        "debug" => Ok(Some(emit::Level::Debug)),
        "info" => Ok(Some(emit::Level::Info)),
        "warn" => Ok(Some(emit::Level::Warn)),
        "error" => Ok(Some(emit::Level::Error)),
        other => Err(other.to_string()),
    }
}

/// Initialize diagnostics based on the COLPOND_LOG environment variable
///
/// Safe to call multiple times; only the first call (of this or
/// [`init_with_level`]) has an effect.
pub fn init_diagnostics() {
    let requested = std::env::var(LOG_ENV).unwrap_or_else(|_| "off".to_string());

    match parse_level(&requested) {
        Ok(None) => {}
        Ok(Some(level)) => init_with_level(level),
        Err(unknown) => {
            init_with_level(emit::Level::Info);
            emit::warn!("Unknown {env} value '{unknown}', using 'info'", env: LOG_ENV, unknown: unknown.as_str());
        }
    }
}

/// Initialize diagnostics at an explicit minimum level, ignoring the environment
pub fn init_with_level(min: emit::Level) {
    INIT.call_once(|| {
        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(min))
            .init();

        // The runtime lives for the rest of the process.
        std::mem::forget(rt);
    });
}

/// Log basic operations (reads, writes, reconcile summaries)
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (per-column decisions, projection indices)
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log warning conditions (fallbacks, suspicious inputs)
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log error conditions
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_multiple_times() {
        init_diagnostics();
        init_diagnostics();
        init_with_level(emit::Level::Debug);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("off"), Ok(None));
        assert_eq!(parse_level(""), Ok(None));
        assert_eq!(parse_level("DEBUG"), Ok(Some(emit::Level::Debug)));
        assert_eq!(parse_level(" warn "), Ok(Some(emit::Level::Warn)));
        assert_eq!(parse_level("verbose"), Err("verbose".to_string()));
    }

    #[test]
    fn test_macros_compile() {
        info!("Test message");
        debug!("Debug message with {value}", value: 42);
        warn!("Warning message");
        error!("Error message");
    }
}
