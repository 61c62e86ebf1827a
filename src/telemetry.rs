//! Optional structured trace log. The terminal belongs to the UI, so events go
//! to a JSON-lines file instead of stderr.

use crate::config::AppConfig;
use std::env;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

const TRACE_LOG_ENV: &str = "RESPONDEE_TRACE_LOG";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Trace file location: `RESPONDEE_TRACE_LOG`, else the temp dir.
#[must_use]
pub fn tracing_log_path() -> PathBuf {
    trace_path_from(env::var_os(TRACE_LOG_ENV))
}

fn trace_path_from(override_path: Option<OsString>) -> PathBuf {
    override_path
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("respondee_trace.jsonl"))
}

#[inline]
fn tracing_enabled(config: &AppConfig) -> bool {
    config.logs && !config.no_logs
}

fn init_tracing_once(config: &AppConfig, path: &Path, once: &OnceLock<()>) {
    if !tracing_enabled(config) {
        return;
    }

    let _ = once.get_or_init(|| {
        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!(
                    "respondee: trace log {} unavailable, logging disabled: {err}",
                    path.display()
                );
                return;
            }
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_max_level(Level::DEBUG)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Install the file subscriber when `--logs` is on and `--no-logs` is off.
/// Later calls are no-ops. If the file cannot be opened, a note goes to
/// stderr (before the UI owns the terminal) and logging stays disabled.
pub fn init_tracing(config: &AppConfig) {
    init_tracing_once(config, &tracing_log_path(), &TRACING_INIT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn test_config() -> AppConfig {
        AppConfig::parse_from(["telemetry-test"])
    }

    fn unique_trace_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        env::temp_dir().join(format!("respondee-trace-{suffix}-{nanos}.jsonl"))
    }

    #[test]
    fn trace_path_prefers_override() {
        let path = unique_trace_path("env");
        assert_eq!(trace_path_from(Some(path.clone().into_os_string())), path);
    }

    #[test]
    fn trace_path_defaults_to_temp_dir() {
        let expected = env::temp_dir().join("respondee_trace.jsonl");
        assert_eq!(trace_path_from(None), expected);
        assert_eq!(trace_path_from(Some(OsString::new())), expected);
    }

    #[test]
    fn tracing_enabled_truth_table() {
        let mut cfg = test_config();
        assert!(!tracing_enabled(&cfg));

        cfg.logs = true;
        assert!(tracing_enabled(&cfg));

        cfg.no_logs = true;
        assert!(!tracing_enabled(&cfg));

        cfg.logs = false;
        assert!(!tracing_enabled(&cfg));
    }

    #[test]
    fn init_tracing_once_respects_enabled_flag_and_creates_file() {
        let enabled_path = unique_trace_path("enabled");
        let mut enabled_cfg = test_config();
        enabled_cfg.logs = true;
        init_tracing_once(&enabled_cfg, &enabled_path, &OnceLock::new());
        assert!(
            enabled_path.exists(),
            "enabled config should create trace file"
        );

        let disabled_path = unique_trace_path("disabled");
        let mut disabled_cfg = test_config();
        disabled_cfg.logs = true;
        disabled_cfg.no_logs = true;
        init_tracing_once(&disabled_cfg, &disabled_path, &OnceLock::new());
        assert!(
            !disabled_path.exists(),
            "disabled config should not create trace file"
        );

        let _ = fs::remove_file(enabled_path);
    }

    #[test]
    fn unopenable_trace_path_leaves_logging_off() {
        let dir = env::temp_dir();
        let mut cfg = test_config();
        cfg.logs = true;
        let once = OnceLock::new();
        init_tracing_once(&cfg, &dir, &once);
        assert!(once.get().is_some(), "init runs once even when the open fails");
        assert!(dir.is_dir());
    }
}
