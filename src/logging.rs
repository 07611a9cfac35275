use std::path::{Path, PathBuf};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Initialise logging. Without `debug` the level is forced to `info`
/// regardless of `RUST_LOG`; with it the default is `debug` and `RUST_LOG`
/// may override it.
///
/// Logs go to `log_file` when given, otherwise to stderr since stdout carries
/// the result list for the host. A log file that cannot be opened falls back
/// to stderr. Calling this more than once is harmless.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let appender = log_file.as_deref().map(|p| (p, file_appender(p)));
    let failed = match appender {
        Some((_, Ok(file))) => {
            let _ = builder.with_ansi(false).with_writer(file).try_init();
            None
        }
        Some((path, Err(e))) => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            Some((path, e))
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            None
        }
    };
    if let Some((path, e)) = failed {
        tracing::warn!("cannot log to {}: {e}; using stderr", path.display());
    }
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "supernotes_launcher.log".into());
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
}
