use crate::error::Result;
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

pub const LOG_FILE_NAME: &str = "submitter.log";

static LOG_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Routes `tracing` output to `<log_dir>/submitter.log`. The writer guard lives until the process exits.
///
/// # Errors
/// Returns `Error::LogInit` if `log_dir` cannot be created or the log file cannot be opened.
pub fn init_logger(log_dir: &Path) -> Result<()> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)?;

    let (non_blocking_writer, guard) = non_blocking(file_appender);

    let installed = tracing_subscriber::fmt()
        .with_writer(BoxMakeWriter::new(non_blocking_writer))
        .with_ansi(false)
        .with_level(true)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Logger already initialized: {e}");
        return Ok(());
    }

    if let Ok(mut slot) = LOG_GUARD.lock() {
        *slot = Some(guard);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    #[test]
    fn test_unusable_log_dir_is_an_error() {
        let blocker = std::env::temp_dir().join(format!("submitter-log-blocker-{}", std::process::id()));
        fs::write(&blocker, b"not a directory").unwrap();

        let result = init_logger(&blocker.join("logs"));
        fs::remove_file(&blocker).unwrap();

        assert!(matches!(result, Err(Error::LogInit(_))));
    }
}
