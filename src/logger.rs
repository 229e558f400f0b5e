use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens (or creates) the log file. Later calls keep the first file.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
            *logger = Some(file);
        }
    }
}

/// Appends one timestamped line. A no-op before `init`.
pub fn log(message: &str) {
    if let Ok(mut guard) = LOGGER.lock()
        && let Some(logger) = guard.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(logger, "[{}] {}", timestamp, message);
    }
}

/// Points the logger at one per-process file that every test can read.
#[cfg(test)]
pub(crate) fn init_for_tests() -> std::path::PathBuf {
    let path = std::env::temp_dir()
        .join(format!("starlens-test-{}", std::process::id()))
        .join("logs/starlens.log");
    init(&path);
    path
}
