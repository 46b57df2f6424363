use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

struct FileLogger {
    file_path: PathBuf,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(file, "[{} {}] {}", record.level(), record.target(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

/// Routes `log` output from the styling crates to a file.
///
/// Library code logs at debug/trace level (style replacements, unknown style
/// names, tab-stop promotion); pointing it at a file keeps that out of the
/// host application's own output.
pub fn init_logger(path: impl Into<PathBuf>) {
    let logger = FileLogger {
        file_path: path.into(),
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}
