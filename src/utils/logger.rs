use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static! {
    pub static ref LOGGER: CalendarLogger = CalendarLogger::new();
}

/// 寫到 stderr，並可同時附加到日誌檔
#[derive(Debug, Default)]
pub struct CalendarLogger {
    log_file: Mutex<Option<File>>,
}

impl CalendarLogger {
    pub fn new() -> Self {
        Self {
            log_file: Mutex::new(None),
        }
    }

    pub fn open_file(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        if let Ok(mut slot) = self.log_file.lock() {
            *slot = Some(file);
        }
        Ok(())
    }

    pub fn format_line(now: DateTime<Local>, record: &Record) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for CalendarLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format_line(Local::now(), record);
        eprintln!("{}", line);
        if let Ok(mut slot) = self.log_file.lock() {
            if let Some(file) = slot.as_mut() {
                writeln!(file, "{}", line).ok();
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut slot) = self.log_file.lock() {
            if let Some(file) = slot.as_mut() {
                file.flush().ok();
            }
        }
    }
}

/// 安裝全域 logger；重複呼叫只更新等級
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> std::io::Result<()> {
    if let Some(path) = log_file {
        LOGGER.open_file(path)?;
    }
    let _ = log::set_logger(&*LOGGER);
    log::set_max_level(level);
    Ok(())
}
