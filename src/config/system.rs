use serde::Deserialize;
use std::path::{Path, PathBuf};

/// System-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    pub output_path: PathBuf,
    pub set_wallpaper: bool,
    pub log_level: LogLevel,
    pub log_file: Option<PathBuf>,
    pub font_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// 每個 `-v` 提高一級
    pub fn raised_by(self, steps: u8) -> LogLevel {
        let order = [
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let pos = order.iter().position(|l| *l == self).unwrap_or(2);
        order[(pos + steps as usize).min(order.len() - 1)]
    }
}

/// 依序嘗試的系統字型，先 macOS 再常見的 Linux 路徑
pub fn default_font_paths() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/SFNSText.ttf",
        "/System/Library/Fonts/SFNS.ttf",
        "/System/Library/Fonts/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// 展開開頭的 `~`
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            output_path: PathBuf::from("~/Desktop/life_calendar.png"),
            set_wallpaper: true,
            log_level: LogLevel::Warn,
            log_file: None,
            font_paths: default_font_paths(),
        }
    }
}
