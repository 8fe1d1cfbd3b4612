pub mod palette;
pub mod profile;
pub mod system;
pub mod video;

pub use palette::{Color, PaletteConfig};
pub use profile::ProfileConfig;
pub use system::{LogLevel, SystemConfig};
pub use video::{Orientation, VideoConfig};

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 任一像素量（解析度、格子、邊距）的上限
pub const MAX_PIXELS: u32 = 1 << 15;

/// 網格最長邊的上限，確保版面計算不會溢出 i32
pub const MAX_GRID_EXTENT: i64 = 1 << 24;

/// 全局配置結構，啟動時建立一次後不再變動
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub profile: ProfileConfig,
    pub video: VideoConfig,
    pub palette: PaletteConfig,
    pub system: SystemConfig,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// 從 TOML 字串讀取，缺少的欄位使用預設值
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// 網格列數（方向決定是年還是週）
    pub fn rows(&self) -> u32 {
        match self.video.orientation {
            Orientation::WeekMajor => self.profile.lifespan_years,
            Orientation::YearMajor => crate::calendar::WEEKS_PER_YEAR as u32,
        }
    }

    pub fn cols(&self) -> u32 {
        match self.video.orientation {
            Orientation::WeekMajor => crate::calendar::WEEKS_PER_YEAR as u32,
            Orientation::YearMajor => self.profile.lifespan_years,
        }
    }

    /// 已展開 `~` 的輸出路徑
    pub fn output_path(&self) -> PathBuf {
        system::expand_home(&self.system.output_path)
    }

    /// 拒絕無法產生影像的設定；網格溢出畫布則不檢查
    pub fn validate(&self) -> Result<()> {
        if self.profile.lifespan_years == 0 {
            return Err(Error::config("lifespan_years 必須大於 0"));
        }
        if self.video.width == 0 || self.video.height == 0 {
            return Err(Error::config(format!(
                "解析度無效: {}x{}",
                self.video.width, self.video.height
            )));
        }
        if self.video.cell_size == 0 {
            return Err(Error::config("cell_size 必須大於 0"));
        }

        let video = &self.video;
        let pixel_fields = [
            ("width", video.width),
            ("height", video.height),
            ("cell_size", video.cell_size),
            ("cell_gap", video.cell_gap),
            ("top_margin", video.top_margin),
            ("bottom_margin", video.bottom_margin),
            ("label_margin", video.label_margin),
            ("label_gap", video.label_gap),
            ("title_y", video.title_y),
            ("stats_offset", video.stats_offset),
        ];
        for (name, value) in pixel_fields {
            if value > MAX_PIXELS {
                return Err(Error::config(format!(
                    "{} 超出上限 {}: {}",
                    name, MAX_PIXELS, value
                )));
            }
        }

        let step = video.cell_size as i64 + video.cell_gap as i64;
        let extent = self.rows().max(self.cols()) as i64 * step;
        if extent > MAX_GRID_EXTENT {
            return Err(Error::config(format!(
                "網格過大: {} 像素（上限 {}）",
                extent, MAX_GRID_EXTENT
            )));
        }
        Ok(())
    }
}

/// 配置構建器
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::new(),
        }
    }

    pub fn from_config(config: Config) -> Self {
        ConfigBuilder { config }
    }

    pub fn birthdate(mut self, date: NaiveDate) -> Self {
        self.config.profile.birthdate = date;
        self
    }

    pub fn lifespan_years(mut self, years: u32) -> Self {
        self.config.profile.lifespan_years = years;
        self
    }

    pub fn resolution(mut self, width: u32, height: u32) -> Self {
        self.config.video.width = width;
        self.config.video.height = height;
        self
    }

    pub fn cell(mut self, size: u32, gap: u32) -> Self {
        self.config.video.cell_size = size;
        self.config.video.cell_gap = gap;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.video.orientation = orientation;
        self
    }

    pub fn palette(mut self, palette: PaletteConfig) -> Self {
        self.config.palette = palette;
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.system.output_path = path.into();
        self
    }

    pub fn set_wallpaper(mut self, enabled: bool) -> Self {
        self.config.system.set_wallpaper = enabled;
        self
    }

    pub fn font_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.config.system.font_paths = paths;
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.system.log_level = level;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dark_theme() {
        let config = Config::new();
        assert_eq!(config.profile.lifespan_years, 90);
        assert_eq!((config.video.width, config.video.height), (2560, 1664));
        assert_eq!(config.palette.current.to_string(), "#FF6B35");
        assert_eq!(config.rows(), 90);
        assert_eq!(config.cols(), 52);
        assert!(config.system.set_wallpaper);
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let text = r##"
            [profile]
            birthdate = "1990-01-15"
            lifespan_years = 80

            [video]
            orientation = "year-major"
            cell_size = 10

            [palette]
            current = "#00FF00"

            [system]
            set_wallpaper = false
            log_level = "debug"
        "##;
        let config = Config::from_toml_str(text).unwrap();
        assert_eq!(config.profile.birthdate, NaiveDate::from_ymd_opt(1990, 1, 15).unwrap());
        assert_eq!(config.profile.lifespan_years, 80);
        assert_eq!(config.video.orientation, Orientation::YearMajor);
        assert_eq!(config.video.cell_size, 10);
        assert_eq!(config.video.cell_gap, 2);
        assert_eq!(config.palette.current, Color::rgb(0, 0xFF, 0));
        assert_eq!(config.palette.past, PaletteConfig::default().past);
        assert!(!config.system.set_wallpaper);
        assert_eq!(config.system.log_level, LogLevel::Debug);
        assert_eq!(config.rows(), 52);
        assert_eq!(config.cols(), 80);
    }

    #[test]
    fn test_bad_color_in_toml() {
        let text = "[palette]\npast = \"#XYZ\"\n";
        assert!(matches!(Config::from_toml_str(text), Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_builder_rejects_zero_lifespan() {
        let result = ConfigBuilder::new().lifespan_years(0).build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        let result = ConfigBuilder::new().resolution(0, 100).build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_misspelled_key_is_rejected() {
        let text = "[profile]\nlifespan = 80\n";
        assert!(matches!(Config::from_toml_str(text), Err(Error::ConfigParse(_))));
        let text = "[video]\ncellsize = 10\n";
        assert!(matches!(Config::from_toml_str(text), Err(Error::ConfigParse(_))));
        let text = "[colors]\npast = \"#FFFFFF\"\n";
        assert!(matches!(Config::from_toml_str(text), Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_oversized_geometry_is_rejected() {
        let result = ConfigBuilder::new().cell(100_000_000, 2).build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        let result = ConfigBuilder::new().cell(13, 100_000_000).build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        let result = ConfigBuilder::new().resolution(u32::MAX, 100).build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        let result = ConfigBuilder::new().lifespan_years(10_000_000).build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        let text = "[video]\ncell_size = 100000000\n";
        assert!(matches!(Config::from_toml_str(text), Err(Error::InvalidConfig(_))));

        assert!(ConfigBuilder::new().cell(MAX_PIXELS, 0).build().is_ok());
    }
}
