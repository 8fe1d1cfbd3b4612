use serde::Deserialize;

/// 網格方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// 每列一年，每行一週（52 行）
    #[default]
    WeekMajor,
    /// 每行一年，每列一週（52 列）
    YearMajor,
}

/// 畫布與網格版面配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub cell_gap: u32,
    pub orientation: Orientation,
    pub top_margin: u32,
    pub bottom_margin: u32,
    pub label_margin: u32,
    pub label_gap: u32,
    pub title_y: u32,
    pub stats_offset: u32,
    pub label_font_size: f32,
    pub title_font_size: f32,
    pub stats_font_size: f32,
    pub title: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        // M1 MacBook Air 原生解析度
        VideoConfig {
            width: 2560,
            height: 1664,
            cell_size: 13,
            cell_gap: 2,
            orientation: Orientation::WeekMajor,
            top_margin: 90,
            bottom_margin: 60,
            label_margin: 36,
            label_gap: 10,
            title_y: 48,
            stats_offset: 32,
            label_font_size: 11.0,
            title_font_size: 15.0,
            stats_font_size: 11.0,
            title: String::from("life  in  weeks"),
        }
    }
}
