pub mod canvas;
pub mod font;
pub mod surface;

pub use canvas::Canvas;
pub use font::{FontFace, FontLoader};
pub use surface::{Anchor, HAlign, Surface, VAlign};

use crate::calendar::LifeClock;
use crate::config::{Color, Config, Orientation};
use crate::grid::{CellStatus, GridGeometry, Point};

/// 每隔幾年畫一個年份標籤
pub const LABEL_EVERY_YEARS: u32 = 10;

/// 把一次執行的設定轉成一連串繪圖指令
pub struct Renderer<'a> {
    config: &'a Config,
    geometry: GridGeometry,
    fonts: FontLoader,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_fonts(config, FontLoader::new(config.system.font_paths.clone()))
    }

    pub fn with_fonts(config: &'a Config, fonts: FontLoader) -> Self {
        Renderer {
            config,
            geometry: GridGeometry::new(config),
            fonts,
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    fn status_color(&self, status: CellStatus) -> Color {
        let palette = &self.config.palette;
        match status {
            CellStatus::Past => palette.past,
            CellStatus::Current => palette.current,
            CellStatus::Future => palette.future,
        }
    }

    /// 建立與設定解析度相同的畫布並完成繪製
    pub fn render_canvas(&self, clock: &LifeClock) -> Canvas {
        let video = &self.config.video;
        let mut canvas = Canvas::new(video.width, video.height, self.config.palette.background);
        self.render(clock, &mut canvas);
        canvas
    }

    pub fn render<S: Surface>(&self, clock: &LifeClock, surface: &mut S) {
        let (width, height) = surface.dimensions();
        surface.fill_rectangle(
            Point::new(0, 0),
            Point::new(width as i32, height as i32),
            self.config.palette.background,
        );

        self.draw_grid(clock, surface);
        self.draw_year_labels(surface);
        self.draw_title(surface);
        self.draw_stats(clock, surface);
    }

    fn draw_grid<S: Surface>(&self, clock: &LifeClock, surface: &mut S) {
        let mut current = None;
        for cell in self.geometry.cells(clock.grid_weeks_past) {
            if cell.status == CellStatus::Current {
                current = Some((cell.year, cell.week));
            }
            surface.fill_rectangle(cell.top_left, cell.bottom_right, self.status_color(cell.status));
        }
        match current {
            Some((year, week)) => log::debug!("本週位於第 {} 年第 {} 週", year, week),
            None => log::warn!(
                "網格週數 {} 不在 [0, {}) 內，沒有標示本週",
                clock.grid_weeks_past,
                self.geometry.capacity()
            ),
        }
    }

    fn draw_year_labels<S: Surface>(&self, surface: &mut S) {
        let video = &self.config.video;
        let font = self.fonts.load(video.label_font_size);
        let gap = video.label_gap as i32;
        let geometry = &self.geometry;

        for year in (0..=geometry.years()).step_by(LABEL_EVERY_YEARS as usize) {
            let offset = geometry.year_offset(year);
            let (position, anchor) = match geometry.orientation {
                Orientation::WeekMajor => (Point::new(geometry.origin.x - gap, offset), Anchor::RIGHT_MIDDLE),
                Orientation::YearMajor => (Point::new(offset, geometry.origin.y - gap), Anchor::CENTER_BOTTOM),
            };
            surface.draw_text(position, &year.to_string(), self.config.palette.text, &font, anchor);
        }
    }

    fn draw_title<S: Surface>(&self, surface: &mut S) {
        let video = &self.config.video;
        let font = self.fonts.load(video.title_font_size);
        let (width, _) = surface.dimensions();
        surface.draw_text(
            Point::new(width as i32 / 2, video.title_y as i32),
            &video.title,
            self.config.palette.text,
            &font,
            Anchor::CENTER_MIDDLE,
        );
    }

    fn draw_stats<S: Surface>(&self, clock: &LifeClock, surface: &mut S) {
        let video = &self.config.video;
        let font = self.fonts.load(video.stats_font_size);
        let (width, _) = surface.dimensions();
        let stats = clock.stats(self.config.profile.lifespan_years);
        let y = self.geometry.origin.y + self.geometry.height + video.stats_offset as i32;
        surface.draw_text(
            Point::new(width as i32 / 2, y),
            &stats.caption(),
            self.config.palette.text,
            &font,
            Anchor::CENTER_MIDDLE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        Rect(Point, Point, Color),
        Text(Point, String, Anchor),
    }

    /// 只記錄指令的表面
    struct Recorder {
        size: (u32, u32),
        commands: Vec<Command>,
    }

    impl Surface for Recorder {
        fn dimensions(&self) -> (u32, u32) {
            self.size
        }

        fn fill_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Color) {
            self.commands.push(Command::Rect(top_left, bottom_right, color));
        }

        fn draw_text(&mut self, position: Point, text: &str, _color: Color, _font: &FontFace, anchor: Anchor) {
            self.commands.push(Command::Text(position, text.to_string(), anchor));
        }
    }

    fn record(config: &Config, today: NaiveDate) -> Vec<Command> {
        let renderer = Renderer::with_fonts(config, FontLoader::new(Vec::new()));
        let clock = LifeClock::new(config.profile.birthdate, today).unwrap();
        let mut recorder = Recorder {
            size: (config.video.width, config.video.height),
            commands: Vec::new(),
        };
        renderer.render(&clock, &mut recorder);
        recorder.commands
    }

    fn anniversary_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 6).unwrap()
    }

    #[test]
    fn test_command_sequence() {
        let config = ConfigBuilder::new().build().unwrap();
        let commands = record(&config, anniversary_today());

        // 背景 + 90 * 52 格 + 10 個標籤 + 標題 + 統計
        let rects = commands.iter().filter(|c| matches!(c, Command::Rect(..))).count();
        let texts: Vec<&Command> = commands.iter().filter(|c| matches!(c, Command::Text(..))).collect();
        assert_eq!(rects, 1 + 90 * 52);
        assert_eq!(texts.len(), 10 + 2);
        assert_eq!(commands[0], Command::Rect(Point::new(0, 0), Point::new(2560, 1664), config.palette.background));

        let current = commands
            .iter()
            .filter(|c| matches!(c, Command::Rect(_, _, color) if *color == config.palette.current))
            .count();
        assert_eq!(current, 1);
    }

    #[test]
    fn test_current_cell_position() {
        let config = ConfigBuilder::new().build().unwrap();
        let commands = record(&config, anniversary_today());
        let geometry = GridGeometry::new(&config);
        let expected = geometry.cell(20, 0, 1040);
        assert!(commands.contains(&Command::Rect(expected.top_left, expected.bottom_right, config.palette.current)));
    }

    #[test]
    fn test_labels_week_major() {
        let config = ConfigBuilder::new().build().unwrap();
        let commands = record(&config, anniversary_today());
        let geometry = GridGeometry::new(&config);
        let labels: Vec<(Point, String, Anchor)> = commands
            .iter()
            .filter_map(|c| match c {
                Command::Text(p, t, a) if *a == Anchor::RIGHT_MIDDLE => Some((*p, t.clone(), *a)),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], (Point::new(geometry.origin.x - 10, geometry.origin.y), "0".to_string(), Anchor::RIGHT_MIDDLE));
        assert_eq!(labels[9].1, "90");
        assert_eq!(labels[9].0.y, geometry.origin.y + 90 * 15);
    }

    #[test]
    fn test_labels_year_major() {
        let config = ConfigBuilder::new()
            .orientation(Orientation::YearMajor)
            .lifespan_years(45)
            .build()
            .unwrap();
        let commands = record(&config, anniversary_today());
        let geometry = GridGeometry::new(&config);
        let labels: Vec<&Command> = commands
            .iter()
            .filter(|c| matches!(c, Command::Text(_, _, a) if *a == Anchor::CENTER_BOTTOM))
            .collect();
        // 0, 10, 20, 30, 40
        assert_eq!(labels.len(), 5);
        assert_eq!(
            *labels[1],
            Command::Text(Point::new(geometry.origin.x + 10 * 15, geometry.origin.y - 10), "10".to_string(), Anchor::CENTER_BOTTOM)
        );
    }

    #[test]
    fn test_title_and_stats() {
        let config = ConfigBuilder::new().build().unwrap();
        let commands = record(&config, anniversary_today());
        let geometry = GridGeometry::new(&config);
        let n = commands.len();
        assert_eq!(
            commands[n - 2],
            Command::Text(Point::new(1280, 48), "life  in  weeks".to_string(), Anchor::CENTER_MIDDLE)
        );
        match &commands[n - 1] {
            Command::Text(p, text, anchor) => {
                assert_eq!(*p, Point::new(1280, geometry.origin.y + geometry.height + 32));
                assert!(text.ends_with("of a 90-year life"));
                assert_eq!(*anchor, Anchor::CENTER_MIDDLE);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_future_birthdate_marks_no_current_week() {
        let config = ConfigBuilder::new()
            .birthdate(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())
            .build()
            .unwrap();
        let commands = record(&config, anniversary_today());
        assert!(commands
            .iter()
            .skip(1)
            .filter(|c| matches!(c, Command::Rect(..)))
            .all(|c| matches!(c, Command::Rect(_, _, color) if *color == config.palette.future)));
    }

    #[test]
    fn test_canvas_matches_resolution_when_grid_overflows() {
        let config = ConfigBuilder::new().resolution(320, 200).build().unwrap();
        let renderer = Renderer::with_fonts(&config, FontLoader::new(Vec::new()));
        let clock = LifeClock::new(config.profile.birthdate, anniversary_today()).unwrap();
        let canvas = renderer.render_canvas(&clock);
        assert_eq!((canvas.width(), canvas.height()), (320, 200));
    }
}
