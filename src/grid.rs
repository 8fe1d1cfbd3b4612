// 網格幾何與格子分類

use crate::calendar::WEEKS_PER_YEAR;
use crate::config::{Config, Orientation};

/// 像素座標，可為負值（網格可超出畫布）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// 格子的時間狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Past,
    Current,
    Future,
}

impl CellStatus {
    pub fn classify(index: i64, grid_weeks_past: i64) -> Self {
        if index < grid_weeks_past {
            CellStatus::Past
        } else if index == grid_weeks_past {
            CellStatus::Current
        } else {
            CellStatus::Future
        }
    }
}

/// 單一格子的繪製指令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub year: u32,
    pub week: u32,
    pub index: i64,
    pub status: CellStatus,
    pub top_left: Point,
    /// 不含此點
    pub bottom_right: Point,
}

/// 每次執行計算一次的網格版面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub orientation: Orientation,
    pub rows: u32,
    pub cols: u32,
    pub cell_size: i32,
    pub step: i32,
    pub width: i32,
    pub height: i32,
    pub origin: Point,
}

impl GridGeometry {
    pub fn new(config: &Config) -> Self {
        let video = &config.video;
        let rows = config.rows();
        let cols = config.cols();
        let cell_size = video.cell_size as i32;
        let step = cell_size + video.cell_gap as i32;
        let width = cols as i32 * step - video.cell_gap as i32;
        let height = rows as i32 * step - video.cell_gap as i32;

        let canvas_w = video.width as i32;
        let canvas_h = video.height as i32;
        let top = video.top_margin as i32;
        let bottom = video.bottom_margin as i32;
        let label = video.label_margin as i32;

        // 年份標籤在左側時水平讓出空間，在上方時垂直讓出
        let origin = match video.orientation {
            Orientation::WeekMajor => {
                let usable_h = canvas_h - top - bottom;
                Point::new(
                    (canvas_w - width + label).div_euclid(2),
                    top + (usable_h - height).div_euclid(2),
                )
            }
            Orientation::YearMajor => {
                let usable_h = canvas_h - top - bottom - label;
                Point::new(
                    (canvas_w - width).div_euclid(2),
                    top + label + (usable_h - height).div_euclid(2),
                )
            }
        };

        GridGeometry {
            orientation: video.orientation,
            rows,
            cols,
            cell_size,
            step,
            width,
            height,
            origin,
        }
    }

    pub fn years(&self) -> u32 {
        match self.orientation {
            Orientation::WeekMajor => self.rows,
            Orientation::YearMajor => self.cols,
        }
    }

    pub fn capacity(&self) -> i64 {
        self.rows as i64 * self.cols as i64
    }

    /// 某個年份刻度在年份軸上的像素位置
    pub fn year_offset(&self, year: u32) -> i32 {
        let base = match self.orientation {
            Orientation::WeekMajor => self.origin.y,
            Orientation::YearMajor => self.origin.x,
        };
        base + year as i32 * self.step
    }

    pub fn cell(&self, year: u32, week: u32, grid_weeks_past: i64) -> Cell {
        let index = year as i64 * WEEKS_PER_YEAR + week as i64;
        let (col, row) = match self.orientation {
            Orientation::WeekMajor => (week, year),
            Orientation::YearMajor => (year, week),
        };
        let top_left = Point::new(
            self.origin.x + col as i32 * self.step,
            self.origin.y + row as i32 * self.step,
        );
        Cell {
            year,
            week,
            index,
            status: CellStatus::classify(index, grid_weeks_past),
            top_left,
            bottom_right: Point::new(top_left.x + self.cell_size, top_left.y + self.cell_size),
        }
    }

    /// 依年、週順序列出全部格子
    pub fn cells(&self, grid_weeks_past: i64) -> impl Iterator<Item = Cell> + '_ {
        (0..self.years()).flat_map(move |year| {
            (0..WEEKS_PER_YEAR as u32).map(move |week| self.cell(year, week, grid_weeks_past))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;

    fn geometry(orientation: Orientation) -> GridGeometry {
        let config = ConfigBuilder::new().orientation(orientation).build().unwrap();
        GridGeometry::new(&config)
    }

    #[test]
    fn test_grid_size_week_major() {
        let g = geometry(Orientation::WeekMajor);
        assert_eq!((g.rows, g.cols), (90, 52));
        assert_eq!(g.step, 15);
        assert_eq!(g.width, 52 * 15 - 2);
        assert_eq!(g.height, 90 * 15 - 2);
        // (2560 - 778 + 36) / 2, 90 + (1514 - 1348) / 2
        assert_eq!(g.origin, Point::new(909, 173));
    }

    #[test]
    fn test_grid_size_year_major() {
        let g = geometry(Orientation::YearMajor);
        assert_eq!((g.rows, g.cols), (52, 90));
        assert_eq!(g.width, 90 * 15 - 2);
        assert_eq!(g.height, 52 * 15 - 2);
        // (2560 - 1348) / 2, 90 + 36 + (1478 - 778) / 2
        assert_eq!(g.origin, Point::new(606, 476));
    }

    #[test]
    fn test_largest_accepted_layout_does_not_overflow() {
        use crate::config::{MAX_GRID_EXTENT, MAX_PIXELS};
        let years = (MAX_GRID_EXTENT / (2 * MAX_PIXELS as i64)) as u32;
        let config = ConfigBuilder::new()
            .resolution(MAX_PIXELS, MAX_PIXELS)
            .cell(MAX_PIXELS, MAX_PIXELS)
            .lifespan_years(years)
            .build()
            .unwrap();
        let g = GridGeometry::new(&config);
        assert_eq!(g.step, 2 * MAX_PIXELS as i32);
        assert_eq!(g.height, years as i32 * g.step - MAX_PIXELS as i32);
        assert!(g.origin.y < 0);
    }

    #[test]
    fn test_size_formula_holds_for_many_layouts() {
        for size in [1u32, 5, 13, 20] {
            for gap in [0u32, 1, 2, 7] {
                let config = ConfigBuilder::new().cell(size, gap).lifespan_years(73).build().unwrap();
                let g = GridGeometry::new(&config);
                let step = (size + gap) as i32;
                assert_eq!(g.width, 52 * step - gap as i32);
                assert_eq!(g.height, 73 * step - gap as i32);
            }
        }
    }

    #[test]
    fn test_overflow_gives_negative_origin() {
        let config = ConfigBuilder::new().resolution(200, 100).build().unwrap();
        let g = GridGeometry::new(&config);
        assert!(g.origin.x < 0);
        assert!(g.origin.y < 0);
    }

    #[test]
    fn test_classification() {
        let g = geometry(Orientation::WeekMajor);
        let past = 1040;
        let cells: Vec<Cell> = g.cells(past).collect();
        assert_eq!(cells.len() as i64, g.capacity());

        let current: Vec<&Cell> = cells.iter().filter(|c| c.status == CellStatus::Current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!((current[0].year, current[0].week), (20, 0));

        for cell in &cells {
            match cell.index.cmp(&past) {
                std::cmp::Ordering::Less => assert_eq!(cell.status, CellStatus::Past),
                std::cmp::Ordering::Equal => assert_eq!(cell.status, CellStatus::Current),
                std::cmp::Ordering::Greater => assert_eq!(cell.status, CellStatus::Future),
            }
        }
    }

    #[test]
    fn test_out_of_range_weeks() {
        let g = geometry(Orientation::YearMajor);
        assert!(g.cells(-5).all(|c| c.status == CellStatus::Future));
        assert!(g.cells(g.capacity()).all(|c| c.status == CellStatus::Past));
        assert!(g.cells(g.capacity() + 100).all(|c| c.status == CellStatus::Past));
    }

    #[test]
    fn test_cell_rectangles_follow_orientation() {
        let g = geometry(Orientation::WeekMajor);
        let c = g.cell(2, 3, 0);
        assert_eq!(c.index, 2 * 52 + 3);
        assert_eq!(c.top_left, Point::new(g.origin.x + 3 * 15, g.origin.y + 2 * 15));
        assert_eq!(c.bottom_right, Point::new(c.top_left.x + 13, c.top_left.y + 13));

        let g = geometry(Orientation::YearMajor);
        let c = g.cell(2, 3, 0);
        assert_eq!(c.top_left, Point::new(g.origin.x + 2 * 15, g.origin.y + 3 * 15));
    }
}
