use crate::calendar::{LifeClock, LifeStats};
use crate::config::Config;
use crate::error::Result;
use crate::interface::{WallpaperOutcome, WallpaperSetter};
use crate::output;
use crate::render::{Canvas, Renderer};
use chrono::NaiveDate;
use log::info;
use std::path::PathBuf;

/// 單次產生的結果
#[derive(Debug, Clone)]
pub struct Report {
    pub path: PathBuf,
    pub stats: LifeStats,
    pub clock: LifeClock,
}

/// 生命週曆產生器：計算、繪製、輸出
pub struct Generator<'a> {
    config: &'a Config,
    renderer: Renderer<'a>,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Generator {
            config,
            renderer: Renderer::new(config),
        }
    }

    pub fn with_renderer(config: &'a Config, renderer: Renderer<'a>) -> Self {
        Generator { config, renderer }
    }

    pub fn clock(&self, today: NaiveDate) -> Result<LifeClock> {
        LifeClock::new(self.config.profile.birthdate, today)
    }

    /// 只繪製，不寫檔
    pub fn render(&self, today: NaiveDate) -> Result<(Canvas, LifeClock)> {
        let clock = self.clock(today)?;
        info!(
            "生日 {}，今天 {}：已過 {} 週，網格週數 {}",
            clock.birthdate, clock.today, clock.weeks_lived, clock.grid_weeks_past
        );
        let geometry = self.renderer.geometry();
        info!(
            "網格 {}x{}，{}x{} 像素，原點 ({}, {})",
            geometry.cols, geometry.rows, geometry.width, geometry.height, geometry.origin.x, geometry.origin.y
        );
        Ok((self.renderer.render_canvas(&clock), clock))
    }

    /// 繪製並寫入設定的輸出路徑
    pub fn generate(&self, today: NaiveDate) -> Result<Report> {
        let (canvas, clock) = self.render(today)?;
        let path = output::save_image(&canvas, &self.config.output_path())?;
        Ok(Report {
            path,
            stats: clock.stats(self.config.profile.lifespan_years),
            clock,
        })
    }

    /// 設定背景；未啟用時回傳 None
    pub fn apply_wallpaper(&self, report: &Report, setter: &WallpaperSetter) -> Option<WallpaperOutcome> {
        if !self.config.system.set_wallpaper {
            return None;
        }
        Some(setter.set(&report.path))
    }
}
