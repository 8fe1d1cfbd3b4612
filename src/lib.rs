// 生命週曆產生器庫
pub mod calendar;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod interface;
pub mod output;
pub mod render;
pub mod utils;

pub use crate::calendar::{LifeClock, LifeStats};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::generator::{Generator, Report};
pub use crate::grid::{Cell, CellStatus, GridGeometry};
pub use crate::render::{Canvas, Renderer};
