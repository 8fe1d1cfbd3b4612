// External interface module

#[cfg(feature = "preview")]
pub mod video;
pub mod wallpaper;

pub use wallpaper::{AppleScript, WallpaperOutcome, WallpaperSetter, WallpaperStrategy};
