use crate::error::{Error, Result};
use std::fmt::{self, Debug};
use std::path::Path;
use std::process::Command;

/// 一種設定桌面背景的方式
pub trait WallpaperStrategy: Debug {
    fn name(&self) -> &str;

    /// 失敗時回傳 `Error::Wallpaper`
    fn apply(&self, image: &Path) -> Result<()>;
}

/// 透過 `osascript -e <script>` 設定背景
pub struct AppleScript {
    name: &'static str,
    template: &'static str,
}

impl AppleScript {
    /// System Events：套用到每一個桌面
    pub fn system_events() -> Self {
        AppleScript {
            name: "System Events",
            template: "tell application \"System Events\" to tell every desktop to set picture to \"{path}\"",
        }
    }

    /// Finder：舊版 macOS 的做法
    pub fn finder() -> Self {
        AppleScript {
            name: "Finder",
            template: "tell application \"Finder\" to set desktop picture to POSIX file \"{path}\"",
        }
    }

    pub fn script(&self, image: &Path) -> String {
        let escaped = image.display().to_string().replace('\\', "\\\\").replace('"', "\\\"");
        self.template.replace("{path}", &escaped)
    }
}

impl Debug for AppleScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppleScript").field("name", &self.name).finish()
    }
}

impl WallpaperStrategy for AppleScript {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, image: &Path) -> Result<()> {
        let output = Command::new("osascript")
            .arg("-e")
            .arg(self.script(image))
            .output()
            .map_err(|e| Error::Wallpaper(format!("無法執行 osascript: {}", e)))?;
        if output.status.success() {
            Ok(())
        } else {
            Err(Error::Wallpaper(format!(
                "osascript 結束碼 {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

/// 設定背景的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallpaperOutcome {
    /// 成功的方式名稱
    Applied(String),
    AllFailed,
}

/// 依序嘗試各種方式，第一個成功即停止
#[derive(Debug)]
pub struct WallpaperSetter {
    strategies: Vec<Box<dyn WallpaperStrategy>>,
}

impl WallpaperSetter {
    pub fn new(strategies: Vec<Box<dyn WallpaperStrategy>>) -> Self {
        WallpaperSetter { strategies }
    }

    pub fn set(&self, image: &Path) -> WallpaperOutcome {
        for strategy in &self.strategies {
            match strategy.apply(image) {
                Ok(()) => {
                    log::info!("桌面背景已透過 {} 設定", strategy.name());
                    return WallpaperOutcome::Applied(strategy.name().to_string());
                }
                Err(err) => log::warn!("{} 設定背景失敗: {}", strategy.name(), err),
            }
        }
        WallpaperOutcome::AllFailed
    }
}

impl Default for WallpaperSetter {
    fn default() -> Self {
        WallpaperSetter::new(vec![
            Box::new(AppleScript::system_events()),
            Box::new(AppleScript::finder()),
        ])
    }
}
