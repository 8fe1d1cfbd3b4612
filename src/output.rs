// 輸出：將畫布寫入檔案

use crate::error::Result;
use crate::render::Canvas;
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// 此建置啟用的編碼器
const WRITABLE_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Bmp];

/// 依副檔名決定格式；無法編碼的格式一律改寫 PNG
pub fn output_format(path: &Path) -> ImageFormat {
    match ImageFormat::from_path(path) {
        Ok(format) if WRITABLE_FORMATS.contains(&format) => format,
        Ok(format) => {
            log::warn!("不支援輸出 {:?}，改以 PNG 寫入 {}", format, path.display());
            ImageFormat::Png
        }
        Err(_) => ImageFormat::Png,
    }
}

/// 寫入影像；先建立父目錄並刪除同名舊檔，回傳絕對路徑
///
/// 影像先在記憶體中編碼完成才刪除舊檔，編碼失敗時舊檔保持不變。
pub fn save_image(canvas: &Canvas, path: &Path) -> Result<PathBuf> {
    let format = output_format(path);
    let mut encoded = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(canvas.image().clone()).write_to(&mut encoded, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::info!("建立輸出目錄 {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    if path.exists() {
        log::debug!("覆寫既有檔案 {}", path.display());
        fs::remove_file(path)?;
    }

    fs::write(path, encoded.into_inner())?;
    log::info!(
        "已寫入 {}x{} {:?} 影像 {}",
        canvas.width(),
        canvas.height(),
        format,
        path.display()
    );

    Ok(fs::canonicalize(path)?)
}
