// 預覽視窗：以 minifb 顯示算好的畫布，按 Escape 或關閉視窗結束

use crate::error::{Error, Result};
use crate::render::Canvas;
use minifb::{Key, ScaleMode, Window, WindowOptions};

pub fn preview(canvas: &Canvas, title: &str) -> Result<()> {
    let width = canvas.width() as usize;
    let height = canvas.height() as usize;
    let buffer = canvas.to_u32_buffer();

    let options = WindowOptions {
        resize: true,
        scale_mode: ScaleMode::AspectRatioStretch,
        ..WindowOptions::default()
    };
    let mut window = Window::new(title, width, height, options)
        .map_err(|e| Error::Preview(e.to_string()))?;
    window.limit_update_rate(Some(std::time::Duration::from_millis(50)));

    log::info!("預覽視窗已開啟 ({}x{})", width, height);
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|e| Error::Preview(e.to_string()))?;
    }
    Ok(())
}
