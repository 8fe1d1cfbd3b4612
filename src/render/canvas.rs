use crate::config::Color;
use crate::grid::Point;
use crate::render::font::FontFace;
use crate::render::surface::{Anchor, HAlign, Surface, VAlign};
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point as EgPoint, Size},
    mono_font::MonoTextStyle,
    pixelcolor::{Rgb888, RgbColor},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable, Pixel,
};
use image::{Rgb, RgbImage};
use rusttype::{point, Scale};
use std::convert::Infallible;

/// 以 `image::RgbImage` 為底的繪圖表面
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Canvas {
            image: RgbImage::from_pixel(width, height, Rgb(background.0)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        Color(self.image.get_pixel(x, y).0)
    }

    /// 0RGB 打包的像素緩衝區（預覽視窗用）
    pub fn to_u32_buffer(&self) -> Vec<u32> {
        self.image
            .pixels()
            .map(|p| Color(p.0).to_u32())
            .collect()
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
    }

    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if !self.in_bounds(x, y) {
            return;
        }
        let a = coverage.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let inv = 1.0 - a;
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        for (d, s) in dst.0.iter_mut().zip(color.0) {
            *d = (s as f32 * a + *d as f32 * inv).round() as u8;
        }
    }

    fn draw_truetype(&mut self, top_left: Point, text: &str, color: Color, face: &FontFace) {
        let FontFace::TrueType { font, px, .. } = face else {
            return;
        };
        let scale = Scale::uniform(*px);
        let v_metrics = font.v_metrics(scale);
        let origin = point(top_left.x as f32, top_left.y as f32 + v_metrics.ascent);
        for glyph in font.layout(text, scale, origin) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    self.blend(gx as i32 + bb.min.x, gy as i32 + bb.min.y, color, v);
                });
            }
        }
    }

    fn draw_builtin(&mut self, position: Point, text: &str, color: Color, face: &FontFace, anchor: Anchor) {
        let FontFace::Builtin(mono) = face else {
            return;
        };
        let character_style = MonoTextStyle::new(mono, Rgb888::new(color.r(), color.g(), color.b()));
        let alignment = match anchor.h {
            HAlign::Left => Alignment::Left,
            HAlign::Center => Alignment::Center,
            HAlign::Right => Alignment::Right,
        };
        let baseline = match anchor.v {
            VAlign::Top => Baseline::Top,
            VAlign::Middle => Baseline::Middle,
            VAlign::Bottom => Baseline::Bottom,
        };
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build();
        let position = EgPoint::new(position.x, position.y);
        let _ = Text::with_text_style(text, position, character_style, text_style).draw(self);
    }
}

impl Surface for Canvas {
    fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    fn fill_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Color) {
        let x0 = top_left.x.max(0);
        let y0 = top_left.y.max(0);
        let x1 = bottom_right.x.min(self.image.width() as i32);
        let y1 = bottom_right.y.min(self.image.height() as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x as u32, y as u32, Rgb(color.0));
            }
        }
    }

    fn draw_text(&mut self, position: Point, text: &str, color: Color, font: &FontFace, anchor: Anchor) {
        if text.is_empty() {
            return;
        }
        match font {
            FontFace::TrueType { .. } => {
                let (width, height) = font.measure(text);
                let top_left = anchor.top_left(position, width, height);
                self.draw_truetype(top_left, text, color, font);
            }
            FontFace::Builtin(_) => self.draw_builtin(position, text, color, font, anchor),
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if self.in_bounds(p.x, p.y) {
                self.image
                    .put_pixel(p.x as u32, p.y as u32, Rgb([c.r(), c.g(), c.b()]));
            }
        }
        Ok(())
    }
}
