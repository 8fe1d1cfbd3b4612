use crate::config::Color;
use crate::grid::Point;
use crate::render::font::FontFace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// 文字外框上對齊到指定座標的那一點
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub h: HAlign,
    pub v: VAlign,
}

impl Anchor {
    pub const LEFT_TOP: Anchor = Anchor::new(HAlign::Left, VAlign::Top);
    pub const CENTER_MIDDLE: Anchor = Anchor::new(HAlign::Center, VAlign::Middle);
    pub const RIGHT_MIDDLE: Anchor = Anchor::new(HAlign::Right, VAlign::Middle);
    pub const CENTER_BOTTOM: Anchor = Anchor::new(HAlign::Center, VAlign::Bottom);

    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Anchor { h, v }
    }

    /// 給定外框大小，求左上角位置
    pub fn top_left(self, position: Point, width: i32, height: i32) -> Point {
        let x = match self.h {
            HAlign::Left => position.x,
            HAlign::Center => position.x - width / 2,
            HAlign::Right => position.x - width,
        };
        let y = match self.v {
            VAlign::Top => position.y,
            VAlign::Middle => position.y - height / 2,
            VAlign::Bottom => position.y - height,
        };
        Point::new(x, y)
    }
}

/// 2D 繪圖表面，Renderer 只透過這個介面下指令
pub trait Surface {
    fn dimensions(&self) -> (u32, u32);

    /// 填滿 [top_left, bottom_right) 的矩形，超出表面的部分裁掉
    fn fill_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Color);

    fn draw_text(&mut self, position: Point, text: &str, color: Color, font: &FontFace, anchor: Anchor);
}
