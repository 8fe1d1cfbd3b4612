use embedded_graphics::mono_font::{iso_8859_1, MonoFont};
use rusttype::{point, Font, Scale};
use std::cell::OnceCell;
use std::fmt::{self, Debug};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 已解析、可直接繪製的字型
#[derive(Clone)]
pub enum FontFace {
    TrueType {
        font: Arc<Font<'static>>,
        px: f32,
        source: PathBuf,
    },
    /// 內建點陣字型，任何環境都可用
    Builtin(&'static MonoFont<'static>),
}

impl FontFace {
    /// 回傳文字外框 (寬, 高)
    pub fn measure(&self, text: &str) -> (i32, i32) {
        match self {
            FontFace::TrueType { font, px, .. } => {
                let scale = Scale::uniform(*px);
                let v_metrics = font.v_metrics(scale);
                let height = (v_metrics.ascent - v_metrics.descent).ceil().max(1.0) as i32;
                let mut width: f32 = 0.0;
                for glyph in font.layout(text, scale, point(0.0, v_metrics.ascent)) {
                    let advance = glyph.unpositioned().h_metrics().advance_width;
                    width = width.max(glyph.position().x + advance);
                }
                (width.ceil() as i32, height)
            }
            FontFace::Builtin(mono) => {
                let advance = mono.character_size.width + mono.character_spacing;
                let count = text.chars().count() as u32;
                let width = (count * advance).saturating_sub(mono.character_spacing);
                (width as i32, mono.character_size.height as i32)
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Builtin(_))
    }
}

impl Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFace::TrueType { px, source, .. } => f
                .debug_struct("TrueType")
                .field("px", px)
                .field("source", source)
                .finish(),
            FontFace::Builtin(mono) => f
                .debug_struct("Builtin")
                .field("size", &mono.character_size)
                .finish(),
        }
    }
}

/// 依尺寸挑選內建字型
pub fn builtin_font(px: f32) -> &'static MonoFont<'static> {
    if px <= 11.0 {
        &iso_8859_1::FONT_6X10
    } else if px <= 14.0 {
        &iso_8859_1::FONT_7X13
    } else {
        &iso_8859_1::FONT_9X15
    }
}

/// 依序嘗試系統字型檔，全部失敗時使用內建字型
pub struct FontLoader {
    candidates: Vec<PathBuf>,
    resolved: OnceCell<Option<(PathBuf, Arc<Font<'static>>)>>,
}

impl FontLoader {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        FontLoader {
            candidates,
            resolved: OnceCell::new(),
        }
    }

    fn try_load(path: &Path) -> Option<Font<'static>> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("字型 {} 無法讀取: {}", path.display(), e);
                return None;
            }
        };
        let font = Font::try_from_vec(bytes);
        if font.is_none() {
            log::debug!("字型 {} 無法解析", path.display());
        }
        font
    }

    fn resolve(&self) -> Option<&(PathBuf, Arc<Font<'static>>)> {
        self.resolved
            .get_or_init(|| {
                let found = self.candidates.iter().find_map(|path| {
                    Self::try_load(path).map(|font| (path.clone(), Arc::new(font)))
                });
                match &found {
                    Some((path, _)) => log::info!("使用字型 {}", path.display()),
                    None => log::debug!("沒有可用的系統字型，改用內建點陣字型"),
                }
                found
            })
            .as_ref()
    }

    /// 取得指定像素大小的字型，永不失敗
    pub fn load(&self, px: f32) -> FontFace {
        match self.resolve() {
            Some((source, font)) => FontFace::TrueType {
                font: Arc::clone(font),
                px,
                source: source.clone(),
            },
            None => FontFace::Builtin(builtin_font(px)),
        }
    }
}
