use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// 24 位元 RGB 顏色，由 `#RRGGBB` 字串解析
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b])
    }

    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }

    /// minifb 使用的 0RGB 打包格式
    pub fn to_u32(self) -> u32 {
        ((self.r() as u32) << 16) | ((self.g() as u32) << 8) | self.b() as u32
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex_part = s.trim().trim_start_matches('#');
        if hex_part.len() != 6 {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let bytes = hex::decode(hex_part).map_err(|_| Error::InvalidColor(s.to_string()))?;
        Ok(Color([bytes[0], bytes[1], bytes[2]]))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode_upper(self.0))
    }
}

/// 調色板：背景、已過、未來、本週、文字
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub background: Color,
    pub past: Color,
    pub future: Color,
    pub current: Color,
    pub text: Color,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        // 深色主題
        PaletteConfig {
            background: Color::rgb(0x11, 0x11, 0x11),
            past: Color::rgb(0xDE, 0xDE, 0xDE),
            future: Color::rgb(0x25, 0x25, 0x25),
            current: Color::rgb(0xFF, 0x6B, 0x35),
            text: Color::rgb(0x4A, 0x4A, 0x4A),
        }
    }
}
