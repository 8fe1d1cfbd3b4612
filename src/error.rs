use std::io;
use thiserror::Error;

/// 生命週曆產生器的錯誤類型
#[derive(Error, Debug)]
pub enum Error {
    /// IO 錯誤
    #[error("IO 錯誤: {0}")]
    Io(#[from] io::Error),

    /// 影像編碼錯誤
    #[error("影像錯誤: {0}")]
    Image(#[from] image::ImageError),

    /// 設定檔解析錯誤
    #[error("設定檔解析錯誤: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// 設定值不合法
    #[error("設定錯誤: {0}")]
    InvalidConfig(String),

    /// 無效的十六進位顏色
    #[error("無效的顏色: {0}")]
    InvalidColor(String),

    /// 預覽視窗錯誤
    #[error("預覽視窗錯誤: {0}")]
    Preview(String),

    /// 日期無法構成
    #[error("日期錯誤: {0}")]
    Date(String),

    /// 桌面背景設定失敗
    #[error("桌面背景設定失敗: {0}")]
    Wallpaper(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}

/// 產生器結果類型
pub type Result<T> = std::result::Result<T, Error>;
