// 日期計算：已過週數與對齊生日的網格週數

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};

pub const WEEKS_PER_YEAR: i64 = 52;
const DAYS_PER_WEEK: i64 = 7;

/// 某一年的生日；2/29 出生在非閏年改用 2/28
pub fn anniversary(birthdate: NaiveDate, year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthdate.month(), birthdate.day())
        .or_else(|| {
            if birthdate.month() == 2 && birthdate.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
        .ok_or_else(|| Error::Date(format!("{} 年無法構成 {} 的週年日", year, birthdate)))
}

/// 以「今天」與生日計算出的時間位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeClock {
    pub birthdate: NaiveDate,
    pub today: NaiveDate,
    /// 以固定 7 天累計的週數，用於統計
    pub weeks_lived: i64,
    /// 已過的完整週年數
    pub age_years: i64,
    /// 自上次生日起的週數 (0..=51)
    pub week_of_year: i64,
    /// 對齊生日的週索引，用於網格分類
    pub grid_weeks_past: i64,
}

impl LifeClock {
    pub fn new(birthdate: NaiveDate, today: NaiveDate) -> Result<Self> {
        let weeks_lived = (today - birthdate).num_days().div_euclid(DAYS_PER_WEEK);

        let mut age_years = (today.year() - birthdate.year()) as i64;
        if today < anniversary(birthdate, today.year())? {
            age_years -= 1;
        }
        let last_birthday = anniversary(birthdate, birthdate.year() + age_years as i32)?;

        // 生日後第 364、365 天仍算在同一年的最後一格
        let week_of_year = (today - last_birthday)
            .num_days()
            .div_euclid(DAYS_PER_WEEK)
            .min(WEEKS_PER_YEAR - 1);

        Ok(LifeClock {
            birthdate,
            today,
            weeks_lived,
            age_years,
            week_of_year,
            grid_weeks_past: age_years * WEEKS_PER_YEAR + week_of_year,
        })
    }

    /// 以預期壽命計算統計數字
    pub fn stats(&self, lifespan_years: u32) -> LifeStats {
        LifeStats::new(self.weeks_lived, lifespan_years)
    }
}

/// 統計行使用的數字
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeStats {
    pub lifespan_years: u32,
    pub total_weeks: i64,
    pub weeks_lived: i64,
    pub remaining: i64,
    pub percent: f64,
}

impl LifeStats {
    /// 顯示值限制在 [0, total_weeks]
    pub fn new(weeks_lived: i64, lifespan_years: u32) -> Self {
        let total_weeks = lifespan_years as i64 * WEEKS_PER_YEAR;
        if weeks_lived < 0 || weeks_lived > total_weeks {
            log::warn!(
                "已過週數 {} 超出範圍 [0, {}]，統計數字已截斷",
                weeks_lived,
                total_weeks
            );
        }
        let weeks_lived = weeks_lived.clamp(0, total_weeks);
        let percent = if total_weeks > 0 {
            weeks_lived as f64 / total_weeks as f64 * 100.0
        } else {
            0.0
        };
        LifeStats {
            lifespan_years,
            total_weeks,
            weeks_lived,
            remaining: total_weeks - weeks_lived,
            percent,
        }
    }

    /// 畫在網格下方的統計行
    pub fn caption(&self) -> String {
        format!(
            "{} weeks lived  ·  {} remaining  ·  {:.1}% of a {}-year life",
            group_thousands(self.weeks_lived),
            group_thousands(self.remaining),
            self.percent,
            self.lifespan_years
        )
    }

    /// 終端輸出的摘要
    pub fn summary(&self) -> String {
        format!(
            "{} weeks lived | {} remaining | {:.1}%",
            self.weeks_lived, self.remaining, self.percent
        )
    }
}

/// 以逗號分隔千位
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
