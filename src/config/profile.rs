use chrono::NaiveDate;
use serde::Deserialize;

/// 個人資料：生日與預期壽命
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    pub birthdate: NaiveDate,
    pub lifespan_years: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            birthdate: NaiveDate::from_ymd_opt(2005, 4, 6).unwrap_or_default(),
            lifespan_years: 90,
        }
    }
}
