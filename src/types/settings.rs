use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::db::models::DealershipSettings;

#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessHours {
    pub mon_sat: String,
    pub sunday: String,
}

/// Settings as exposed over the API: the two business-hours columns combine
/// into one two-key object.
#[derive(Debug, Serialize)]
pub struct SettingsOut {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub business_hours: BusinessHours,
    pub updated_at: DateTime<Utc>,
}

impl From<DealershipSettings> for SettingsOut {
    fn from(s: DealershipSettings) -> Self {
        Self {
            address: s.address,
            phone: s.phone,
            email: s.email,
            business_hours: BusinessHours {
                mon_sat: s.business_hours_mon_sat,
                sunday: s.business_hours_sunday,
            },
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BusinessHoursPatch {
    pub mon_sat: Option<String>,
    pub sunday: Option<String>,
}

/// Partial settings update; accepts the flat columns and/or the nested
/// `business_hours` object.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsPatch {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub business_hours_mon_sat: Option<String>,
    pub business_hours_sunday: Option<String>,
    pub business_hours: Option<BusinessHoursPatch>,
}

#[derive(Debug, Deserialize)]
pub struct RecentlySoldCreate {
    pub car_name: String,
    pub price: String,
    pub sold_date: NaiveDate,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Deserialize)]
pub struct SoldTransition {
    pub car_id: i64,
    pub sold_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SoldListQuery {
    pub limit: Option<i64>,
}
