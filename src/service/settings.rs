use crate::db::Storage;
use crate::db::models::DealershipSettings;
use crate::error::ApiError;
use crate::types::settings::SettingsPatch;

pub async fn get_settings(store: &Storage) -> Result<DealershipSettings, ApiError> {
    store.load_or_init_settings().await
}

/// Apply a partial update on top of the singleton row. Flat fields and the
/// nested `business_hours` object are both honored; nested wins when both
/// name the same column.
pub async fn update_settings(
    store: &Storage,
    patch: SettingsPatch,
) -> Result<DealershipSettings, ApiError> {
    let mut settings = store.load_or_init_settings().await?;

    if let Some(address) = patch.address {
        settings.address = address;
    }
    if let Some(phone) = patch.phone {
        settings.phone = phone;
    }
    if let Some(email) = patch.email {
        settings.email = email;
    }
    if let Some(mon_sat) = patch.business_hours_mon_sat {
        settings.business_hours_mon_sat = mon_sat;
    }
    if let Some(sunday) = patch.business_hours_sunday {
        settings.business_hours_sunday = sunday;
    }
    if let Some(hours) = patch.business_hours {
        if let Some(mon_sat) = hours.mon_sat {
            settings.business_hours_mon_sat = mon_sat;
        }
        if let Some(sunday) = hours.sunday {
            settings.business_hours_sunday = sunday;
        }
    }

    store.update_settings(&settings).await
}
