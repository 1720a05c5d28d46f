use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::db::Storage;
use crate::db::models::Car;
use crate::error::ApiError;

/// How many related cars a detail view carries by default.
pub const RELATED_LIMIT: i64 = 6;

/// Price band for related-car matching: [price x 0.8, price x 1.2].
pub fn price_band(price: Decimal) -> (Decimal, Decimal) {
    let lo = price * Decimal::new(8, 1);
    let hi = price * Decimal::new(12, 1);
    (lo, hi)
}

/// Tiered relaxation, each tier in its own random order:
///
/// 1. same manufacturer AND body type; short-circuits when it alone fills
///    the limit
/// 2. same manufacturer OR body type, within the price band
/// 3. top-up with any active in-band car not already picked
///
/// Returns fewer than `limit` rows when inventory is short; never pads and
/// never errors on a sparse lot.
pub async fn related_cars(store: &Storage, car: &Car, limit: i64) -> Result<Vec<Car>, ApiError> {
    let tier1 = store.related_same_make_and_body(car, limit).await?;
    if tier1.len() as i64 >= limit {
        return Ok(tier1);
    }

    let (lo, hi) = price_band(car.price);
    let band_lo = lo.to_f64().unwrap_or(0.0);
    let band_hi = hi.to_f64().unwrap_or(f64::MAX);

    let mut picks = store
        .related_make_or_body_in_band(car, band_lo, band_hi, limit)
        .await?;

    let deficit = limit - picks.len() as i64;
    if deficit > 0 {
        let exclude: Vec<i64> = picks.iter().map(|c| c.id).collect();
        let extra = store
            .related_in_band(car, band_lo, band_hi, &exclude, deficit)
            .await?;
        picks.extend(extra);
    }

    Ok(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn price_band_is_exact() {
        let (lo, hi) = price_band(Decimal::from_str("10000.00").unwrap());
        assert_eq!(lo, Decimal::from_str("8000.000").unwrap());
        assert_eq!(hi, Decimal::from_str("12000.000").unwrap());
    }

    #[test]
    fn price_band_no_float_drift() {
        // 0.1 is not representable in binary floating point; the band must
        // still come out exact.
        let (lo, hi) = price_band(Decimal::from_str("333333.33").unwrap());
        assert_eq!(lo, Decimal::from_str("266666.664").unwrap());
        assert_eq!(hi, Decimal::from_str("399999.996").unwrap());
    }
}
