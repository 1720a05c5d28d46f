use serde_json::Value;

use crate::db::Storage;
use crate::db::models::Car;
use crate::error::ApiError;
use crate::types::cars::{CarListItem, CarOut};

/// How strictly to treat a malformed `feature_names` field. Creation rejects
/// garbage; updates drop it on the floor. Asymmetric on purpose: this
/// mirrors the documented behavior of the system this replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureParse {
    Strict,
    Lenient,
}

/// `feature_names` arrives either as a JSON array of strings or, from legacy
/// form-style clients, as a JSON-encoded string of one.
pub fn parse_feature_names(
    raw: Option<&Value>,
    mode: FeatureParse,
) -> Result<Option<Vec<String>>, ApiError> {
    let Some(value) = raw else {
        return Ok(None);
    };

    let decoded;
    let value = match value {
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(inner) => {
                decoded = inner;
                &decoded
            }
            Err(_) if mode == FeatureParse::Lenient => return Ok(None),
            Err(_) => {
                return Err(ApiError::Validation(
                    "Invalid JSON in feature_names field".to_string(),
                ));
            }
        },
        other => other,
    };

    match value {
        Value::Array(items) => {
            let mut names = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(name) => names.push(name.to_string()),
                    None if mode == FeatureParse::Lenient => return Ok(None),
                    None => {
                        return Err(ApiError::Validation(
                            "feature_names must be a list of strings".to_string(),
                        ));
                    }
                }
            }
            Ok(Some(names))
        }
        _ if mode == FeatureParse::Lenient => Ok(None),
        _ => Err(ApiError::Validation(
            "feature_names must be a list of strings".to_string(),
        )),
    }
}

/// Display name used for denormalized snapshots (bookings, sold records).
pub async fn display_name(store: &Storage, car: &Car) -> Result<String, ApiError> {
    let maker = store
        .get_manufacturer(car.manufacturer_id)
        .await?
        .ok_or_else(|| ApiError::Internal("car references a missing manufacturer".to_string()))?;
    Ok(format!("{} {} ({})", maker.name, car.model_name, car.model_year))
}

/// Assemble the full detail DTO: manufacturer, images and features resolved
/// through their relations.
pub async fn car_out(store: &Storage, car: Car) -> Result<CarOut, ApiError> {
    let manufacturer = store
        .get_manufacturer(car.manufacturer_id)
        .await?
        .ok_or_else(|| ApiError::Internal("car references a missing manufacturer".to_string()))?;
    let images = store.car_images(car.id).await?;
    let features = store.car_features(car.id).await?;
    Ok(CarOut::assemble(car, manufacturer, images, features))
}

/// Assemble the lightweight listing DTO.
pub async fn list_item(store: &Storage, car: Car) -> Result<CarListItem, ApiError> {
    let manufacturer = store
        .get_manufacturer(car.manufacturer_id)
        .await?
        .ok_or_else(|| ApiError::Internal("car references a missing manufacturer".to_string()))?;
    let primary_image = store.primary_image(car.id).await?;
    Ok(CarListItem {
        id: car.id,
        manufacturer_name: manufacturer.name,
        model_name: car.model_name,
        model_year: car.model_year,
        price: car.price,
        body_type: car.body_type,
        fuel_type: car.fuel_type,
        transmission: car.transmission,
        kilometers_driven: car.kilometers_driven,
        is_active: car.is_active,
        primary_image,
    })
}

pub async fn list_items(store: &Storage, cars: Vec<Car>) -> Result<Vec<CarListItem>, ApiError> {
    let mut out = Vec::with_capacity(cars.len());
    for car in cars {
        out.push(list_item(store, car).await?);
    }
    Ok(out)
}
