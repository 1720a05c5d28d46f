use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::models::{
    BodyType, Car, CarFeature, CarImage, CarPatch, Condition, FuelType, Manufacturer, NewCar,
    Ownership, Transmission,
};

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Query filters
// ---------------------------------------------------------------------------

/// Raw listing filters as they arrive on the query string.
#[derive(Debug, Default, Deserialize)]
pub struct CarFilterQuery {
    pub manufacturer: Option<i64>,
    pub body_type: Option<BodyType>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// Storage-level filter. Price bounds are approximated to REAL because the
/// exact decimal column is compared via CAST at query time.
#[derive(Debug, Default)]
pub struct CarFilter {
    pub manufacturer: Option<i64>,
    pub body_type: Option<BodyType>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub is_active: Option<bool>,
}

impl CarFilterQuery {
    pub fn into_filter(self) -> CarFilter {
        CarFilter {
            manufacturer: self.manufacturer,
            body_type: self.body_type,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            min_price: self.min_price.and_then(|d| d.to_f64()),
            max_price: self.max_price.and_then(|d| d.to_f64()),
            is_active: self.is_active,
        }
    }
}

// ---------------------------------------------------------------------------
// Write payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CarPayload {
    pub manufacturer_id: i64,
    pub body_type: BodyType,
    pub model_name: String,
    #[serde(default)]
    pub variant: String,
    pub model_year: i64,
    pub registration_year: i64,
    pub ownership: Ownership,
    pub kilometers_driven: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub engine_cc: i64,
    pub mileage: Decimal,
    pub color: String,
    pub price: Decimal,
    #[serde(default = "default_true")]
    pub is_negotiable: bool,
    #[serde(default)]
    pub insurance_valid_till: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub rc_available: bool,
    #[serde(default = "default_true")]
    pub puc_available: bool,
    #[serde(default = "default_true")]
    pub loan_clearance: bool,
    pub condition: Condition,
    #[serde(default)]
    pub accident_history: bool,
    #[serde(default = "default_true")]
    pub service_history: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Either a JSON array of names or (for legacy multipart-style clients)
    /// a JSON-encoded string of one.
    #[serde(default)]
    pub feature_names: Option<Value>,
    /// Image URLs; the first one becomes the primary image.
    #[serde(default)]
    pub images: Vec<String>,
}

impl CarPayload {
    pub fn to_new_car(&self) -> NewCar {
        NewCar {
            manufacturer_id: self.manufacturer_id,
            body_type: self.body_type,
            model_name: self.model_name.clone(),
            variant: self.variant.clone(),
            model_year: self.model_year,
            registration_year: self.registration_year,
            ownership: self.ownership,
            kilometers_driven: self.kilometers_driven,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            engine_cc: self.engine_cc,
            mileage: self.mileage,
            color: self.color.clone(),
            price: self.price,
            is_negotiable: self.is_negotiable,
            insurance_valid_till: self.insurance_valid_till,
            rc_available: self.rc_available,
            puc_available: self.puc_available,
            loan_clearance: self.loan_clearance,
            condition: self.condition,
            accident_history: self.accident_history,
            service_history: self.service_history,
            description: self.description.clone(),
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CarPatchPayload {
    pub manufacturer_id: Option<i64>,
    pub body_type: Option<BodyType>,
    pub model_name: Option<String>,
    pub variant: Option<String>,
    pub model_year: Option<i64>,
    pub registration_year: Option<i64>,
    pub ownership: Option<Ownership>,
    pub kilometers_driven: Option<i64>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub engine_cc: Option<i64>,
    pub mileage: Option<Decimal>,
    pub color: Option<String>,
    pub price: Option<Decimal>,
    pub is_negotiable: Option<bool>,
    pub insurance_valid_till: Option<NaiveDate>,
    pub rc_available: Option<bool>,
    pub puc_available: Option<bool>,
    pub loan_clearance: Option<bool>,
    pub condition: Option<Condition>,
    pub accident_history: Option<bool>,
    pub service_history: Option<bool>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default)]
    pub feature_names: Option<Value>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl CarPatchPayload {
    pub fn to_patch(&self) -> CarPatch {
        CarPatch {
            manufacturer_id: self.manufacturer_id,
            body_type: self.body_type,
            model_name: self.model_name.clone(),
            variant: self.variant.clone(),
            model_year: self.model_year,
            registration_year: self.registration_year,
            ownership: self.ownership,
            kilometers_driven: self.kilometers_driven,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            engine_cc: self.engine_cc,
            mileage: self.mileage,
            color: self.color.clone(),
            price: self.price,
            is_negotiable: self.is_negotiable,
            insurance_valid_till: self.insurance_valid_till.map(Some),
            rc_available: self.rc_available,
            puc_available: self.puc_available,
            loan_clearance: self.loan_clearance,
            condition: self.condition,
            accident_history: self.accident_history,
            service_history: self.service_history,
            description: self.description.clone(),
            is_active: self.is_active,
        }
    }
}

// ---------------------------------------------------------------------------
// Read DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CarImageOut {
    pub id: i64,
    pub image: String,
    pub is_primary: bool,
}

impl From<CarImage> for CarImageOut {
    fn from(img: CarImage) -> Self {
        Self {
            id: img.id,
            image: img.image,
            is_primary: img.is_primary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CarFeatureOut {
    pub id: i64,
    pub name: String,
}

impl From<CarFeature> for CarFeatureOut {
    fn from(f: CarFeature) -> Self {
        Self {
            id: f.id,
            name: f.name,
        }
    }
}

/// Full car representation for the detail and write endpoints.
#[derive(Debug, Serialize)]
pub struct CarOut {
    pub id: i64,
    pub manufacturer_details: Manufacturer,
    pub body_type: BodyType,
    pub model_name: String,
    pub variant: String,
    pub model_year: i64,
    pub registration_year: i64,
    pub ownership: Ownership,
    pub kilometers_driven: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub engine_cc: i64,
    pub mileage: Decimal,
    pub color: String,
    pub price: Decimal,
    pub is_negotiable: bool,
    pub insurance_valid_till: Option<NaiveDate>,
    pub rc_available: bool,
    pub puc_available: bool,
    pub loan_clearance: bool,
    pub condition: Condition,
    pub accident_history: bool,
    pub service_history: bool,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub images: Vec<CarImageOut>,
    pub features: Vec<CarFeatureOut>,
}

impl CarOut {
    pub fn assemble(
        car: Car,
        manufacturer: Manufacturer,
        images: Vec<CarImage>,
        features: Vec<CarFeature>,
    ) -> Self {
        Self {
            id: car.id,
            manufacturer_details: manufacturer,
            body_type: car.body_type,
            model_name: car.model_name,
            variant: car.variant,
            model_year: car.model_year,
            registration_year: car.registration_year,
            ownership: car.ownership,
            kilometers_driven: car.kilometers_driven,
            fuel_type: car.fuel_type,
            transmission: car.transmission,
            engine_cc: car.engine_cc,
            mileage: car.mileage,
            color: car.color,
            price: car.price,
            is_negotiable: car.is_negotiable,
            insurance_valid_till: car.insurance_valid_till,
            rc_available: car.rc_available,
            puc_available: car.puc_available,
            loan_clearance: car.loan_clearance,
            condition: car.condition,
            accident_history: car.accident_history,
            service_history: car.service_history,
            description: car.description,
            is_active: car.is_active,
            created_at: car.created_at,
            images: images.into_iter().map(Into::into).collect(),
            features: features.into_iter().map(Into::into).collect(),
        }
    }
}

/// Lightweight representation for listings and related-car blocks.
#[derive(Debug, Serialize)]
pub struct CarListItem {
    pub id: i64,
    pub manufacturer_name: String,
    pub model_name: String,
    pub model_year: i64,
    pub price: Decimal,
    pub body_type: BodyType,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub kilometers_driven: i64,
    pub is_active: bool,
    pub primary_image: Option<String>,
}

/// Detail response: the full car plus its related-cars block.
#[derive(Debug, Serialize)]
pub struct CarDetailOut {
    #[serde(flatten)]
    pub car: CarOut,
    pub related_cars: Vec<CarListItem>,
}

#[derive(Debug, Deserialize)]
pub struct ManufacturerPayload {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ManufacturerPatch {
    pub name: Option<String>,
    pub country: Option<String>,
}
