use chrono::{NaiveDate, Utc};
use sqlx::QueryBuilder;

use crate::db::models::{
    Car, CarFeature, CarImage, CarPatch, Manufacturer, NewCar, RecentlySold,
};
use crate::db::store::Storage;
use crate::error::ApiError;
use crate::types::cars::CarFilter;

const INSERT_CAR: &str = r#"
INSERT INTO cars (
    manufacturer_id, body_type, model_name, variant, model_year,
    registration_year, ownership, kilometers_driven, fuel_type, transmission,
    engine_cc, mileage, color, price, is_negotiable, insurance_valid_till,
    rc_available, puc_available, loan_clearance, condition, accident_history,
    service_history, description, is_active, created_at
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const UPDATE_CAR: &str = r#"
UPDATE cars SET
    manufacturer_id = ?, body_type = ?, model_name = ?, variant = ?,
    model_year = ?, registration_year = ?, ownership = ?, kilometers_driven = ?,
    fuel_type = ?, transmission = ?, engine_cc = ?, mileage = ?, color = ?,
    price = ?, is_negotiable = ?, insurance_valid_till = ?, rc_available = ?,
    puc_available = ?, loan_clearance = ?, condition = ?, accident_history = ?,
    service_history = ?, description = ?, is_active = ?
WHERE id = ?
"#;

impl Storage {
    // -- manufacturers ------------------------------------------------------

    pub async fn list_manufacturers(&self) -> Result<Vec<Manufacturer>, ApiError> {
        let rows = sqlx::query_as::<_, Manufacturer>(
            "SELECT id, name, country FROM manufacturers ORDER BY name",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub async fn get_manufacturer(&self, id: i64) -> Result<Option<Manufacturer>, ApiError> {
        let row = sqlx::query_as::<_, Manufacturer>(
            "SELECT id, name, country FROM manufacturers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }

    pub async fn create_manufacturer(
        &self,
        name: &str,
        country: &str,
    ) -> Result<Manufacturer, ApiError> {
        let res = sqlx::query("INSERT INTO manufacturers (name, country) VALUES (?, ?)")
            .bind(name)
            .bind(country)
            .execute(self.pool())
            .await
            .map_err(|e| ApiError::on_unique(e, "A manufacturer with this name already exists"))?;
        Ok(Manufacturer {
            id: res.last_insert_rowid(),
            name: name.to_string(),
            country: country.to_string(),
        })
    }

    pub async fn update_manufacturer(
        &self,
        id: i64,
        name: Option<&str>,
        country: Option<&str>,
    ) -> Result<Option<Manufacturer>, ApiError> {
        let Some(current) = self.get_manufacturer(id).await? else {
            return Ok(None);
        };
        let name = name.unwrap_or(&current.name).to_string();
        let country = country.unwrap_or(&current.country).to_string();
        sqlx::query("UPDATE manufacturers SET name = ?, country = ? WHERE id = ?")
            .bind(&name)
            .bind(&country)
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| ApiError::on_unique(e, "A manufacturer with this name already exists"))?;
        Ok(Some(Manufacturer { id, name, country }))
    }

    pub async fn delete_manufacturer(&self, id: i64) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM manufacturers WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(res.rows_affected() > 0)
    }

    // -- cars ---------------------------------------------------------------

    pub async fn list_cars(&self, filter: &CarFilter) -> Result<Vec<Car>, ApiError> {
        let mut qb = QueryBuilder::new("SELECT * FROM cars WHERE 1 = 1");
        if let Some(m) = filter.manufacturer {
            qb.push(" AND manufacturer_id = ").push_bind(m);
        }
        if let Some(body) = filter.body_type {
            qb.push(" AND body_type = ").push_bind(body);
        }
        if let Some(fuel) = filter.fuel_type {
            qb.push(" AND fuel_type = ").push_bind(fuel);
        }
        if let Some(tr) = filter.transmission {
            qb.push(" AND transmission = ").push_bind(tr);
        }
        if let Some(min) = filter.min_price {
            qb.push(" AND CAST(price AS REAL) >= ").push_bind(min);
        }
        if let Some(max) = filter.max_price {
            qb.push(" AND CAST(price AS REAL) <= ").push_bind(max);
        }
        if let Some(active) = filter.is_active {
            qb.push(" AND is_active = ").push_bind(active);
        }
        qb.push(" ORDER BY created_at DESC");

        let rows = qb.build_query_as::<Car>().fetch_all(self.pool()).await?;
        Ok(rows)
    }

    pub async fn get_car(&self, id: i64) -> Result<Option<Car>, ApiError> {
        let row = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(row)
    }

    /// Latest active cars, newest first.
    pub async fn featured_cars(&self, limit: i64) -> Result<Vec<Car>, ApiError> {
        let rows = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE is_active = 1 ORDER BY created_at DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Insert the car together with its features and images in one
    /// transaction. The first listed image becomes the primary one.
    pub async fn create_car(
        &self,
        new: &NewCar,
        features: &[String],
        images: &[String],
    ) -> Result<i64, ApiError> {
        let mut tx = self.pool().begin().await?;

        let res = sqlx::query(INSERT_CAR)
            .bind(new.manufacturer_id)
            .bind(new.body_type)
            .bind(&new.model_name)
            .bind(&new.variant)
            .bind(new.model_year)
            .bind(new.registration_year)
            .bind(new.ownership)
            .bind(new.kilometers_driven)
            .bind(new.fuel_type)
            .bind(new.transmission)
            .bind(new.engine_cc)
            .bind(new.mileage.to_string())
            .bind(&new.color)
            .bind(new.price.to_string())
            .bind(new.is_negotiable)
            .bind(new.insurance_valid_till)
            .bind(new.rc_available)
            .bind(new.puc_available)
            .bind(new.loan_clearance)
            .bind(new.condition)
            .bind(new.accident_history)
            .bind(new.service_history)
            .bind(&new.description)
            .bind(new.is_active)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        let car_id = res.last_insert_rowid();

        for name in features {
            sqlx::query("INSERT INTO car_features (car_id, name) VALUES (?, ?)")
                .bind(car_id)
                .bind(name)
                .execute(&mut *tx)
                .await?;
        }
        for (index, image) in images.iter().enumerate() {
            sqlx::query("INSERT INTO car_images (car_id, image, is_primary) VALUES (?, ?, ?)")
                .bind(car_id)
                .bind(image)
                .bind(index == 0)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(car_id)
    }

    /// Partial update. When `features` is given the feature set is replaced
    /// (delete-then-recreate) in the same transaction as the column update,
    /// so concurrent readers never observe a half-replaced set. Appended
    /// images keep first-created-wins primary semantics.
    pub async fn update_car(
        &self,
        id: i64,
        patch: &CarPatch,
        features: Option<&[String]>,
        images: Option<&[String]>,
    ) -> Result<Option<Car>, ApiError> {
        let mut tx = self.pool().begin().await?;

        let Some(current) = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let merged = apply_patch(current, patch);
        sqlx::query(UPDATE_CAR)
            .bind(merged.manufacturer_id)
            .bind(merged.body_type)
            .bind(&merged.model_name)
            .bind(&merged.variant)
            .bind(merged.model_year)
            .bind(merged.registration_year)
            .bind(merged.ownership)
            .bind(merged.kilometers_driven)
            .bind(merged.fuel_type)
            .bind(merged.transmission)
            .bind(merged.engine_cc)
            .bind(merged.mileage.to_string())
            .bind(&merged.color)
            .bind(merged.price.to_string())
            .bind(merged.is_negotiable)
            .bind(merged.insurance_valid_till)
            .bind(merged.rc_available)
            .bind(merged.puc_available)
            .bind(merged.loan_clearance)
            .bind(merged.condition)
            .bind(merged.accident_history)
            .bind(merged.service_history)
            .bind(&merged.description)
            .bind(merged.is_active)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if let Some(names) = features {
            sqlx::query("DELETE FROM car_features WHERE car_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for name in names {
                sqlx::query("INSERT INTO car_features (car_id, name) VALUES (?, ?)")
                    .bind(id)
                    .bind(name)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        if let Some(urls) = images {
            let existing: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM car_images WHERE car_id = ?")
                    .bind(id)
                    .fetch_one(&mut *tx)
                    .await?;
            for (index, image) in urls.iter().enumerate() {
                sqlx::query("INSERT INTO car_images (car_id, image, is_primary) VALUES (?, ?, ?)")
                    .bind(id)
                    .bind(image)
                    .bind(existing == 0 && index == 0)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(Some(merged))
    }

    pub async fn delete_car(&self, id: i64) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn car_images(&self, car_id: i64) -> Result<Vec<CarImage>, ApiError> {
        let rows = sqlx::query_as::<_, CarImage>(
            "SELECT id, car_id, image, is_primary FROM car_images WHERE car_id = ? ORDER BY id",
        )
        .bind(car_id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub async fn car_features(&self, car_id: i64) -> Result<Vec<CarFeature>, ApiError> {
        let rows = sqlx::query_as::<_, CarFeature>(
            "SELECT id, car_id, name FROM car_features WHERE car_id = ? ORDER BY id",
        )
        .bind(car_id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Primary image resolved through the relation: the flagged primary if
    /// any, else the first-created image.
    pub async fn primary_image(&self, car_id: i64) -> Result<Option<String>, ApiError> {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT image FROM car_images WHERE car_id = ? ORDER BY is_primary DESC, id ASC LIMIT 1",
        )
        .bind(car_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row)
    }

    // -- related-car tiers --------------------------------------------------

    /// Tier 1: same manufacturer AND same body type, random order.
    pub async fn related_same_make_and_body(
        &self,
        car: &Car,
        limit: i64,
    ) -> Result<Vec<Car>, ApiError> {
        let rows = sqlx::query_as::<_, Car>(
            r#"SELECT * FROM cars
               WHERE is_active = 1 AND id <> ? AND manufacturer_id = ? AND body_type = ?
               ORDER BY RANDOM() LIMIT ?"#,
        )
        .bind(car.id)
        .bind(car.manufacturer_id)
        .bind(car.body_type)
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Tier 2: same manufacturer OR same body type, within the price band.
    pub async fn related_make_or_body_in_band(
        &self,
        car: &Car,
        band_lo: f64,
        band_hi: f64,
        limit: i64,
    ) -> Result<Vec<Car>, ApiError> {
        let rows = sqlx::query_as::<_, Car>(
            r#"SELECT * FROM cars
               WHERE is_active = 1 AND id <> ?
                 AND (manufacturer_id = ? OR body_type = ?)
                 AND CAST(price AS REAL) >= ? AND CAST(price AS REAL) <= ?
               ORDER BY RANDOM() LIMIT ?"#,
        )
        .bind(car.id)
        .bind(car.manufacturer_id)
        .bind(car.body_type)
        .bind(band_lo)
        .bind(band_hi)
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Tier 3: any active car in the price band, minus prior picks.
    pub async fn related_in_band(
        &self,
        car: &Car,
        band_lo: f64,
        band_hi: f64,
        exclude: &[i64],
        limit: i64,
    ) -> Result<Vec<Car>, ApiError> {
        let mut qb = QueryBuilder::new("SELECT * FROM cars WHERE is_active = 1 AND id <> ");
        qb.push_bind(car.id);
        qb.push(" AND CAST(price AS REAL) >= ").push_bind(band_lo);
        qb.push(" AND CAST(price AS REAL) <= ").push_bind(band_hi);
        if !exclude.is_empty() {
            qb.push(" AND id NOT IN (");
            {
                let mut sep = qb.separated(", ");
                for id in exclude {
                    sep.push_bind(*id);
                }
            }
            qb.push(")");
        }
        qb.push(" ORDER BY RANDOM() LIMIT ").push_bind(limit);

        let rows = qb.build_query_as::<Car>().fetch_all(self.pool()).await?;
        Ok(rows)
    }

    // -- recently sold ------------------------------------------------------

    pub async fn list_recently_sold(&self, limit: i64) -> Result<Vec<RecentlySold>, ApiError> {
        let rows = sqlx::query_as::<_, RecentlySold>(
            "SELECT * FROM recently_sold ORDER BY sold_date DESC, created_at DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub async fn insert_recently_sold(
        &self,
        car_name: &str,
        price: &str,
        sold_date: NaiveDate,
        image: &str,
    ) -> Result<RecentlySold, ApiError> {
        let created_at = Utc::now();
        let res = sqlx::query(
            "INSERT INTO recently_sold (car_name, price, sold_date, image, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(car_name)
        .bind(price)
        .bind(sold_date)
        .bind(image)
        .bind(created_at)
        .execute(self.pool())
        .await?;
        Ok(RecentlySold {
            id: res.last_insert_rowid(),
            car_name: car_name.to_string(),
            price: price.to_string(),
            sold_date,
            image: image.to_string(),
            created_at,
        })
    }

    /// One-way sold transition: snapshot the car's display name, exact price
    /// text and primary image into `recently_sold`, then deactivate the car.
    /// Snapshot and deactivation commit together or not at all.
    pub async fn mark_car_sold(
        &self,
        car_id: i64,
        sold_date: NaiveDate,
    ) -> Result<RecentlySold, ApiError> {
        let mut tx = self.pool().begin().await?;

        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = ?")
            .bind(car_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| ApiError::not_found("Car"))?;
        let maker: String = sqlx::query_scalar("SELECT name FROM manufacturers WHERE id = ?")
            .bind(car.manufacturer_id)
            .fetch_one(&mut *tx)
            .await?;
        let image: Option<String> = sqlx::query_scalar(
            "SELECT image FROM car_images WHERE car_id = ? ORDER BY is_primary DESC, id ASC LIMIT 1",
        )
        .bind(car_id)
        .fetch_optional(&mut *tx)
        .await?;

        let car_name = format!("{} {} ({})", maker, car.model_name, car.model_year);
        let price = car.price.to_string();
        let image = image.unwrap_or_default();
        let created_at = Utc::now();

        let res = sqlx::query(
            "INSERT INTO recently_sold (car_name, price, sold_date, image, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&car_name)
        .bind(&price)
        .bind(sold_date)
        .bind(&image)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE cars SET is_active = 0 WHERE id = ?")
            .bind(car_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(RecentlySold {
            id: res.last_insert_rowid(),
            car_name,
            price,
            sold_date,
            image,
            created_at,
        })
    }
}

fn apply_patch(mut car: Car, patch: &CarPatch) -> Car {
    let p = patch.clone();
    if let Some(v) = p.manufacturer_id {
        car.manufacturer_id = v;
    }
    if let Some(v) = p.body_type {
        car.body_type = v;
    }
    if let Some(v) = p.model_name {
        car.model_name = v;
    }
    if let Some(v) = p.variant {
        car.variant = v;
    }
    if let Some(v) = p.model_year {
        car.model_year = v;
    }
    if let Some(v) = p.registration_year {
        car.registration_year = v;
    }
    if let Some(v) = p.ownership {
        car.ownership = v;
    }
    if let Some(v) = p.kilometers_driven {
        car.kilometers_driven = v;
    }
    if let Some(v) = p.fuel_type {
        car.fuel_type = v;
    }
    if let Some(v) = p.transmission {
        car.transmission = v;
    }
    if let Some(v) = p.engine_cc {
        car.engine_cc = v;
    }
    if let Some(v) = p.mileage {
        car.mileage = v;
    }
    if let Some(v) = p.color {
        car.color = v;
    }
    if let Some(v) = p.price {
        car.price = v;
    }
    if let Some(v) = p.is_negotiable {
        car.is_negotiable = v;
    }
    if let Some(v) = p.insurance_valid_till {
        car.insurance_valid_till = v;
    }
    if let Some(v) = p.rc_available {
        car.rc_available = v;
    }
    if let Some(v) = p.puc_available {
        car.puc_available = v;
    }
    if let Some(v) = p.loan_clearance {
        car.loan_clearance = v;
    }
    if let Some(v) = p.condition {
        car.condition = v;
    }
    if let Some(v) = p.accident_history {
        car.accident_history = v;
    }
    if let Some(v) = p.service_history {
        car.service_history = v;
    }
    if let Some(v) = p.description {
        car.description = v;
    }
    if let Some(v) = p.is_active {
        car.is_active = v;
    }
    car
}
