//! SQL DDL for initializing the dealership database.
//! SQLite-first design; can be adapted for other RDBMS.

/// Notes on representation:
/// - booleans are stored as INTEGER 0/1
/// - timestamps are stored as RFC3339 TEXT
/// - `cars.price` and `cars.mileage` are exact decimal TEXT (never REAL);
///   range filters go through `CAST(... AS REAL)` at query time
/// - `dealership_settings` is a single-row table pinned by `CHECK (id = 1)`
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS manufacturers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    country TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS cars (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    manufacturer_id INTEGER NOT NULL REFERENCES manufacturers(id) ON DELETE CASCADE,
    body_type TEXT NOT NULL,
    model_name TEXT NOT NULL,
    variant TEXT NOT NULL DEFAULT '',
    model_year INTEGER NOT NULL,
    registration_year INTEGER NOT NULL,
    ownership TEXT NOT NULL,
    kilometers_driven INTEGER NOT NULL,
    fuel_type TEXT NOT NULL,
    transmission TEXT NOT NULL,
    engine_cc INTEGER NOT NULL,
    mileage TEXT NOT NULL,
    color TEXT NOT NULL,
    price TEXT NOT NULL,
    is_negotiable INTEGER NOT NULL DEFAULT 1,
    insurance_valid_till TEXT NULL,
    rc_available INTEGER NOT NULL DEFAULT 1,
    puc_available INTEGER NOT NULL DEFAULT 1,
    loan_clearance INTEGER NOT NULL DEFAULT 1,
    condition TEXT NOT NULL,
    accident_history INTEGER NOT NULL DEFAULT 0,
    service_history INTEGER NOT NULL DEFAULT 1,
    description TEXT NOT NULL DEFAULT '',
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_cars_manufacturer_id ON cars(manufacturer_id);
CREATE INDEX IF NOT EXISTS idx_cars_is_active ON cars(is_active);

CREATE TABLE IF NOT EXISTS car_images (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_id INTEGER NOT NULL REFERENCES cars(id) ON DELETE CASCADE,
    image TEXT NOT NULL,
    is_primary INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_car_images_car_id ON car_images(car_id);

CREATE TABLE IF NOT EXISTS car_features (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_id INTEGER NOT NULL REFERENCES cars(id) ON DELETE CASCADE,
    name TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_car_features_car_id ON car_features(car_id);

CREATE TABLE IF NOT EXISTS dealership_settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    address TEXT NOT NULL,
    phone TEXT NOT NULL,
    email TEXT NOT NULL,
    business_hours_mon_sat TEXT NOT NULL,
    business_hours_sunday TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS recently_sold (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_name TEXT NOT NULL,
    price TEXT NOT NULL,
    sold_date TEXT NOT NULL,
    image TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bookings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_id INTEGER NOT NULL REFERENCES cars(id) ON DELETE CASCADE,
    car_name TEXT NOT NULL,
    package_type TEXT NOT NULL,
    customer_name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    message TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS enquiries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_id INTEGER NOT NULL REFERENCES cars(id) ON DELETE CASCADE,
    customer_name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    message TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT 'new',
    admin_notes TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS admin_users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    display_name TEXT NOT NULL DEFAULT '',
    role TEXT NOT NULL DEFAULT 'admin',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS auth_tokens (
    token TEXT PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES admin_users(id) ON DELETE CASCADE,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_auth_tokens_user_id ON auth_tokens(user_id);
"#;
