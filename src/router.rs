use axum::Router;
use axum::routing::{get, patch, post};
use tower_http::cors::CorsLayer;

use crate::db::Storage;
use crate::handlers::{accounts, bookings, cars, enquiries, manufacturers, recently_sold, settings};

#[derive(Clone)]
pub struct AppState {
    pub store: Storage,
}

impl AppState {
    pub fn new(store: Storage) -> Self {
        Self { store }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        // inventory
        .route("/cars/", get(cars::list).post(cars::create))
        .route("/cars/featured/", get(cars::featured))
        .route(
            "/cars/{id}/",
            get(cars::detail).patch(cars::update).delete(cars::destroy),
        )
        .route(
            "/manufacturers/",
            get(manufacturers::list).post(manufacturers::create),
        )
        .route(
            "/manufacturers/{id}/",
            patch(manufacturers::update).delete(manufacturers::destroy),
        )
        // sold history
        .route(
            "/recently-sold/",
            get(recently_sold::list).post(recently_sold::create),
        )
        .route("/recently-sold/add-car/", post(recently_sold::add_car))
        // dealership settings
        .route("/settings/", get(settings::detail).patch(settings::update))
        // bookings & enquiries
        .route("/bookings/", get(bookings::list).post(bookings::create))
        .route("/bookings/{id}/", get(bookings::detail))
        .route("/bookings/{id}/status/", patch(bookings::update_status))
        .route("/enquiries/", get(enquiries::list).post(enquiries::create))
        .route("/enquiries/{id}/status/", patch(enquiries::update_status))
        // admin accounts
        .route("/accounts/register/", post(accounts::register))
        .route("/accounts/login/", post(accounts::login))
        .route("/accounts/logout/", post(accounts::logout))
        .route("/accounts/profile/", get(accounts::profile))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
