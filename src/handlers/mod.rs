pub mod accounts;
pub mod bookings;
pub mod cars;
pub mod enquiries;
pub mod manufacturers;
pub mod recently_sold;
pub mod settings;
