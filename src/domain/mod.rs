pub mod client;
pub mod columns;
pub mod types;

pub use client::TruckIndex;
pub use columns::{Column, CSV_COLUMNS};
pub use types::{FoodTruck, Location, Neighborhood, Permit, Proprietor, Schedule};
