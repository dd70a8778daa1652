//! In-memory query engine over a city's mobile food facility permit export.
//!
//! The export is a flat, positional CSV. [`parse`] turns it into nested
//! [`domain::FoodTruck`] records and [`domain::TruckIndex`] serves keyed
//! lookup, substring search, and aggregate reports over the loaded
//! collection.

pub mod config;
pub mod domain;
pub mod parse;
