// src/domain/types.rs

use serde::{Deserialize, Serialize};

/// The food-truck or push-cart operator, uniquely identified by `id`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Proprietor {
    pub id: i64,
    pub name: String,
    /// Facility type as reported by the export, e.g. "Truck" or "Push Cart".
    #[serde(rename = "type")]
    pub category: String,
    /// Food items offered, one entry per `:`-separated segment.
    pub items: Vec<String>,
}

/// Block/lot and district identifiers for the permitted location.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub lot: i64,
    pub block: i64,
    pub blocklot: i64,
    pub zip_codes: i64,
    pub neighborhoods: i64,
    pub police_districts: i64,
    pub supervisor_districts: i64,
    pub fire_prevention_districts: i64,
}

/// Free-text operating schedule.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub description: String,
    pub days_hours: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub description: f64,
    pub address: String,
    pub x: f64,
    pub y: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
}

/// The regulatory authorization attached to a proprietor.
///
/// `status` stays a plain string ("APPROVED", "EXPIRED", "REQUESTED", or
/// whatever else the export contains) so malformed rows are absorbed and
/// reports can echo the raw value.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Permit {
    pub current: String,
    pub prior: i64,
    pub status: String,
    pub expires_at: String,
    pub approved_at: String,
    pub received_at: i64,
    pub notice_of_inaction: String,
}

/// One permit record. All five sub-objects are always present; a malformed
/// source row leaves fields at their defaults rather than dropping anything.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FoodTruck {
    pub proprietor: Proprietor,
    pub neighborhood: Neighborhood,
    pub schedule: Schedule,
    pub location: Location,
    pub permit: Permit,
}
