// src/parse/mod.rs

pub mod utils;

use crate::domain::{FoodTruck, CSV_COLUMNS};
use utils::clean_field;

/// Parse the raw content of a permit export into one record per data row.
///
/// The first line is the column header and is discarded, as are lines that
/// are blank after trimming. Values are split on the comma only: a value
/// containing an embedded comma (even inside quotes) lands in the wrong
/// columns. The upstream export never quotes a delimiter in the fields this
/// engine reads, so this is a known limitation rather than a bug to fix here.
pub fn parse_records(content: &str) -> Vec<FoodTruck> {
    content
        .split('\n')
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_row)
        .collect()
}

/// Build a single record from one data line.
///
/// Every sub-object is present from the start via `FoodTruck::default()`.
/// Missing trailing columns assign the empty value, so a malformed row
/// produces a partially-empty record, never a failure.
fn parse_row(line: &str) -> FoodTruck {
    let values: Vec<&str> = line.split(',').collect();
    let mut truck = FoodTruck::default();

    for (position, column) in CSV_COLUMNS.iter().enumerate() {
        let value = values
            .get(position)
            .map(|raw| clean_field(raw))
            .unwrap_or_default();
        truck.assign(*column, value);
    }

    truck
}
