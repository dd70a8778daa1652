// src/domain/client.rs

use super::types::FoodTruck;
use crate::parse;
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::{
    collections::{hash_map::Entry, BTreeMap, HashMap},
    fs,
    path::Path,
};
use tracing::{debug, info};

/// Record field addressed by a substring search.
#[derive(Debug, Clone, Copy)]
enum SearchField {
    Name,
    Type,
    Status,
    Item,
    Block,
}

/// Record field a report aggregates over.
#[derive(Debug, Clone, Copy)]
enum ReportField {
    Type,
    Status,
    Block,
}

/// Immutable in-memory collection of permit records, keyed by proprietor id.
///
/// Built eagerly from a CSV export by [`TruckIndex::load`] and never mutated
/// afterwards, so it is safe to share across threads without locking. To pick
/// up a new export, load a fresh index and swap the reference held by
/// callers.
#[derive(Debug)]
pub struct TruckIndex {
    /// Records in file order, duplicate ids resolved to the last row.
    trucks: Vec<FoodTruck>,
    /// Proprietor id → position in `trucks`.
    by_id: HashMap<i64, usize>,
}

impl TruckIndex {
    /// Read and index the permit export at `path`.
    ///
    /// Fails only if the file itself cannot be read. Malformed rows are
    /// absorbed by the parser as empty or zero-valued fields.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading permit export {}", path.display()))?;

        let records = parse::parse_records(&content);
        debug!(rows = records.len(), "parsed permit rows");

        let mut trucks: Vec<FoodTruck> = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        for truck in records {
            match by_id.entry(truck.proprietor.id) {
                // A later row for the same proprietor replaces the earlier
                // one in place, keeping its original position.
                Entry::Occupied(slot) => trucks[*slot.get()] = truck,
                Entry::Vacant(slot) => {
                    slot.insert(trucks.len());
                    trucks.push(truck);
                }
            }
        }

        info!(
            trucks = trucks.len(),
            path = %path.display(),
            "loaded food truck collection"
        );
        Ok(Self { trucks, by_id })
    }

    /// Exact lookup by proprietor id. The record is cloned so callers never
    /// alias into the shared collection; `None` when no key matches.
    pub fn get_by_id(&self, id: i64) -> Option<FoodTruck> {
        self.by_id.get(&id).map(|&slot| self.trucks[slot].clone())
    }

    /// Every record, in load order.
    pub fn fetch_all(&self) -> &[FoodTruck] {
        &self.trucks
    }

    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    /// Search proprietor names, e.g. "taco" matches "Al's Taco Truck".
    pub fn search_by_name(&self, query: &str) -> Vec<&FoodTruck> {
        self.search_by(SearchField::Name, query)
    }

    /// Search facility types ("Truck", "Push Cart").
    pub fn search_by_type(&self, query: &str) -> Vec<&FoodTruck> {
        self.search_by(SearchField::Type, query)
    }

    /// Search permit statuses ("APPROVED", "EXPIRED", "REQUESTED").
    pub fn search_by_status(&self, query: &str) -> Vec<&FoodTruck> {
        self.search_by(SearchField::Status, query)
    }

    /// Search food items; a record matches when any of its items does.
    pub fn search_by_item(&self, query: &str) -> Vec<&FoodTruck> {
        self.search_by(SearchField::Item, query)
    }

    /// Search block numbers, matched against their decimal rendering.
    pub fn search_by_block(&self, query: &str) -> Vec<&FoodTruck> {
        self.search_by(SearchField::Block, query)
    }

    /// Count records per facility type.
    pub fn report_by_type(&self) -> BTreeMap<String, u64> {
        self.report_by(ReportField::Type)
    }

    /// Count records per permit status.
    pub fn report_by_status(&self) -> BTreeMap<String, u64> {
        self.report_by(ReportField::Status)
    }

    /// Count records per block number.
    pub fn report_by_block(&self) -> BTreeMap<String, u64> {
        self.report_by(ReportField::Block)
    }

    /// Case-insensitive substring match of `query` against the addressed
    /// field. An empty query matches every record, since the empty string is
    /// a substring of anything.
    fn search_by(&self, field: SearchField, query: &str) -> Vec<&FoodTruck> {
        let pattern = substring_pattern(query);
        self.trucks
            .iter()
            .filter(|truck| field_matches(truck, field, &pattern))
            .collect()
    }

    /// Tally the addressed field across the collection. Values are counted
    /// raw: no trimming beyond the parser's, and no case folding, so two
    /// differently-cased statuses land in two buckets.
    fn report_by(&self, field: ReportField) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for truck in &self.trucks {
            let value = match field {
                ReportField::Type => truck.proprietor.category.clone(),
                ReportField::Status => truck.permit.status.clone(),
                // Block zero is the coercion default for a missing value.
                ReportField::Block => match truck.neighborhood.block {
                    0 => String::new(),
                    block => block.to_string(),
                },
            };
            if value.is_empty() {
                continue;
            }
            *counts.entry(value).or_insert(0) += 1;
        }
        counts
    }
}

/// Compile `query` into a case-insensitive matcher. The query is escaped
/// first, so matching is always plain substring containment.
fn substring_pattern(query: &str) -> Regex {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .expect("escaped pattern must compile")
}

fn field_matches(truck: &FoodTruck, field: SearchField, pattern: &Regex) -> bool {
    match field {
        SearchField::Name => pattern.is_match(&truck.proprietor.name),
        SearchField::Type => pattern.is_match(&truck.proprietor.category),
        SearchField::Status => pattern.is_match(&truck.permit.status),
        SearchField::Item => truck.proprietor.items.iter().any(|item| pattern.is_match(item)),
        SearchField::Block => pattern.is_match(&truck.neighborhood.block.to_string()),
    }
}
