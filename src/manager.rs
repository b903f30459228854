// Hotel collection manager: an ordered list of hotel records with query and
// aggregation helpers. Records are never mutated; only `add` grows the list.

use crate::attribute::{AttributeType, AttributeValue, Attributes};
use crate::config::ManagerConfig;
use crate::error::{ManagerError, Result};
use crate::hotel::HotelRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing::debug;

// Outcome of checking a predicate against every hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredicateSummary {
    pub all: bool,
    pub any: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HotelManager {
    hotels: Vec<HotelRecord>,
    config: ManagerConfig,
}

impl HotelManager {
    pub fn new(hotels: Vec<HotelRecord>) -> Self {
        Self::with_config(hotels, ManagerConfig::default())
    }

    pub fn with_config(hotels: Vec<HotelRecord>, config: ManagerConfig) -> Self {
        Self { hotels, config }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    /// Returns the hotel at `index`, or `IndexOutOfRange` past the end.
    pub fn at(&self, index: usize) -> Result<&HotelRecord> {
        self.hotels
            .get(index)
            .ok_or(ManagerError::IndexOutOfRange {
                index,
                len: self.hotels.len(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HotelRecord> {
        self.hotels.iter()
    }

    // Print the given hotels, or every hotel when no subset is supplied
    pub fn display(&self, subset: Option<&[HotelRecord]>) {
        let _ = self.write_records(&mut io::stdout().lock(), subset);
    }

    // Same as `display`, but into any writer
    pub fn write_records<W: Write>(
        &self,
        writer: &mut W,
        subset: Option<&[HotelRecord]>,
    ) -> io::Result<()> {
        for hotel in subset.unwrap_or(self.hotels.as_slice()) {
            writeln!(writer, "{}", hotel)?;
        }
        Ok(())
    }

    pub fn add(&mut self, hotel: HotelRecord) {
        debug!(hotel = hotel.name(), position = self.hotels.len(), "adding hotel");
        self.hotels.push(hotel);
    }

    // Hotels with at least `threshold` rooms (inclusive), in collection order
    pub fn find_with_min_rooms(&self, threshold: u32) -> Vec<HotelRecord> {
        let found: Vec<HotelRecord> = self
            .hotels
            .iter()
            .filter(|hotel| hotel.total_rooms() >= threshold)
            .cloned()
            .collect();
        debug!(threshold, matches = found.len(), "filtered hotels by room count");
        found
    }

    pub fn find_with_default_min_rooms(&self) -> Vec<HotelRecord> {
        self.find_with_min_rooms(self.config.default_min_rooms)
    }

    // Resort hotels that have a pool for adults. Other variants never match.
    pub fn find_with_adult_pool(&self) -> Vec<HotelRecord> {
        let found: Vec<HotelRecord> = self
            .hotels
            .iter()
            .filter(|hotel| matches!(hotel, HotelRecord::Resort(resort) if resort.pool_for_adults))
            .cloned()
            .collect();
        debug!(matches = found.len(), "filtered resorts with adult pools");
        found
    }

    pub fn locations(&self) -> Vec<String> {
        self.hotels.iter().map(HotelRecord::location).collect()
    }

    /// Yields `(index, hotel)` pairs starting from zero. The returned iterator
    /// is single-pass; call again to restart.
    pub fn indexed_pairs(&self) -> impl Iterator<Item = (usize, &HotelRecord)> + '_ {
        self.hotels.iter().enumerate()
    }

    pub fn paired_with_locations(&self) -> Vec<(&HotelRecord, String)> {
        self.hotels.iter().zip(self.locations()).collect()
    }

    /// Collects every attribute of the requested type across all hotels,
    /// keyed by attribute name.
    ///
    /// Names are shared between hotels, so a later hotel's value replaces an
    /// earlier one: with two hotels the result holds the second hotel's
    /// `total_rooms`, not both. Boolean flags are included in `Integer`
    /// queries.
    ///
    /// The map iterates in attribute-name order, not in the order names were
    /// first seen.
    pub fn attributes_of_type(
        &self,
        attribute_type: AttributeType,
    ) -> BTreeMap<&'static str, AttributeValue> {
        let mut found = BTreeMap::new();
        for hotel in &self.hotels {
            for (name, value) in hotel.attributes() {
                if value.is_type(attribute_type) {
                    found.insert(name, value);
                }
            }
        }
        debug!(?attribute_type, attributes = found.len(), "collected attributes");
        found
    }

    pub fn evaluate_predicate<F>(&self, predicate: F) -> PredicateSummary
    where
        F: Fn(&HotelRecord) -> bool,
    {
        PredicateSummary {
            all: self.hotels.iter().all(&predicate),
            any: self.hotels.iter().any(&predicate),
        }
    }
}

impl From<Vec<HotelRecord>> for HotelManager {
    fn from(hotels: Vec<HotelRecord>) -> Self {
        Self::new(hotels)
    }
}

impl FromIterator<HotelRecord> for HotelManager {
    fn from_iter<I: IntoIterator<Item = HotelRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HotelManager {
    type Item = &'a HotelRecord;
    type IntoIter = std::slice::Iter<'a, HotelRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
