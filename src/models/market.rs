use super::room::{ByRoom, RoomCategory};
use serde::Serialize;

/// Rows that belong to a district. The district name is the join key across tables.
pub trait Districted {
    fn district(&self) -> &str;
}

/// Rows that carry one numeric value per room category.
pub trait RoomValues {
    fn room_value(&self, category: RoomCategory) -> f64;
}

/// Listing counts for one district.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub district: String,
    pub total: u64,
    pub counts: ByRoom<u64>,
}

impl InventoryRow {
    /// Whether `total` agrees with the per-room breakdown.
    pub fn is_consistent(&self) -> bool {
        self.total == self.counts.sum()
    }
}

/// Price per square metre for one district.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
    pub district: String,
    pub avg_price_per_area: f64,
    pub price_per_area_by_room: ByRoom<f64>,
}

/// Average asking price of a whole unit for one district.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvgUnitPriceRow {
    pub district: String,
    pub avg_unit_price_by_room: ByRoom<f64>,
}

impl Districted for InventoryRow {
    fn district(&self) -> &str {
        &self.district
    }
}

impl Districted for PriceRow {
    fn district(&self) -> &str {
        &self.district
    }
}

impl Districted for AvgUnitPriceRow {
    fn district(&self) -> &str {
        &self.district
    }
}

impl RoomValues for InventoryRow {
    fn room_value(&self, category: RoomCategory) -> f64 {
        self.counts.get(category) as f64
    }
}

impl RoomValues for PriceRow {
    fn room_value(&self, category: RoomCategory) -> f64 {
        self.price_per_area_by_room.get(category)
    }
}

impl RoomValues for AvgUnitPriceRow {
    fn room_value(&self, category: RoomCategory) -> f64 {
        self.avg_unit_price_by_room.get(category)
    }
}

/// Snapshot of the three tables. Replaced as a whole on every successful load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketData {
    pub inventory: Vec<InventoryRow>,
    pub prices: Vec<PriceRow>,
    pub avg_prices: Vec<AvgUnitPriceRow>,
}

impl MarketData {
    pub fn new(
        inventory: Vec<InventoryRow>,
        prices: Vec<PriceRow>,
        avg_prices: Vec<AvgUnitPriceRow>,
    ) -> Self {
        Self {
            inventory,
            prices,
            avg_prices,
        }
    }

    /// Nothing meaningful to chart: either inventory or prices came back empty.
    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty() || self.prices.is_empty()
    }

    /// District names in inventory order, for selector options.
    pub fn districts(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.inventory
            .iter()
            .map(|row| row.district.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }

    /// Districts whose inventory total disagrees with the room breakdown.
    pub fn inconsistent_districts(&self) -> Vec<&str> {
        self.inventory
            .iter()
            .filter(|row| !row.is_consistent())
            .map(|row| row.district.as_str())
            .collect()
    }
}
