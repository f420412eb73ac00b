use crate::models::{
    market::{Districted, InventoryRow, MarketData, PriceRow},
    room::ByRoom,
};
use std::collections::HashSet;

/// Headline figures for the whole market.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSummary {
    pub total_inventory: u64,
    pub avg_price_per_area: f64,
    pub district_count: usize,
}

/// Sum of `total` across rows. Empty input gives 0.
pub fn total_inventory<'a>(rows: impl IntoIterator<Item = &'a InventoryRow>) -> u64 {
    rows.into_iter().map(|r| r.total).fold(0, u64::saturating_add)
}

/// Mean of the district-wide price per square metre.
///
/// An empty market has no defined average; 0 is returned instead.
pub fn overall_avg_price_per_area<'a>(rows: impl IntoIterator<Item = &'a PriceRow>) -> f64 {
    let (sum, count) = rows
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), r| {
            (sum + r.avg_price_per_area, count + 1)
        });

    if count > 0 { sum / count as f64 } else { 0.0 }
}

/// Number of distinct districts present.
pub fn district_count<'a, T: Districted + 'a>(rows: impl IntoIterator<Item = &'a T>) -> usize {
    rows.into_iter()
        .map(Districted::district)
        .collect::<HashSet<_>>()
        .len()
}

/// Looks up the price row for an inventory row's district. `None` is a join miss.
pub fn join_by_district<'a>(row: &InventoryRow, prices: &'a [PriceRow]) -> Option<&'a PriceRow> {
    prices.iter().find(|p| p.district == row.district)
}

/// Listing counts per room category, summed across rows.
pub fn inventory_by_room<'a>(rows: impl IntoIterator<Item = &'a InventoryRow>) -> ByRoom<u64> {
    rows.into_iter().fold(ByRoom::default(), |acc, r| {
        ByRoom::new(
            acc.one.saturating_add(r.counts.one),
            acc.two.saturating_add(r.counts.two),
            acc.three.saturating_add(r.counts.three),
            acc.four_plus.saturating_add(r.counts.four_plus),
        )
    })
}

pub fn summarize(data: &MarketData) -> MarketSummary {
    MarketSummary {
        total_inventory: total_inventory(&data.inventory),
        avg_price_per_area: overall_avg_price_per_area(&data.prices),
        district_count: district_count(&data.inventory),
    }
}
