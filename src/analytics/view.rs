//! Shapes pipeline output into the structures each chart and table consumes.

use super::aggregate::{MarketSummary, join_by_district, summarize};
use super::filter::filter_rows;
use crate::config::Config;
use crate::models::{
    filter::{FilterSelection, RoomSelector},
    market::{Districted, InventoryRow, MarketData, PriceRow, RoomValues},
    room::{ByRoom, RoomCategory},
};
use serde::Serialize;

/// One slice of the market-share pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSlice {
    pub label: String,
    pub value: u64,
    pub color_index: usize,
    /// Rounded independently per slice, so slices may not add up to exactly 100.
    pub percent: u32,
}

/// A row of the district breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub district: String,
    pub total: String,
    pub price_per_area: String,
    pub counts: ByRoom<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSeries {
    pub category: RoomCategory,
    pub name: &'static str,
    pub values: Vec<f64>,
}

/// District labels on the category axis plus one series per visible room column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub series: Vec<RoomSeries>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Everything the dashboard renders for one data snapshot and selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub summary: MarketSummary,
    pub inventory: ChartSeries,
    pub price_per_area: ChartSeries,
    pub unit_price: ChartSeries,
    pub share: Vec<ShareSlice>,
    pub table: Vec<TableRow>,
}

impl DashboardView {
    /// Charts follow the selection; the summary, share pie and table cover the whole market.
    pub fn build(data: &MarketData, selection: &FilterSelection) -> Self {
        Self {
            summary: summarize(data),
            inventory: room_series(filter_rows(&data.inventory, selection), selection.room),
            price_per_area: room_series(filter_rows(&data.prices, selection), selection.room),
            unit_price: room_series(filter_rows(&data.avg_prices, selection), selection.room),
            share: market_share(&data.inventory),
            table: table_rows(&data.inventory, &data.prices),
        }
    }
}

pub fn palette_color(index: usize) -> &'static str {
    Config::PALETTE[index % Config::PALETTE.len()]
}

/// Share of `value` in `total` as a whole percentage. A zero total gives 0.
pub fn percent_share(value: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (value as f64 / total as f64 * 100.0).round() as u32
}

pub fn market_share<'a>(rows: impl IntoIterator<Item = &'a InventoryRow>) -> Vec<ShareSlice> {
    let rows: Vec<&InventoryRow> = rows.into_iter().collect();
    let total = rows.iter().map(|r| r.total).fold(0, u64::saturating_add);

    rows.iter()
        .enumerate()
        .map(|(index, row)| ShareSlice {
            label: row.district.clone(),
            value: row.total,
            color_index: index % Config::PALETTE.len(),
            percent: percent_share(row.total, total),
        })
        .collect()
}

pub fn room_series<'a, T>(rows: impl IntoIterator<Item = &'a T>, room: RoomSelector) -> ChartSeries
where
    T: Districted + RoomValues + 'a,
{
    let rows: Vec<&T> = rows.into_iter().collect();

    ChartSeries {
        labels: rows.iter().map(|r| r.district().to_string()).collect(),
        series: room
            .columns()
            .into_iter()
            .map(|category| RoomSeries {
                category,
                name: category.label(),
                values: rows.iter().map(|r| r.room_value(category)).collect(),
            })
            .collect(),
    }
}

pub fn table_rows<'a>(
    inventory: impl IntoIterator<Item = &'a InventoryRow>,
    prices: &[PriceRow],
) -> Vec<TableRow> {
    inventory
        .into_iter()
        .map(|row| TableRow {
            district: row.district.clone(),
            total: format_thousands(row.total as f64),
            price_per_area: join_by_district(row, prices)
                .map(|p| p.avg_price_per_area)
                .filter(|price| *price > 0.0)
                .map_or_else(
                    || Config::MISSING_PLACEHOLDER.to_string(),
                    format_price_per_area,
                ),
            counts: row.counts,
        })
        .collect()
}

/// `4_500_000.0` becomes `"4.5М"`. Rounds half-up to one decimal.
pub fn format_millions(value: f64) -> String {
    let tenths = (value / 100_000.0).round();
    format!("{:.1}М", tenths / 10.0)
}

/// Whole units with thousands separators: `52000.4` becomes `"52,000"`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(Config::THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_price_per_area(value: f64) -> String {
    format!("{} {}", format_thousands(value), Config::CURRENCY_SYMBOL)
}

pub fn format_unit_price(value: f64) -> String {
    format!("{} {}", format_millions(value), Config::CURRENCY_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(district: &str, total: u64) -> InventoryRow {
        InventoryRow {
            district: district.to_string(),
            total,
            counts: ByRoom::default(),
        }
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(4_500_000.0), "4.5М");
        assert_eq!(format_millions(2_900_000.0), "2.9М");
        assert_eq!(format_millions(4_450_000.0), "4.5М");
        assert_eq!(format_millions(999_999.0), "1.0М");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(52000.0), "52,000");
        assert_eq!(format_thousands(1_234_567.6), "1,234,568");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(-1500.0), "-1,500");
    }

    #[test]
    fn test_price_formats_carry_currency() {
        assert_eq!(format_price_per_area(45000.0), "45,000 ₴");
        assert_eq!(format_unit_price(4_320_000.0), "4.3М ₴");
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), palette_color(6));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn test_market_share_slices() {
        let rows: Vec<InventoryRow> = (0..7).map(|i| inventory(&format!("D{i}"), 100)).collect();
        let slices = market_share(&rows);

        assert_eq!(slices.len(), 7);
        assert_eq!(slices[6].color_index, 0);
        assert_eq!(slices[2].label, "D2");
        // 100/700 = 14.28...% rounds to 14 for every slice; 7 * 14 = 98.
        assert!(slices.iter().all(|s| s.percent == 14));
        let sum: u32 = slices.iter().map(|s| s.percent).sum();
        assert!(sum.abs_diff(100) <= 6);
    }

    #[test]
    fn test_market_share_of_empty_total() {
        let rows = vec![inventory("A", 0)];
        assert_eq!(market_share(&rows)[0].percent, 0);
    }

    #[test]
    fn test_market_share_total_saturates() {
        let rows = vec![inventory("A", u64::MAX), inventory("B", u64::MAX)];
        let slices = market_share(&rows);
        assert!(slices.iter().all(|s| s.percent == 100));
    }

    #[test]
    fn test_room_series_respects_room_selector() {
        let prices = vec![PriceRow {
            district: "A".to_string(),
            avg_price_per_area: 40.0,
            price_per_area_by_room: ByRoom::new(1.0, 2.0, 3.0, 4.0),
        }];

        let all = room_series(&prices, RoomSelector::All);
        assert_eq!(all.labels, vec!["A"]);
        assert_eq!(all.series.len(), 4);

        let three = room_series(&prices, RoomSelector::Category(RoomCategory::Three));
        assert_eq!(three.series.len(), 1);
        assert_eq!(three.series[0].values, vec![3.0]);
        assert_eq!(three.series[0].name, "3 rooms");
    }

    #[test]
    fn test_table_placeholder_on_join_miss() {
        let inventory_rows = vec![inventory("A", 1250), inventory("C", 10)];
        let prices = vec![PriceRow {
            district: "A".to_string(),
            avg_price_per_area: 52000.0,
            price_per_area_by_room: ByRoom::default(),
        }];

        let rows = table_rows(&inventory_rows, &prices);
        assert_eq!(rows[0].total, "1,250");
        assert_eq!(rows[0].price_per_area, "52,000 ₴");
        assert_eq!(rows[1].price_per_area, "—");
    }

    #[test]
    fn test_share_serializes_stable_field_names() {
        let slices = market_share(&[inventory("A", 5)]);
        let json = serde_json::to_value(&slices[0]).unwrap();
        assert_eq!(json["label"], "A");
        assert_eq!(json["value"], 5);
        assert_eq!(json["colorIndex"], 0);
    }
}
