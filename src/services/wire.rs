//! Wire shapes returned by the data service and their normalization into
//! canonical rows.
//!
//! Sources disagree on where the per-room numbers live: some send flat
//! `rooms1..rooms4` fields, others nest them under `byRooms` keyed by `"1"`,
//! `"2"`, `"4+"` and so on. Everything is folded onto the fixed room set here,
//! with missing categories defaulting to zero.

use crate::models::{
    error::AppError,
    market::{AvgUnitPriceRow, InventoryRow, PriceRow},
    room::{ByRoom, RoomCategory},
};
use serde::Deserialize;
use serde_json::{Map, Value};

type WireRow = Map<String, Value>;

/// Keys under which a source may nest the per-room breakdown.
const NESTED_ROOM_KEYS: &[&str] = &["byRooms", "by_rooms", "rooms", "counts"];

/// Keys for the district-wide price per square metre.
const AVG_PRICE_KEYS: &[&str] = &["avgPrice", "avgPricePerArea", "avg_price"];

/// Accepts a bare array or the usual `{"results": [...]}` / `{"data": [...]}` envelopes.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Envelope {
    Bare(Vec<WireRow>),
    Results { results: Vec<WireRow> },
    Data { data: Vec<WireRow> },
}

impl Envelope {
    fn into_rows(self) -> Vec<WireRow> {
        match self {
            Self::Bare(rows) | Self::Results { results: rows } | Self::Data { data: rows } => rows,
        }
    }
}

/// Error body the service sends alongside non-success statuses.
#[derive(Deserialize, Debug)]
struct ServiceErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Pulls the service's own error message out of a response body, if there is one.
pub fn service_error_message(body: &str) -> Option<String> {
    let parsed: ServiceErrorBody = serde_json::from_str(body).ok()?;
    non_blank(parsed.message).or_else(|| non_blank(parsed.error))
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|m| m.trim().to_string()).filter(|m| !m.is_empty())
}

pub fn parse_inventory(body: &str) -> Result<Vec<InventoryRow>, AppError> {
    rows(body)?.iter().map(inventory_row).collect()
}

pub fn parse_prices(body: &str) -> Result<Vec<PriceRow>, AppError> {
    rows(body)?.iter().map(price_row).collect()
}

pub fn parse_avg_prices(body: &str) -> Result<Vec<AvgUnitPriceRow>, AppError> {
    rows(body)?.iter().map(avg_price_row).collect()
}

fn rows(body: &str) -> Result<Vec<WireRow>, AppError> {
    serde_json::from_str::<Envelope>(body)
        .map(Envelope::into_rows)
        .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
}

fn inventory_row(row: &WireRow) -> Result<InventoryRow, AppError> {
    let mut counts = ByRoom::<u64>::default();
    // Several source keys may fold into "4+" (e.g. "4" and "5"), so they add up.
    for (category, value) in room_entries(row) {
        let count = counts.get_mut(category);
        *count = count.saturating_add(as_count(value).unwrap_or(0));
    }

    let total = row
        .get("total")
        .and_then(as_count)
        .unwrap_or_else(|| counts.sum());

    Ok(InventoryRow {
        district: district(row)?,
        total,
        counts,
    })
}

fn price_row(row: &WireRow) -> Result<PriceRow, AppError> {
    let avg_price_per_area = AVG_PRICE_KEYS
        .iter()
        .find_map(|key| row.get(*key).and_then(as_number))
        .unwrap_or(0.0);

    Ok(PriceRow {
        district: district(row)?,
        avg_price_per_area,
        price_per_area_by_room: room_prices(row),
    })
}

fn avg_price_row(row: &WireRow) -> Result<AvgUnitPriceRow, AppError> {
    Ok(AvgUnitPriceRow {
        district: district(row)?,
        avg_unit_price_by_room: room_prices(row),
    })
}

fn district(row: &WireRow) -> Result<String, AppError> {
    row.get("district")
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| AppError::DataError("Row without a district name".to_string()))
}

fn room_prices(row: &WireRow) -> ByRoom<f64> {
    let mut prices = ByRoom::<f64>::default();
    let mut seen = ByRoom::<bool>::default();
    for (category, value) in room_entries(row) {
        if seen.get(category) {
            continue;
        }
        if let Some(price) = as_number(value) {
            *prices.get_mut(category) = price;
            *seen.get_mut(category) = true;
        }
    }
    prices
}

/// Room-keyed values from the nested map if present, otherwise from flat fields.
fn room_entries(row: &WireRow) -> Vec<(RoomCategory, &Value)> {
    let source = NESTED_ROOM_KEYS
        .iter()
        .find_map(|key| row.get(*key).and_then(Value::as_object))
        .unwrap_or(row);

    source
        .iter()
        .filter_map(|(key, value)| RoomCategory::from_key(key).map(|c| (c, value)))
        .collect()
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_count(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| as_number(value).filter(|n| *n >= 0.0).map(|n| n.round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_nested_by_rooms() {
        let json = r#"[{
            "district": "Pecherskyi",
            "total": 1250,
            "byRooms": {"1": 280, "2": 420, "3": 380, "4": 170}
        }]"#;

        let rows = parse_inventory(json).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, 1250);
        assert_eq!(rows[0].counts, ByRoom::new(280, 420, 380, 170));
    }

    #[test]
    fn test_inventory_missing_categories_default_to_zero() {
        let json = r#"[{"district": "Obolonskyi", "total": 300, "byRooms": {"2": 300}}]"#;

        let rows = parse_inventory(json).unwrap();
        assert_eq!(rows[0].counts, ByRoom::new(0, 300, 0, 0));
    }

    #[test]
    fn test_inventory_flat_fields_and_large_rooms_fold() {
        let json = r#"{"results": [{
            "district": "Darnytskyi",
            "rooms1": 220, "rooms2": 280, "rooms3": 180, "rooms4": 50, "rooms5": 30
        }]}"#;

        let rows = parse_inventory(json).unwrap();
        assert_eq!(rows[0].counts.four_plus, 80);
        // No total on the wire: derived from the breakdown.
        assert_eq!(rows[0].total, 760);
    }

    #[test]
    fn test_inventory_inconsistent_total_passes_through() {
        let json = r#"[{"district": "A", "total": 5, "byRooms": {"1": 1}}]"#;

        let rows = parse_inventory(json).unwrap();
        assert_eq!(rows[0].total, 5);
        assert!(!rows[0].is_consistent());
    }

    #[test]
    fn test_inventory_fold_saturates() {
        let json = r#"[{
            "district": "A",
            "total": 1,
            "byRooms": {"4": 18446744073709551615, "5": 1}
        }]"#;

        let rows = parse_inventory(json).unwrap();
        assert_eq!(rows[0].counts.four_plus, u64::MAX);
    }

    #[test]
    fn test_price_rows() {
        let json = r#"{"data": [{
            "district": "Podilskyi",
            "avgPrice": 38000,
            "rooms1": 42000, "rooms2": 40000, "rooms3": 37000, "rooms4": 35000
        }]}"#;

        let rows = parse_prices(json).unwrap();
        assert_eq!(rows[0].avg_price_per_area, 38000.0);
        assert_eq!(
            rows[0].price_per_area_by_room,
            ByRoom::new(42000.0, 40000.0, 37000.0, 35000.0)
        );
    }

    #[test]
    fn test_avg_price_rows_nested() {
        let json = r#"[{
            "district": "Desnianskyi",
            "byRooms": {"1": 1500000, "2": "2320000", "4+": 4160000}
        }]"#;

        let rows = parse_avg_prices(json).unwrap();
        assert_eq!(
            rows[0].avg_unit_price_by_room,
            ByRoom::new(1_500_000.0, 2_320_000.0, 0.0, 4_160_000.0)
        );
    }

    #[test]
    fn test_row_without_district_is_rejected() {
        let json = r#"[{"total": 10}]"#;
        assert!(matches!(
            parse_inventory(json),
            Err(AppError::DataError(_))
        ));
    }

    #[test]
    fn test_non_array_body_is_rejected() {
        assert!(parse_prices(r#"{"unexpected": true}"#).is_err());
        assert!(parse_prices("not json").is_err());
    }

    #[test]
    fn test_service_error_message() {
        assert_eq!(
            service_error_message(r#"{"message": "maintenance window"}"#),
            Some("maintenance window".to_string())
        );
        assert_eq!(
            service_error_message(r#"{"error": "bad gateway"}"#),
            Some("bad gateway".to_string())
        );
        assert_eq!(service_error_message(r#"{"message": ""}"#), None);
        assert_eq!(
            service_error_message(r#"{"message": "  ", "error": "bad gateway"}"#),
            Some("bad gateway".to_string())
        );
        assert_eq!(service_error_message("<html>oops</html>"), None);
    }
}
