//! Skip size record as served by the size API

use serde::{Deserialize, Serialize};

/// One skip size offering at a location.
///
/// Field names follow the snake_case keys of the wire payload. Unknown keys
/// in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRecord {
    pub id: u32,
    /// Nominal container size in cubic yards
    pub size: u32,
    pub hire_period_days: u32,
    /// Absent when the API sends `null`; never read as zero
    #[serde(default)]
    pub transport_cost: Option<f64>,
    #[serde(default)]
    pub per_tonne_cost: Option<f64>,
    pub price_before_vat: f64,
    pub vat: f64,
    pub postcode: String,
    pub area: String,
    pub forbidden: bool,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

impl SizeRecord {
    /// Whether this record may be selected under the given heavy-waste constraint
    pub fn is_selectable(&self, has_heavy_waste: bool) -> bool {
        !has_heavy_waste || self.allows_heavy_waste
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "id": 17933,
        "size": 4,
        "hire_period_days": 14,
        "transport_cost": null,
        "price_before_vat": 278,
        "vat": 20,
        "postcode": "NR32",
        "area": "",
        "forbidden": false,
        "created_at": "2025-04-03T13:51:46.897146",
        "allowed_on_road": true,
        "allows_heavy_waste": true
    }"#;

    #[test]
    fn test_decode_wire_record() {
        let record: SizeRecord = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(record.id, 17933);
        assert_eq!(record.size, 4);
        assert_eq!(record.hire_period_days, 14);
        assert!((record.price_before_vat - 278.0).abs() < f64::EPSILON);
        assert!(record.allowed_on_road);
    }

    #[test]
    fn test_optional_costs_stay_absent() {
        let record: SizeRecord = serde_json::from_str(PAYLOAD).unwrap();
        // null and missing both decode to None
        assert_eq!(record.transport_cost, None);
        assert_eq!(record.per_tonne_cost, None);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["transport_cost"].is_null());
    }

    #[test]
    fn test_is_selectable() {
        let mut record: SizeRecord = serde_json::from_str(PAYLOAD).unwrap();
        record.allows_heavy_waste = false;
        assert!(record.is_selectable(false));
        assert!(!record.is_selectable(true));
    }
}
