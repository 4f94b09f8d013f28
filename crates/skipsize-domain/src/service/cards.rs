//! Card view model for rendering size records

use serde::Serialize;

use crate::model::SizeRecord;

pub const HEADING: &str = "Choose Your Skip Size";
pub const SUBHEADING: &str = "Select the skip size that best suits your needs";
pub const ROAD_WARNING: &str = "Not Allowed On The Road";
pub const HEAVY_WASTE_WARNING: &str = "Not Suitable for Heavy Waste";

/// Everything a front end needs to draw one selectable size card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeCard {
    pub id: u32,
    pub title: String,
    pub price: String,
    pub hire_period: String,
    pub selected: bool,
    /// Disabled cards are drawn de-emphasized and ignore clicks
    pub disabled: bool,
    pub road_warning: bool,
    pub heavy_waste_warning: bool,
}

impl SizeCard {
    pub fn from_record(record: &SizeRecord, selected_id: Option<u32>, has_heavy_waste: bool) -> Self {
        let not_allowed = !record.is_selectable(has_heavy_waste);
        Self {
            id: record.id,
            title: format!("{} Yard Skip", record.size),
            price: format_price(record.price_before_vat),
            hire_period: format!("{} day hire period", record.hire_period_days),
            selected: selected_id == Some(record.id),
            disabled: not_allowed,
            road_warning: !record.allowed_on_road,
            heavy_waste_warning: not_allowed,
        }
    }

    /// Warning badge texts in display order
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.road_warning {
            warnings.push(ROAD_WARNING);
        }
        if self.heavy_waste_warning {
            warnings.push(HEAVY_WASTE_WARNING);
        }
        warnings
    }
}

/// Price before VAT in its shortest decimal form, e.g. `£278` or `£311.5`
pub fn format_price(price: f64) -> String {
    format!("£{}", price)
}

/// Split records into (allowed, not allowed) for the heavy-waste constraint.
///
/// Without the constraint every record is allowed. Fetched order is kept
/// inside each partition.
pub fn partition(records: &[SizeRecord], has_heavy_waste: bool) -> (Vec<&SizeRecord>, Vec<&SizeRecord>) {
    if !has_heavy_waste {
        return (records.iter().collect(), Vec::new());
    }
    records.iter().partition(|r| r.allows_heavy_waste)
}
