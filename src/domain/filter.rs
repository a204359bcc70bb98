use chrono::NaiveDate;

use crate::domain::vehicle::{Vehicle, VehicleStatus};

/// Criteria for narrowing the record set. All dimensions are optional and
/// combine as a conjunction; an empty filter matches everything.
///
/// Client and carrier are case-insensitive substring matches, status and
/// date match exactly. Both the board and the table run their records
/// through the same filter, so the two views always agree on what is
/// visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilter {
    pub client: Option<String>,
    pub status: Option<VehicleStatus>,
    pub carrier: Option<String>,
    /// Record date match.
    pub date: Option<NaiveDate>,
}

impl VehicleFilter {
    pub fn is_empty(&self) -> bool {
        self.client.is_none() && self.status.is_none() && self.carrier.is_none() && self.date.is_none()
    }

    /// Whether a single record passes every set dimension.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.client.as_deref().map_or(true, |term| contains_ci(&vehicle.client, term))
            && self.status.map_or(true, |status| vehicle.status == status)
            && self.carrier.as_deref().map_or(true, |term| contains_ci(&vehicle.carrier, term))
            && self.date.map_or(true, |date| vehicle.date == date)
    }

    /// Filters a slice down to the records that pass, preserving order.
    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        vehicles.iter().filter(|vehicle| self.matches(vehicle)).collect()
    }
}

/// Case-insensitive substring search over a record's text fields, derived
/// times included. A blank term matches every record.
pub fn search_matches(vehicle: &Vehicle, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    vehicle
        .text_fields()
        .iter()
        .any(|field| contains_ci(field, term))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
