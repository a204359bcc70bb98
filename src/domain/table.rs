use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::timefmt;
use crate::domain::vehicle::{Vehicle, VehicleId, VehicleStatus};

/// One spreadsheet row with every cell already formatted for display.
/// Unset timestamps render as empty cells.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: VehicleId,
    pub date: String,
    pub plate: String,
    pub driver: String,
    pub carrier: String,
    pub client: String,
    pub reference_code: String,
    pub vehicle_type: String,
    pub operation_type: String,
    pub movement_type: String,
    pub status: VehicleStatus,
    pub status_label: String,
    pub scheduled: String,
    pub arrived: String,
    pub docked: String,
    pub left_dock: String,
    pub left_facility: String,
    pub time_at_dock: String,
    pub time_at_facility: String,
    pub notes: String,
}

impl TableRow {
    /// Formats a record into a row. Times on the record's own date show as
    /// bare `HH:MM`; times that spilled into another day carry the date too.
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        let cell = |stamp: Option<DateTime<Utc>>| {
            stamp
                .map(|instant| timefmt::format_time_compact(instant, vehicle.date))
                .unwrap_or_default()
        };

        Self {
            id: vehicle.id.clone(),
            date: timefmt::format_date(vehicle.date),
            plate: vehicle.plate.clone(),
            driver: vehicle.driver.clone(),
            carrier: vehicle.carrier.clone(),
            client: vehicle.client.clone(),
            reference_code: vehicle.reference_code.clone(),
            vehicle_type: vehicle.vehicle_type.clone(),
            operation_type: vehicle.operation_type.clone(),
            movement_type: vehicle.movement_type.clone(),
            status: vehicle.status,
            status_label: vehicle.status.to_string(),
            scheduled: cell(vehicle.scheduled_at),
            arrived: cell(vehicle.arrived_at),
            docked: cell(vehicle.docked_at),
            left_dock: cell(vehicle.left_dock_at),
            left_facility: cell(vehicle.left_facility_at),
            time_at_dock: vehicle.time_at_dock.clone(),
            time_at_facility: vehicle.time_at_facility.clone(),
            notes: vehicle.notes.clone(),
        }
    }
}

/// Projects already-filtered records into rows, preserving their order.
pub fn rows(vehicles: &[&Vehicle]) -> Vec<TableRow> {
    vehicles.iter().map(|v| TableRow::from_vehicle(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::VehicleDraft;
    use chrono::{NaiveDate, TimeZone};

    fn base_draft() -> VehicleDraft {
        VehicleDraft {
            date: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            plate: "abc1d23".to_string(),
            driver: "João".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_row_formats_date_and_plate() {
        let vehicle = Vehicle::from_draft(VehicleId::generate(), base_draft());
        let row = TableRow::from_vehicle(&vehicle);

        assert_eq!(row.date, "01/03/2024");
        assert_eq!(row.plate, "ABC1D23");
        assert_eq!(row.driver, "João");
    }

    #[test]
    fn test_unset_timestamps_render_empty() {
        let vehicle = Vehicle::from_draft(VehicleId::generate(), base_draft());
        let row = TableRow::from_vehicle(&vehicle);

        assert_eq!(row.scheduled, "");
        assert_eq!(row.arrived, "");
        assert_eq!(row.docked, "");
        assert_eq!(row.left_dock, "");
        assert_eq!(row.left_facility, "");
        assert_eq!(row.time_at_dock, "");
    }

    #[test]
    fn test_same_day_times_render_compact() {
        let mut draft = base_draft();
        draft.arrived_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 7, 5, 0).unwrap());
        let vehicle = Vehicle::from_draft(VehicleId::generate(), draft);

        let row = TableRow::from_vehicle(&vehicle);
        assert_eq!(row.arrived, "07:05");
    }

    #[test]
    fn test_cross_day_times_carry_the_date() {
        let mut draft = base_draft();
        draft.left_facility_at = Some(Utc.with_ymd_and_hms(2024, 3, 2, 1, 30, 0).unwrap());
        let vehicle = Vehicle::from_draft(VehicleId::generate(), draft);

        let row = TableRow::from_vehicle(&vehicle);
        assert_eq!(row.left_facility, "02/03/2024 01:30");
    }

    #[test]
    fn test_status_label_uses_display_form() {
        let mut draft = base_draft();
        draft.status = Some(VehicleStatus::NoShow);
        let vehicle = Vehicle::from_draft(VehicleId::generate(), draft);

        let row = TableRow::from_vehicle(&vehicle);
        assert_eq!(row.status_label, "No-Show");
    }

    #[test]
    fn test_rows_preserve_input_order() {
        let first = Vehicle::from_draft(VehicleId::generate(), base_draft());
        let second = Vehicle::from_draft(
            VehicleId::generate(),
            VehicleDraft {
                plate: "zzz9z99".to_string(),
                ..base_draft()
            },
        );

        let projected = rows(&[&first, &second]);
        assert_eq!(projected.len(), 2);
        assert_eq!(projected[0].plate, "ABC1D23");
        assert_eq!(projected[1].plate, "ZZZ9Z99");
    }
}
