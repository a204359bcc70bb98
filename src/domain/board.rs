use serde::Serialize;
use std::cmp::Ordering;

use crate::domain::vehicle::{Vehicle, VehicleStatus};

/// Column of the board. No-Show records share the yard lane instead of
/// getting a column of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Yard,
    Dock,
    Finalized,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Yard, Lane::Dock, Lane::Finalized];

    /// Lane a vehicle with the given status is displayed in.
    pub fn for_status(status: VehicleStatus) -> Self {
        match status {
            VehicleStatus::Yard | VehicleStatus::NoShow => Self::Yard,
            VehicleStatus::Dock => Self::Dock,
            VehicleStatus::Finalized => Self::Finalized,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Yard => "Yard",
            Self::Dock => "Dock",
            Self::Finalized => "Finalized",
        }
    }
}

/// One column of the board with its records already in display order.
#[derive(Debug, Clone, Serialize)]
pub struct BoardLane {
    pub lane: Lane,
    pub vehicles: Vec<Vehicle>,
}

/// Snapshot of the kanban board: always all three lanes, each sorted by
/// arrival. A renderer can draw this directly without re-deriving anything.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub lanes: [BoardLane; 3],
}

impl BoardView {
    /// Distributes already-filtered records into lanes and sorts each lane.
    ///
    /// Within a lane records order by arrival ascending. Records without an
    /// arrival sort first so vehicles still expected stay at the top, and
    /// ties keep their incoming order.
    pub fn build(vehicles: &[&Vehicle]) -> Self {
        let mut lanes = Lane::ALL.map(|lane| BoardLane {
            lane,
            vehicles: Vec::new(),
        });

        for vehicle in vehicles {
            let slot = match Lane::for_status(vehicle.status) {
                Lane::Yard => 0,
                Lane::Dock => 1,
                Lane::Finalized => 2,
            };
            lanes[slot].vehicles.push((*vehicle).clone());
        }

        for lane in &mut lanes {
            lane.vehicles.sort_by(compare_arrivals);
        }

        Self { lanes }
    }

    pub fn lane(&self, lane: Lane) -> &BoardLane {
        match lane {
            Lane::Yard => &self.lanes[0],
            Lane::Dock => &self.lanes[1],
            Lane::Finalized => &self.lanes[2],
        }
    }
}

/// Arrival ordering for lane display: unset arrivals first, then ascending.
fn compare_arrivals(a: &Vehicle, b: &Vehicle) -> Ordering {
    match (a.arrived_at, b.arrived_at) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

/// Headline numbers for the facility: one bucket per status plus the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub yard: usize,
    pub dock: usize,
    pub finalized: usize,
    pub no_show: usize,
}

impl StatusCounts {
    /// Counts every record. No-Show is its own bucket here even though the
    /// board folds it into the yard lane.
    pub fn tally(vehicles: &[Vehicle]) -> Self {
        let mut counts = Self::default();
        for vehicle in vehicles {
            counts.total += 1;
            match vehicle.status {
                VehicleStatus::Yard => counts.yard += 1,
                VehicleStatus::Dock => counts.dock += 1,
                VehicleStatus::Finalized => counts.finalized += 1,
                VehicleStatus::NoShow => counts.no_show += 1,
            }
        }
        counts
    }
}
