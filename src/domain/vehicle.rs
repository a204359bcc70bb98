use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::domain::timefmt;

/// Unique identifier for a vehicle record.
///
/// Generated ids are UUIDv4 strings, but any non-blank string is accepted so
/// records restored from a backup keep their original ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(String);

impl VehicleId {
    /// Creates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl FromStr for VehicleId {
    type Err = crate::error::YardboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(crate::error::YardboardError::InvalidVehicleId(s.to_string()))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a vehicle currently is in its transit through the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleStatus {
    /// Arrived (or expected) but not yet assigned a dock.
    #[default]
    Yard,
    /// Actively being loaded or unloaded.
    Dock,
    /// Operation complete, vehicle has left or is leaving.
    Finalized,
    /// Never arrived for a scheduled operation.
    NoShow,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yard => write!(f, "Yard"),
            Self::Dock => write!(f, "Dock"),
            Self::Finalized => write!(f, "Finalized"),
            Self::NoShow => write!(f, "No-Show"),
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = crate::error::YardboardError;

    /// Parses a status leniently: case and the separators in "no-show" /
    /// "no show" are ignored. Anything outside the four known statuses is
    /// rejected rather than stored as-is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        let normalized = normalized.to_lowercase();

        match normalized.as_str() {
            "yard" => Ok(Self::Yard),
            "dock" => Ok(Self::Dock),
            "finalized" => Ok(Self::Finalized),
            "noshow" => Ok(Self::NoShow),
            _ => Err(crate::error::YardboardError::UnknownStatus(s.to_string())),
        }
    }
}

/// Category a free-text operation type falls into, used for card styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Reception,
    Shipping,
    CrossDocking,
    Return,
}

impl OperationKind {
    /// Classifies a free-text operation type.
    ///
    /// Matching is case-insensitive and tolerates both the accented and
    /// plain spellings of the Portuguese operation names alongside their
    /// English equivalents. Unrecognized (and empty) text lands in the
    /// default `Reception` bucket.
    pub fn classify(operation_type: &str) -> Self {
        match operation_type.trim().to_lowercase().as_str() {
            "expedição" | "expedicao" | "shipping" => Self::Shipping,
            "cross docking" | "cross-docking" | "crossdocking" => Self::CrossDocking,
            "devolução" | "devolucao" | "return" => Self::Return,
            _ => Self::Reception,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reception => write!(f, "Reception"),
            Self::Shipping => write!(f, "Shipping"),
            Self::CrossDocking => write!(f, "Cross-docking"),
            Self::Return => write!(f, "Return"),
        }
    }
}

/// One physical transit of a vehicle through the yard and dock.
///
/// The five timestamps stay unset until something actually happens; the two
/// `time_*` strings are derived from them and recomputed on every write, so
/// they are never authoritative on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    /// Reference date of the record.
    pub date: NaiveDate,
    /// License plate, always stored uppercase.
    #[serde(default)]
    pub plate: String,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub client: String,
    /// Document, delivery-ticket or gate-password reference.
    #[serde(default)]
    pub reference_code: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub operation_type: String,
    #[serde(default)]
    pub movement_type: String,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrived_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docked_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_dock_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_facility_at: Option<DateTime<Utc>>,
    /// Derived: elapsed between `docked_at` and `left_dock_at`.
    #[serde(default)]
    pub time_at_dock: String,
    /// Derived: elapsed between `arrived_at` and `left_facility_at`.
    #[serde(default)]
    pub time_at_facility: String,
}

impl Vehicle {
    /// Builds a record from a draft, filling the defaults: today's date, Yard
    /// status, empty strings. Pre-filled timestamps are kept, so the derived
    /// times can be non-empty right from creation.
    pub fn from_draft(id: VehicleId, draft: VehicleDraft) -> Self {
        let mut vehicle = Self {
            id,
            date: draft.date.unwrap_or_else(|| Utc::now().date_naive()),
            plate: draft.plate,
            driver: draft.driver,
            carrier: draft.carrier,
            client: draft.client,
            reference_code: draft.reference_code,
            notes: draft.notes,
            vehicle_type: draft.vehicle_type,
            operation_type: draft.operation_type,
            movement_type: draft.movement_type,
            status: draft.status.unwrap_or_default(),
            scheduled_at: draft.scheduled_at,
            arrived_at: draft.arrived_at,
            docked_at: draft.docked_at,
            left_dock_at: draft.left_dock_at,
            left_facility_at: draft.left_facility_at,
            time_at_dock: String::new(),
            time_at_facility: String::new(),
        };
        vehicle.normalize();
        vehicle
    }

    /// Merges a partial update onto the record. Fields carried by the patch
    /// overwrite, including explicit empty strings; absent fields keep their
    /// prior value; timestamp slots distinguish "leave alone" from "clear".
    pub fn apply_patch(&mut self, patch: VehiclePatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(plate) = patch.plate {
            self.plate = plate;
        }
        if let Some(driver) = patch.driver {
            self.driver = driver;
        }
        if let Some(carrier) = patch.carrier {
            self.carrier = carrier;
        }
        if let Some(client) = patch.client {
            self.client = client;
        }
        if let Some(reference_code) = patch.reference_code {
            self.reference_code = reference_code;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(vehicle_type) = patch.vehicle_type {
            self.vehicle_type = vehicle_type;
        }
        if let Some(operation_type) = patch.operation_type {
            self.operation_type = operation_type;
        }
        if let Some(movement_type) = patch.movement_type {
            self.movement_type = movement_type;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(scheduled_at) = patch.scheduled_at {
            self.scheduled_at = scheduled_at;
        }
        if let Some(arrived_at) = patch.arrived_at {
            self.arrived_at = arrived_at;
        }
        if let Some(docked_at) = patch.docked_at {
            self.docked_at = docked_at;
        }
        if let Some(left_dock_at) = patch.left_dock_at {
            self.left_dock_at = left_dock_at;
        }
        if let Some(left_facility_at) = patch.left_facility_at {
            self.left_facility_at = left_facility_at;
        }
        self.normalize();
    }

    /// Re-establishes the write invariants: plate uppercased, derived times
    /// recomputed. Every path that writes a record funnels through here.
    pub fn normalize(&mut self) {
        self.plate = self.plate.to_uppercase();
        self.refresh_derived_times();
    }

    /// Recomputes both derived times from their source timestamps. This is
    /// the only place they are ever computed.
    pub fn refresh_derived_times(&mut self) {
        self.time_at_dock = timefmt::elapsed(self.docked_at, self.left_dock_at);
        self.time_at_facility = timefmt::elapsed(self.arrived_at, self.left_facility_at);
    }

    /// Styling category of the free-text operation type.
    pub fn operation_kind(&self) -> OperationKind {
        OperationKind::classify(&self.operation_type)
    }

    /// All text fields a search term is matched against, derived times
    /// included.
    pub(crate) fn text_fields(&self) -> [&str; 11] {
        [
            &self.plate,
            &self.driver,
            &self.carrier,
            &self.client,
            &self.reference_code,
            &self.notes,
            &self.vehicle_type,
            &self.operation_type,
            &self.movement_type,
            &self.time_at_dock,
            &self.time_at_facility,
        ]
    }
}

/// Input for creating a record. Everything is optional; unset fields take
/// the documented defaults.
#[derive(Debug, Clone, Default)]
pub struct VehicleDraft {
    pub date: Option<NaiveDate>,
    pub plate: String,
    pub driver: String,
    pub carrier: String,
    pub client: String,
    pub reference_code: String,
    pub notes: String,
    pub vehicle_type: String,
    pub operation_type: String,
    pub movement_type: String,
    pub status: Option<VehicleStatus>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub arrived_at: Option<DateTime<Utc>>,
    pub docked_at: Option<DateTime<Utc>>,
    pub left_dock_at: Option<DateTime<Utc>>,
    pub left_facility_at: Option<DateTime<Utc>>,
}

/// Partial update for an existing record.
///
/// `None` leaves a field untouched. For the timestamp slots the inner option
/// carries the new value: `Some(None)` clears, `Some(Some(t))` sets.
#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub date: Option<NaiveDate>,
    pub plate: Option<String>,
    pub driver: Option<String>,
    pub carrier: Option<String>,
    pub client: Option<String>,
    pub reference_code: Option<String>,
    pub notes: Option<String>,
    pub vehicle_type: Option<String>,
    pub operation_type: Option<String>,
    pub movement_type: Option<String>,
    pub status: Option<VehicleStatus>,
    pub scheduled_at: Option<Option<DateTime<Utc>>>,
    pub arrived_at: Option<Option<DateTime<Utc>>>,
    pub docked_at: Option<Option<DateTime<Utc>>>,
    pub left_dock_at: Option<Option<DateTime<Utc>>>,
    pub left_facility_at: Option<Option<DateTime<Utc>>>,
}
