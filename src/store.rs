use chrono::Utc;
use tracing::{debug, warn};

use crate::backup::{BackupSnapshot, PendingImport};
use crate::domain::{
    table, BoardView, Settings, StatusCounts, TableRow, Theme, Vehicle, VehicleDraft,
    VehicleFilter, VehicleId, VehiclePatch, VehicleStatus,
};
use crate::error::{Result, YardboardError};
use crate::storage::Storage;

/// Single source of truth for the facility.
///
/// Owns the vehicle records and settings, keeps them authoritative in
/// memory and mirrors every change to the storage backend. A storage fault
/// surfaces as an error but never rolls back the in-memory change; the next
/// successful write persists the full current state anyway.
pub struct VehicleStore {
    vehicles: Vec<Vehicle>,
    settings: Settings,
    storage: Box<dyn Storage>,
}

impl VehicleStore {
    /// Opens the store on a backend and loads whatever it has.
    ///
    /// Opening never fails. A backend that cannot be read (missing, corrupt,
    /// permission trouble) is logged and the store starts empty; later
    /// writes still go to the backend.
    pub async fn open(storage: Box<dyn Storage>) -> Self {
        if let Err(error) = storage.initialize().await {
            warn!(%error, "storage initialization failed");
        }

        let vehicles = match storage.load_vehicles().await {
            Ok(Some(vehicles)) => vehicles,
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(%error, "could not read saved records, starting empty");
                Vec::new()
            }
        };
        let settings = match storage.load_settings().await {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(error) => {
                warn!(%error, "could not read saved settings, using defaults");
                Settings::default()
            }
        };

        let mut store = Self {
            vehicles,
            settings,
            storage,
        };
        // Hand-edited files may carry stale plates or derived times.
        for vehicle in &mut store.vehicles {
            vehicle.normalize();
        }
        store
    }

    /// Creates a record from a draft and appends it to the collection.
    pub async fn add_vehicle(&mut self, draft: VehicleDraft) -> Result<Vehicle> {
        let vehicle = Vehicle::from_draft(VehicleId::generate(), draft);
        self.vehicles.push(vehicle.clone());
        self.persist_vehicles().await?;
        Ok(vehicle)
    }

    /// Merges a partial update onto an existing record.
    pub async fn update_vehicle(&mut self, id: &VehicleId, patch: VehiclePatch) -> Result<Vehicle> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|vehicle| &vehicle.id == id)
            .ok_or_else(|| YardboardError::VehicleNotFound(id.to_string()))?;
        vehicle.apply_patch(patch);
        let updated = vehicle.clone();
        self.persist_vehicles().await?;
        Ok(updated)
    }

    /// Moves a record to a new status, stamping the matching timestamp the
    /// first time: entering Dock stamps `docked_at`, entering Finalized
    /// stamps `left_dock_at`. A stamp that is already set is never
    /// overwritten, so bouncing between statuses keeps the original times.
    pub async fn update_status(&mut self, id: &VehicleId, status: VehicleStatus) -> Result<Vehicle> {
        let vehicle = self
            .vehicle(id)
            .ok_or_else(|| YardboardError::VehicleNotFound(id.to_string()))?;

        let mut patch = VehiclePatch {
            status: Some(status),
            ..Default::default()
        };
        match status {
            VehicleStatus::Dock if vehicle.docked_at.is_none() => {
                patch.docked_at = Some(Some(Utc::now()));
            }
            VehicleStatus::Finalized if vehicle.left_dock_at.is_none() => {
                patch.left_dock_at = Some(Some(Utc::now()));
            }
            _ => {}
        }

        self.update_vehicle(id, patch).await
    }

    /// Removes a record.
    pub async fn delete_vehicle(&mut self, id: &VehicleId) -> Result<()> {
        let index = self
            .vehicles
            .iter()
            .position(|vehicle| &vehicle.id == id)
            .ok_or_else(|| YardboardError::VehicleNotFound(id.to_string()))?;
        self.vehicles.remove(index);
        self.persist_vehicles().await
    }

    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| &vehicle.id == id)
    }

    /// All records in insertion order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicles_by_status(&self, status: VehicleStatus) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.status == status)
            .collect()
    }

    /// Records whose client contains the term, case-insensitively.
    pub fn vehicles_by_client(&self, client: &str) -> Vec<&Vehicle> {
        let filter = VehicleFilter {
            client: Some(client.to_string()),
            ..Default::default()
        };
        filter.apply(&self.vehicles)
    }

    /// Distinct client names for a filter dropdown: trimmed, empty names
    /// dropped, alphabetically sorted.
    pub fn unique_clients(&self) -> Vec<String> {
        let mut clients: Vec<String> = self
            .vehicles
            .iter()
            .map(|vehicle| vehicle.client.trim())
            .filter(|client| !client.is_empty())
            .map(str::to_string)
            .collect();
        clients.sort();
        clients.dedup();
        clients
    }

    /// Case-insensitive substring search across every text field.
    pub fn search(&self, term: &str) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| crate::domain::search_matches(vehicle, term))
            .collect()
    }

    /// Records passing the filter, in insertion order.
    pub fn filtered(&self, filter: &VehicleFilter) -> Vec<&Vehicle> {
        filter.apply(&self.vehicles)
    }

    /// Board projection of the filtered records.
    pub fn board(&self, filter: &VehicleFilter) -> BoardView {
        BoardView::build(&self.filtered(filter))
    }

    /// Table projection of the filtered records.
    pub fn table(&self, filter: &VehicleFilter) -> Vec<TableRow> {
        table::rows(&self.filtered(filter))
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.vehicles)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.settings.theme = theme;
        self.persist_settings().await
    }

    /// Flips the theme and returns the new one.
    pub async fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.settings.theme.toggled();
        self.settings.theme = theme;
        self.persist_settings().await?;
        Ok(theme)
    }

    pub async fn set_logo(&mut self, logo_data_url: String) -> Result<()> {
        self.settings.company_logo = Some(logo_data_url);
        self.persist_settings().await
    }

    pub async fn clear_logo(&mut self) -> Result<()> {
        self.settings.company_logo = None;
        self.persist_settings().await
    }

    /// Snapshot of the full current state for export.
    pub fn export_backup(&self) -> BackupSnapshot {
        BackupSnapshot::export(self.vehicles.clone(), &self.settings)
    }

    /// Validates a backup payload without applying anything. The returned
    /// value describes what a commit would do; dropping it declines the
    /// import.
    pub fn stage_import(&self, json: &str) -> Result<PendingImport> {
        let snapshot = BackupSnapshot::from_json(json)?;
        Ok(PendingImport::new(snapshot, self.vehicles.len()))
    }

    /// Applies a staged import: the incoming records replace the collection
    /// wholesale, carried settings overlay the current ones, and both halves
    /// are persisted. Derived fields are recomputed rather than trusted.
    pub async fn commit_import(&mut self, pending: PendingImport) -> Result<()> {
        let snapshot = pending.into_snapshot();

        self.vehicles = snapshot.vehicles;
        for vehicle in &mut self.vehicles {
            vehicle.normalize();
        }
        if let Some(carried) = snapshot.settings {
            carried.merge_into(&mut self.settings);
        }
        debug!(records = self.vehicles.len(), "imported backup");

        self.persist_vehicles().await?;
        self.persist_settings().await
    }

    async fn persist_vehicles(&self) -> Result<()> {
        self.storage.save_vehicles(&self.vehicles).await
    }

    async fn persist_settings(&self) -> Result<()> {
        self.storage.save_settings(&self.settings).await
    }
}
