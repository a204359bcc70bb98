use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{timefmt, Settings, Theme, Vehicle};
use crate::error::{Result, YardboardError};

/// Format version written into every export.
pub const BACKUP_VERSION: &str = "1.0";

/// A transportable snapshot of the whole facility state.
///
/// The export always carries the full record set, the settings, an export
/// timestamp and a format version. On the way back in only the record array
/// is mandatory, so hand-assembled or trimmed files still import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSnapshot {
    pub vehicles: Vec<Vehicle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<BackupSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    BACKUP_VERSION.to_string()
}

impl BackupSnapshot {
    /// Builds an export of the given state, stamped with the current time.
    pub fn export(vehicles: Vec<Vehicle>, settings: &Settings) -> Self {
        Self {
            vehicles,
            settings: Some(BackupSettings::from_settings(settings)),
            export_date: Some(Utc::now()),
            version: default_version(),
        }
    }

    /// Parses and validates a backup payload.
    ///
    /// Anything that is not a JSON object with a `vehicles` array of records
    /// that all carry a non-blank id is rejected; nothing is applied here.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|error| YardboardError::InvalidBackup(error.to_string()))?;

        for vehicle in &snapshot.vehicles {
            if vehicle.id.is_empty() {
                return Err(YardboardError::InvalidBackup(
                    "vehicle record without an id".to_string(),
                ));
            }
        }

        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File name an export should be offered under, derived from the export
    /// date: `yard-backup-DD-MM-YYYY.json`.
    pub fn suggested_file_name(&self) -> String {
        let date = self
            .export_date
            .unwrap_or_else(Utc::now)
            .format("%d-%m-%Y");
        format!("yard-backup-{}.json", date)
    }
}

/// Settings as carried inside a backup. Every field is optional so a backup
/// that never saved a theme does not reset the current one on import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
}

impl BackupSettings {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            theme: Some(settings.theme),
            company_logo: settings.company_logo.clone(),
        }
    }

    /// Overlays the carried fields onto the current settings; absent fields
    /// keep their current value.
    pub fn merge_into(&self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(logo) = &self.company_logo {
            settings.company_logo = Some(logo.clone());
        }
    }
}

/// A validated backup waiting for the caller's go-ahead.
///
/// Staging never touches the store. The caller shows `summary` to the
/// operator and either commits the import or simply drops this value to
/// decline it.
#[derive(Debug, Clone)]
pub struct PendingImport {
    snapshot: BackupSnapshot,
    current_count: usize,
}

impl PendingImport {
    pub(crate) fn new(snapshot: BackupSnapshot, current_count: usize) -> Self {
        Self {
            snapshot,
            current_count,
        }
    }

    /// Records the store held when this import was staged.
    pub fn current_count(&self) -> usize {
        self.current_count
    }

    /// Records the backup would bring in.
    pub fn vehicle_count(&self) -> usize {
        self.snapshot.vehicles.len()
    }

    pub fn export_date(&self) -> Option<DateTime<Utc>> {
        self.snapshot.export_date
    }

    pub fn includes_settings(&self) -> bool {
        self.snapshot.settings.is_some()
    }

    /// Human-readable description of what committing would do, for the
    /// confirmation prompt.
    pub fn summary(&self) -> String {
        let mut text = match self.export_date() {
            Some(date) => format!(
                "Import backup created on {}?",
                timefmt::format_date_time(date)
            ),
            None => "Import backup?".to_string(),
        };
        text.push_str(&format!(
            " This replaces the current {} records with {} records from the backup",
            self.current_count,
            self.vehicle_count()
        ));
        if self.includes_settings() {
            text.push_str(" and overwrites the saved settings");
        }
        text.push('.');
        text
    }

    pub(crate) fn into_snapshot(self) -> BackupSnapshot {
        self.snapshot
    }
}
