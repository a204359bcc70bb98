use crate::{
    domain::{Settings, Vehicle},
    error::Result,
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;

/// Storage trait for persisting the record set and settings.
///
/// Both halves are persisted whole: the record set is small enough that
/// replacing the entire blob on every write keeps the backend trivial and
/// the on-disk form identical to a backup file.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Prepares the backend (creates directories, opens handles).
    async fn initialize(&self) -> Result<()>;

    /// Loads all vehicle records. `None` means nothing has been saved yet,
    /// which is distinct from an empty record set.
    async fn load_vehicles(&self) -> Result<Option<Vec<Vehicle>>>;

    /// Replaces the persisted record set.
    async fn save_vehicles(&self, vehicles: &[Vehicle]) -> Result<()>;

    /// Loads the persisted settings, `None` when never saved.
    async fn load_settings(&self) -> Result<Option<Settings>>;

    /// Replaces the persisted settings.
    async fn save_settings(&self, settings: &Settings) -> Result<()>;
}
