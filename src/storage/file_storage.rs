use crate::{
    domain::{Settings, Vehicle},
    error::Result,
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation.
///
/// Keeps two pretty-printed JSON files under a `.yardboard` directory, one
/// for the record set and one for settings.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const DATA_DIR: &'static str = ".yardboard";
    const VEHICLES_FILE: &'static str = "vehicles.json";
    const SETTINGS_FILE: &'static str = "settings.json";

    /// Creates a new FileStorage instance rooted at the given directory
    pub fn new(data_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: data_root.as_ref().join(Self::DATA_DIR),
        }
    }

    fn vehicles_file(&self) -> PathBuf {
        self.root_path.join(Self::VEHICLES_FILE)
    }

    fn settings_file(&self) -> PathBuf {
        self.root_path.join(Self::SETTINGS_FILE)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }

    /// Writes through a sibling temp file and renames it into place, so a
    /// crash mid-write never leaves a truncated live file.
    async fn write_atomically(&self, path: &Path, json: String) -> Result<()> {
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, path).await?;
        Ok(())
    }

    async fn read_json_file<T>(&self, path: &Path) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path).await?;
        let value = serde_json::from_str(&contents)?;
        Ok(Some(value))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists().await
    }

    async fn load_vehicles(&self) -> Result<Option<Vec<Vehicle>>> {
        self.read_json_file(&self.vehicles_file()).await
    }

    async fn save_vehicles(&self, vehicles: &[Vehicle]) -> Result<()> {
        self.ensure_directory_exists().await?;
        let json = serde_json::to_string_pretty(vehicles)?;
        self.write_atomically(&self.vehicles_file(), json).await
    }

    async fn load_settings(&self) -> Result<Option<Settings>> {
        self.read_json_file(&self.settings_file()).await
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.ensure_directory_exists().await?;
        let json = serde_json::to_string_pretty(settings)?;
        self.write_atomically(&self.settings_file(), json).await
    }
}
