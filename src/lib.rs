//! # Yardboard Core
//!
//! Core business logic and domain models for tracking vehicles through a
//! logistics facility's yard and docks.
//!
//! This crate provides the record store, the status lifecycle with its
//! auto-stamped timestamps, derived-time computation, backup export/import
//! and the board and table view projections, without any dependency on
//! specific UI implementations or storage backends.

pub mod backup;
pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use backup::{BackupSnapshot, PendingImport};
pub use domain::{
    board::{BoardLane, BoardView, Lane, StatusCounts},
    filter::VehicleFilter,
    settings::{Settings, Theme},
    table::TableRow,
    vehicle::{Vehicle, VehicleDraft, VehicleId, VehiclePatch, VehicleStatus},
};
pub use error::{Result, YardboardError};
pub use storage::Storage;
pub use store::VehicleStore;
