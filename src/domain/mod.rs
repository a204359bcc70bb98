pub mod board;
pub mod filter;
pub mod settings;
pub mod table;
pub mod timefmt;
pub mod vehicle;

pub use board::{BoardLane, BoardView, Lane, StatusCounts};
pub use filter::{search_matches, VehicleFilter};
pub use settings::{Settings, Theme};
pub use table::TableRow;
pub use vehicle::{OperationKind, Vehicle, VehicleDraft, VehicleId, VehiclePatch, VehicleStatus};
